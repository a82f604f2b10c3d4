pub mod cameras;
mod dump;
pub mod format;
pub mod hardware;
pub mod models;
pub mod relay;
pub mod sensors;
pub mod ui;
mod utils;

use anyhow::Result;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use hardware::{HardwareProvider, HostProvider, SyntheticProvider};

const HELP: &str = "\
hwlens - terminal inspector for a device's cameras and sensors

Usage: hwlens [options]

Options:
    --synthetic  inspect a simulated device instead of this machine
    --dump       print the inventory as JSON and exit
    --help       show this help
";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CliArgs {
    pub synthetic: bool,
    pub dump: bool,
    pub help: bool,
}

impl CliArgs {
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut parsed = Self::default();
        for arg in args {
            match arg.as_str() {
                "--synthetic" => parsed.synthetic = true,
                "--dump" => parsed.dump = true,
                "--help" | "-h" => parsed.help = true,
                other => anyhow::bail!("unknown argument {other} (try --help)"),
            }
        }
        Ok(parsed)
    }
}

pub fn run() -> Result<()> {
    let args = CliArgs::parse(std::env::args().skip(1))?;
    if args.help {
        print!("{HELP}");
        return Ok(());
    }

    // Default quiet while the TUI owns the terminal; RUST_LOG overrides.
    env_logger::Builder::from_default_env()
        .filter_level(if args.dump {
            log::LevelFilter::Info
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let provider: Arc<dyn HardwareProvider> = if args.synthetic {
        Arc::new(SyntheticProvider::new())
    } else {
        Arc::new(HostProvider::new())
    };

    if args.dump {
        return dump::write_inventory(provider.as_ref(), &mut io::stdout());
    }

    log::info!("hwlens starting up...");
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let result = ui::run_app(provider, runtime.handle().clone());
    runtime.shutdown_timeout(Duration::from_secs(1));
    result
}
