//! List/detail renderer and navigation router.
//!
//! Every screen paints the same scrollable record widget; the router decides
//! which records are on it. The terminal is owned for the lifetime of
//! [`run_app`] and restored before returning, error or not.

mod app;
mod input;
mod render;
mod router;

pub use app::App;
pub use router::{Route, Session};

use anyhow::Result;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::sync::Arc;
use tokio::runtime::Handle;

use crate::hardware::HardwareProvider;

pub fn run_app(provider: Arc<dyn HardwareProvider>, runtime: Handle) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(provider, runtime);
    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    app.shutdown();

    result
}
