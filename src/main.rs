fn main() {
    if let Err(err) = hwlens::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
