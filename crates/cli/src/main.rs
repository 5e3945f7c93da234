//! Node Efficiency Index CLI entry point.

fn main() {
    if let Err(e) = nei_cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
