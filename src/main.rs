use std::io;
use std::process;

use ledger::Config;
use tracing::Level;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    if let Err(err) = ledger::run(&Config::default(), stdin.lock(), io::stdout()) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
