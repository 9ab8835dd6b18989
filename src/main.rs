//! sysfetch — one-shot Linux system information CLI.
//!
//! Usage:
//!   sysfetch fetch          # colored system summary
//!   sysfetch fetch --json   # raw snapshot as JSON
//!   sysfetch disk           # disk usage table
//!   sysfetch net            # network interfaces

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use sysfetch::cli::{self, Args};

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = cli::run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber with the appropriate log level.
/// Default is WARN; each -v raises it one step.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("sysfetch={}", level).parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
