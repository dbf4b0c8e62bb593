//! Binary entry point for the attendance formatter.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use attendance_formatter::cli::{self, Cli};

fn main() {
    init_tracing();

    let args = Cli::parse();
    match cli::run(&args) {
        Ok(path) => println!("Report written to: {}", path.display()),
        Err(err) => {
            println!("[ERR] {err}");
            std::process::exit(1);
        }
    }
}

/// Installs the log subscriber; `RUST_LOG` overrides the default level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .compact()
        .init();
}
