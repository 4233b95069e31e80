use clap::Parser;
use tracing_subscriber::EnvFilter;

use trivy2sonar::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.quiet {
        "warn"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .init();

    if let Err(e) = cli::convert::handle_convert(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
