use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "trivy2sonar",
    version,
    about = "Convert Trivy filesystem-scan reports into the SonarQube generic issue format"
)]
pub struct Cli {
    /// Path to the Trivy filesystem-scan JSON report
    pub report: PathBuf,

    /// Path the SonarQube generic-issue JSON is written to
    pub output: PathBuf,

    /// Workspace directory the scanned service lives in; scan-mount targets
    /// are rewritten onto this prefix
    pub service_dir: String,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
