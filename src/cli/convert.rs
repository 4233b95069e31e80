use crate::cli::commands::Cli;
use crate::convert;
use crate::errors::ConvertError;
use tracing::info;

pub fn handle_convert(cli: &Cli) -> Result<(), ConvertError> {
    info!(
        report = %cli.report.display(),
        service_dir = %cli.service_dir,
        "Converting scan report"
    );
    convert::convert(&cli.report, &cli.output, &cli.service_dir)
}
