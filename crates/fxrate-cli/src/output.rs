use fxrate_core::RunReport;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(report: &RunReport, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    println!("{}", format_report(report, format, pretty)?);
    Ok(())
}

fn format_report(
    report: &RunReport,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, CliError> {
    let rendered = match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(&report.record)?,
        OutputFormat::Json => serde_json::to_string(&report.record)?,
        OutputFormat::Text => {
            let response = &report.record.response;
            [
                format!("catalog     : {} currencies", report.catalog_size),
                format!("from        : {}", response.from),
                format!("to          : {}", response.to),
                format!("rate        : {}", response.rate),
                format!("date        : {}", response.date),
                format!("saved_to    : {}", report.location.display()),
            ]
            .join("\n")
        }
    };

    Ok(rendered)
}
