mod cli;
mod error;
mod output;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use fxrate_core::{
    diagnostics, ClientConfig, DateWindow, ExchangeRatePipeline, ReqwestHttpClient, TracingSink,
};

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    let config = build_config(&cli)?;
    diagnostics::install(&cli.log_level, config.log_file.as_deref())?;

    let pipeline = ExchangeRatePipeline::from_config(
        &config,
        Arc::new(ReqwestHttpClient::new()),
        Arc::new(TracingSink::new()),
    );
    let report = pipeline.run(&cli.from, &cli.to, &cli.date).await?;

    output::render(&report, cli.format, cli.pretty)
}

fn build_config(cli: &Cli) -> Result<ClientConfig, CliError> {
    let config = ClientConfig::default()
        .with_base_url(cli.base_url.clone())
        .with_api_key(cli.api_key.clone())
        .with_output_dir(cli.output_dir.clone())
        .with_log_file(cli.log_file())
        .with_timeout_ms(cli.timeout_ms)
        .with_window(DateWindow::parse(&cli.window_start, &cli.window_end)?);
    config.validate()?;
    Ok(config)
}
