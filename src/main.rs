use clap::Parser;
use colored::*;
use renderstat::cli::Cli;
use renderstat::RenderStatError;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize logging with RENDERSTAT_LOG environment variable support
    let default_level = if cli.verbose > 0 { "debug" } else { "warn" };
    let log_level = std::env::var("RENDERSTAT_LOG").unwrap_or_else(|_| default_level.to_string());

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::new(&log_level))
        .init();

    if let Err(e) = renderstat::cli::run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        let exit_code = match e.downcast_ref::<RenderStatError>() {
            Some(RenderStatError::Configuration(_)) => 2,
            Some(RenderStatError::DestinationUnavailable { .. }) | Some(RenderStatError::Io(_)) => 3,
            Some(RenderStatError::Scene(_)) | Some(RenderStatError::Serialization(_)) => 4,
            _ => 1,
        };
        process::exit(exit_code);
    }
}
