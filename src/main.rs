// src/main.rs

use anyhow::Context;
use clap::Parser;
use gh_project_report::{
    execute_pipeline, CommandLineInput, GitHubHttpClient, GraphQlTransport, ReportConfig,
    RunOutcome,
};
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::fs;
use std::sync::Arc;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} [{l}] {m}{n}";

/// Sets up console and temp-file logging.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let log_file_path = std::env::temp_dir().join("gh_project_report.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(&log_file_path)
        .with_context(|| format!("opening log file {}", log_file_path.display()))?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::debug!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = ReportConfig::resolve(cli)?;
    let client = GitHubHttpClient::with_endpoint(
        &config.token,
        config.endpoint.clone(),
        config.timeout,
    )?;
    let transport: Arc<dyn GraphQlTransport> = Arc::new(client);

    match execute_pipeline(config, transport).await? {
        RunOutcome::Delivered(report) => {
            println!(
                "✓ Archive saved to {} ({} report(s))",
                report.path.display(),
                report.entries.len()
            );
        }
        RunOutcome::NothingToReport(reason) => {
            log::warn!("Nothing to report: {}", reason);
        }
    }

    Ok(())
}
