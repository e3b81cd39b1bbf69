//! Customer CSV checker CLI.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use custcheck_cli::logging::{LogConfig, LogFormat, init_logging};
use custcheck_cli::pipeline::{BatchConfig, BatchSummary, run_batch};
use custcheck_cli::prompt::resolve_input_dir;
use custcheck_cli::report::write_run_report;
use custcheck_cli::{AcceptedWriter, FileSink};
use tracing::info;
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok((config, summary)) => {
            if !cli.no_summary {
                print_summary(&config, &summary);
            }
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<(BatchConfig, BatchSummary)> {
    let stdin = io::stdin();
    let input_dir = resolve_input_dir(
        cli.input_dir.as_deref(),
        &mut stdin.lock(),
        &mut io::stdout(),
    )
    .context("read input directory")?;

    let config = BatchConfig::new(input_dir, &cli.output_dir, &cli.logs_dir);
    config.prepare_dirs()?;

    let mut output = AcceptedWriter::create(&config.output_file)?;
    let mut sink = FileSink::append(&config.log_file)
        .with_context(|| format!("open log file: {}", config.log_file.display()))?;
    info!(path = %sink.path().display(), "appending rejections");

    let summary = run_batch(&config.input_dir, &mut output, &mut sink)?;
    info!(
        rows = output.rows(),
        path = %config.output_file.display(),
        "accepted rows written"
    );
    output.into_inner()?;

    if let Some(path) = &cli.report {
        let written = write_run_report(path, &config, &summary)?;
        info!(path = %written.display(), "run report written");
    }

    Ok((config, summary))
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.with_timestamps = cli.log_timestamps;
    config.with_target = cli.log_target;
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
