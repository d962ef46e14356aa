//! `mapi-tags`: canonical names for MAPI property tags.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use mapi_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use mapi_cli::commands::{build_normalizer, run_check, run_convert, run_fetch, run_normalize};
use mapi_cli::logging::{LogConfig, LogFormat, init_logging};
use mapi_cli::summary::{print_check, print_convert, print_fetch, print_normalized};
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    let options = cli.normalization_options();
    match &cli.command {
        Command::Normalize(args) => {
            let normalizer = build_normalizer(&options)?;
            let rows = run_normalize(args, &normalizer);
            print_normalized(&rows);
            Ok(if rows.iter().all(|row| row.name.is_some()) { 0 } else { 1 })
        }
        Command::Fetch(args) => {
            let result = run_fetch(args, &cli.cache_dir)?;
            print_fetch(&result);
            Ok(0)
        }
        Command::Convert(args) => {
            let normalizer = build_normalizer(&options)?;
            let result = run_convert(args, &cli.cache_dir, &normalizer, &options)?;
            print_convert(&result);
            Ok(0)
        }
        Command::Check(args) => {
            let normalizer = build_normalizer(&options)?;
            let result = run_check(args, &normalizer, &options)?;
            print_check(&result);
            Ok(if result.is_clean() { 0 } else { 1 })
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    let mut config = LogConfig::default()
        .with_level_filter(level_filter)
        .with_format(format)
        .with_ansi(with_ansi)
        .with_timestamps(cli.log_file.is_some())
        .with_log_file(cli.log_file.clone());
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    config
}
