//! `medstudy`: terminal medical study companion.

use std::io::{self, IsTerminal};

use anyhow::Context;
use clap::Parser;
use tracing::debug;

mod cli;
mod commands;
mod config;
mod interactive;
mod logging;

use crate::cli::{Cli, Command, LogFormatArg};
use crate::config::AppConfig;
use crate::logging::{LogConfig, LogFormat, init_logging};

fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig::from_verbosity(cli.verbose)
        .with_format(match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        })
        .with_ansi(io::stderr().is_terminal())
        .with_target(cli.verbose > 1)
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&log_config_from_cli(&cli)).context("failed to initialise logging")?;

    let config = AppConfig::resolve(cli.content.clone(), cli.today)?;
    debug!(?config, "configuration resolved");
    let services = config.services().context("failed to load study content")?;

    let command = cli.command.unwrap_or(Command::Dashboard);
    commands::dispatch(&services, command, io::stdin().lock(), io::stdout().lock())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
