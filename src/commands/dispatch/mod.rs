//! Command dispatch logic for graphalgo

use std::time::Instant;

use graphalgo_core::config::EngineConfig;
use graphalgo_core::error::Result;
use graphalgo_core::format::OutputFormat;

use crate::cli::Cli;

mod command;
mod commands;
pub(crate) mod macros;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, config: &EngineConfig, format: OutputFormat, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, config, format, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
