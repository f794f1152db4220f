//! Command trait and context for dispatching commands

use std::time::Instant;

use graphalgo_core::bail_usage;
use graphalgo_core::config::EngineConfig;
use graphalgo_core::error::Result;
use graphalgo_core::format::OutputFormat;
use graphalgo_core::graph::{build_graph, Graph};

use crate::cli::Cli;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a EngineConfig,
    pub format: OutputFormat,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a EngineConfig, format: OutputFormat, start: Instant) -> Self {
        Self {
            cli,
            config,
            format,
            start,
        }
    }

    /// Flag value if given, otherwise the configured default
    pub fn directed(&self) -> bool {
        let args = &self.cli.graph;
        if args.directed {
            true
        } else if args.undirected {
            false
        } else {
            self.config.graph.directed
        }
    }

    /// Build the graph described by the global graph flags
    pub fn build_graph(&self) -> Result<Box<dyn Graph>> {
        let args = &self.cli.graph;
        let Some(num_vertices) = args.vertices else {
            bail_usage!("--vertices is required for this command");
        };
        let representation = args.repr.unwrap_or(self.config.graph.representation);

        build_graph(representation, num_vertices, self.directed(), &args.edges)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        if ctx.cli.quiet {
            return Ok(());
        }
        println!("graphalgo {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest paths, spanning trees, traversals and topological sort.");
        println!();
        println!("Run `graphalgo --help` for usage information.");
        Ok(())
    }
}
