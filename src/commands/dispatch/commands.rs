//! Command implementations for all graphalgo commands

use graphalgo_core::algos::KruskalOptions;
use graphalgo_core::error::Result;

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::dispatch::macros::trace_command;
use crate::commands::{mst, order, path, show};

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let graph = ctx.build_graph()?;
        trace_command!(ctx.cli, ctx.start, "build_graph");

        let result = match self {
            Commands::Path {
                source,
                destination,
            } => path::execute_weighted(ctx, graph.as_ref(), *source, *destination),
            Commands::Hops {
                source,
                destination,
            } => path::execute_unweighted(ctx, graph.as_ref(), *source, *destination),
            Commands::Prim { source } => mst::execute_prim(ctx, graph.as_ref(), *source),
            Commands::Kruskal { cycle_check } => {
                let opts = KruskalOptions {
                    cycle_check: cycle_check.unwrap_or(ctx.config.mst.cycle_check),
                };
                mst::execute_kruskal(ctx, graph.as_ref(), &opts)
            }
            Commands::Topo => order::execute_topological(ctx, graph.as_ref()),
            Commands::Bfs { start } => order::execute_bfs(ctx, graph.as_ref(), *start),
            Commands::Dfs { start } => order::execute_dfs(ctx, graph.as_ref(), *start),
            Commands::Show => show::execute(ctx, graph.as_ref()),
        };

        trace_command!(ctx.cli, ctx.start, "execute_command");
        result
    }
}
