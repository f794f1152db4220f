//! `path` and `hops` commands

use graphalgo_core::algos::{shortest_path, unweighted_shortest_path, PathResult};
use graphalgo_core::error::Result;
use graphalgo_core::format::OutputFormat;
use graphalgo_core::graph::{Graph, VertexId};

use super::dispatch::CommandContext;
use super::{join_vertices, print_json};

/// Dijkstra shortest path by total weight
pub fn execute_weighted(
    ctx: &CommandContext,
    graph: &dyn Graph,
    source: VertexId,
    destination: VertexId,
) -> Result<()> {
    let result = shortest_path(graph, source, destination)?;
    output(ctx, &result, "Total weight")
}

/// BFS shortest path by edge count
pub fn execute_unweighted(
    ctx: &CommandContext,
    graph: &dyn Graph,
    source: VertexId,
    destination: VertexId,
) -> Result<()> {
    let result = unweighted_shortest_path(graph, source, destination)?;
    output(ctx, &result, "Hops")
}

fn output(
    ctx: &CommandContext,
    result: &PathResult,
    distance_label: &str,
) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => print_json(result),
        OutputFormat::Human => {
            print!("{}", render_human(result, distance_label, ctx.cli.quiet));
            Ok(())
        }
    }
}

fn render_human(result: &PathResult, distance_label: &str, quiet: bool) -> String {
    if !result.found {
        return format!(
            "There is no path from {} to {}\n",
            result.source, result.destination
        );
    }

    let mut out = format!("Shortest Path is: {}\n", join_vertices(&result.path, " -> "));
    if let (false, Some(distance)) = (quiet, result.distance) {
        out.push_str(&format!("{}: {}\n", distance_label, distance));
    }
    out
}
