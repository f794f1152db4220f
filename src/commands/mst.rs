//! `prim` and `kruskal` commands

use graphalgo_core::algos::{
    minimum_spanning_tree_kruskal_with, minimum_spanning_tree_prim, KruskalOptions, MstResult,
};
use graphalgo_core::error::Result;
use graphalgo_core::format::OutputFormat;
use graphalgo_core::graph::{Graph, VertexId};

use super::dispatch::CommandContext;
use super::print_json;

pub fn execute_prim(ctx: &CommandContext, graph: &dyn Graph, source: VertexId) -> Result<()> {
    let result = minimum_spanning_tree_prim(graph, source)?;
    output(ctx, &result)
}

pub fn execute_kruskal(ctx: &CommandContext, graph: &dyn Graph, opts: &KruskalOptions) -> Result<()> {
    let result = minimum_spanning_tree_kruskal_with(graph, opts)?;
    output(ctx, &result)
}

fn output(ctx: &CommandContext, result: &MstResult) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "connected": result.connected,
                "total_weight": result.total_weight()?,
                "edges": result.edges,
            });
            print_json(&value)
        }
        OutputFormat::Human => {
            print!("{}", render_human(result, ctx.cli.quiet)?);
            Ok(())
        }
    }
}

/// A disconnected graph has no spanning tree; the partial forest is not shown
fn render_human(result: &MstResult, quiet: bool) -> Result<String> {
    if !result.connected {
        return Ok("Minimum Spanning Tree not found\n".to_string());
    }

    let mut out = String::new();
    for edge in &result.edges {
        out.push_str(&format!("{} -- {} ({})\n", edge.from, edge.to, edge.weight));
    }
    if !quiet {
        out.push_str(&format!("Total weight: {}\n", result.total_weight()?));
    }
    Ok(out)
}
