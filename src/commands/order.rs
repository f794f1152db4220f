//! `topo`, `bfs` and `dfs` commands: each prints a vertex order

use graphalgo_core::algos::{breadth_first_traversal, depth_first_traversal, topological_sort};
use graphalgo_core::error::Result;
use graphalgo_core::format::OutputFormat;
use graphalgo_core::graph::{Graph, VertexId};

use super::dispatch::CommandContext;
use super::{join_vertices, print_json};

pub fn execute_topological(ctx: &CommandContext, graph: &dyn Graph) -> Result<()> {
    let order = topological_sort(graph)?;
    output(ctx, "topological", None, &order)
}

pub fn execute_bfs(ctx: &CommandContext, graph: &dyn Graph, start: VertexId) -> Result<()> {
    let order = breadth_first_traversal(graph, start)?;
    output(ctx, "bfs", Some(start), &order)
}

pub fn execute_dfs(ctx: &CommandContext, graph: &dyn Graph, start: VertexId) -> Result<()> {
    let order = depth_first_traversal(graph, start)?;
    output(ctx, "dfs", Some(start), &order)
}

fn output(
    ctx: &CommandContext,
    kind: &str,
    start: Option<VertexId>,
    order: &[VertexId],
) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => {
            let mut value = serde_json::json!({
                "kind": kind,
                "order": order,
            });
            if let Some(start) = start {
                value["start"] = serde_json::json!(start);
            }
            print_json(&value)
        }
        OutputFormat::Human => {
            println!("{}", join_vertices(order, " "));
            Ok(())
        }
    }
}
