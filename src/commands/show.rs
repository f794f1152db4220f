//! `show` command: edge list and in-degrees

use std::io::Write;

use graphalgo_core::error::Result;
use graphalgo_core::format::OutputFormat;
use graphalgo_core::graph::Graph;

use super::dispatch::CommandContext;
use super::print_json;

pub fn execute(ctx: &CommandContext, graph: &dyn Graph) -> Result<()> {
    let in_degree = (0..graph.num_vertices())
        .map(|v| graph.get_in_degree(v))
        .collect::<Result<Vec<_>>>()?;

    match ctx.format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "num_vertices": graph.num_vertices(),
                "directed": graph.is_directed(),
                "edges": graph.edges()?,
                "in_degree": in_degree,
            });
            print_json(&value)
        }
        OutputFormat::Human => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            graph.display(&mut out)?;
            if !ctx.cli.quiet {
                for (vertex, degree) in in_degree.iter().enumerate() {
                    writeln!(out, "in-degree {}: {}", vertex, degree)?;
                }
            }
            Ok(())
        }
    }
}
