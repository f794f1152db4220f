//! CLI commands for graphalgo

pub mod dispatch;
pub mod mst;
pub mod order;
pub mod path;
pub mod show;

use graphalgo_core::error::Result;
use graphalgo_core::graph::VertexId;
use serde::Serialize;

/// Print any serializable result as pretty JSON on stdout
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// `0 -> 1 -> 2`
pub(crate) fn join_vertices(vertices: &[VertexId], separator: &str) -> String {
    vertices
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}
