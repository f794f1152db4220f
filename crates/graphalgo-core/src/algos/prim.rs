use crate::algos::relax::{expand, EdgeCost};
use crate::algos::types::{MstEdge, MstResult};
use crate::error::Result;
use crate::graph::{Graph, VertexId};

/// Prim's minimum spanning tree grown from `source`.
///
/// Each vertex after the source contributes the edge from its predecessor,
/// in the order vertices are finalised. When some vertex is unreachable the
/// result is marked disconnected and holds the tree of the source's
/// component only.
#[tracing::instrument(skip(graph), fields(num_vertices = graph.num_vertices()))]
pub fn minimum_spanning_tree_prim<G: Graph + ?Sized>(
    graph: &G,
    source: VertexId,
) -> Result<MstResult> {
    let expansion = expand(graph, source, &EdgeCost)?;
    let table = &expansion.table;

    let mut edges = Vec::with_capacity(expansion.visited_count().saturating_sub(1));
    for &vertex in expansion.visit_order.iter().skip(1) {
        let entry = table.entry(vertex);
        if let (Some(from), Some(weight)) = (entry.predecessor, entry.distance) {
            edges.push(MstEdge {
                from,
                to: vertex,
                weight,
            });
        }
    }

    let connected = expansion.visited_count() == graph.num_vertices();
    if !connected {
        tracing::debug!(
            visited = expansion.visited_count(),
            "minimum spanning tree not found"
        );
    }

    Ok(MstResult { connected, edges })
}
