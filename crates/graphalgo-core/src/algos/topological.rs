use std::collections::VecDeque;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId};

/// Topological order by repeatedly removing vertices with no incoming edges.
///
/// Vertices that start with in-degree 0 are taken in ascending order, then
/// in the order their last incoming edge is removed. Any edge of an
/// undirected graph counts as a two-vertex cycle.
#[tracing::instrument(skip(graph), fields(num_vertices = graph.num_vertices()))]
pub fn topological_sort<G: Graph + ?Sized>(graph: &G) -> Result<Vec<VertexId>> {
    let num_vertices = graph.num_vertices();

    let mut remaining = (0..num_vertices)
        .map(|v| graph.get_in_degree(v))
        .collect::<Result<Vec<_>>>()?;

    let mut ready: VecDeque<VertexId> = remaining
        .iter()
        .enumerate()
        .filter(|&(_, &degree)| degree == 0)
        .map(|(v, _)| v)
        .collect();

    let mut sorted = Vec::with_capacity(num_vertices);
    while let Some(current) = ready.pop_front() {
        sorted.push(current);

        for neighbour in graph.get_adjacent_vertices(current)? {
            remaining[neighbour] -= 1;
            if remaining[neighbour] == 0 {
                ready.push_back(neighbour);
            }
        }
    }

    if sorted.len() != num_vertices {
        tracing::debug!(sorted = sorted.len(), total = num_vertices, "cycle_detected");
        return Err(GraphError::CycleDetected {
            sorted: sorted.len(),
            total: num_vertices,
        });
    }

    Ok(sorted)
}
