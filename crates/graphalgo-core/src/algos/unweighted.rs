use std::collections::VecDeque;

use crate::algos::relax::DistanceTable;
use crate::algos::types::PathResult;
use crate::error::Result;
use crate::graph::{Graph, VertexId};
use crate::trace_time;

/// Hop-count table from `source`: each vertex records the neighbour that
/// first discovered it
pub fn build_hop_table<G: Graph + ?Sized>(graph: &G, source: VertexId) -> Result<DistanceTable> {
    graph.check_vertex(source)?;

    let mut table = DistanceTable::new(graph.num_vertices(), source);
    let mut queue = VecDeque::from([source]);

    while let Some(current) = queue.pop_front() {
        let Some(hops) = table.distance(current) else {
            continue;
        };

        for neighbour in graph.get_adjacent_vertices(current)? {
            if table.distance(neighbour).is_none() {
                table.update(neighbour, hops + 1, current);
                queue.push_back(neighbour);
            }
        }
    }

    Ok(table)
}

/// Fewest-edges path from `source` to `destination`, ignoring weights
#[tracing::instrument(skip(graph), fields(num_vertices = graph.num_vertices()))]
pub fn unweighted_shortest_path<G: Graph + ?Sized>(
    graph: &G,
    source: VertexId,
    destination: VertexId,
) -> Result<PathResult> {
    let start = std::time::Instant::now();
    graph.check_vertex(destination)?;

    let table = build_hop_table(graph, source)?;
    let result = PathResult::from_table(&table, destination);

    trace_time!(start, "unweighted_shortest_path", found = result.found);
    Ok(result)
}
