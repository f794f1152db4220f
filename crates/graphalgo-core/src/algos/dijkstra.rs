use crate::algos::relax::{expand, CumulativeDistance, DistanceTable};
use crate::algos::types::PathResult;
use crate::error::Result;
use crate::graph::{Graph, VertexId};
use crate::trace_time;

/// Distance table of all shortest paths from `source`
pub fn build_distance_table<G: Graph + ?Sized>(
    graph: &G,
    source: VertexId,
) -> Result<DistanceTable> {
    Ok(expand(graph, source, &CumulativeDistance)?.table)
}

/// Minimum-weight path from `source` to `destination`
#[tracing::instrument(skip(graph), fields(num_vertices = graph.num_vertices()))]
pub fn shortest_path<G: Graph + ?Sized>(
    graph: &G,
    source: VertexId,
    destination: VertexId,
) -> Result<PathResult> {
    let start = std::time::Instant::now();
    graph.check_vertex(destination)?;

    let table = build_distance_table(graph, source)?;
    let result = PathResult::from_table(&table, destination);

    trace_time!(start, "shortest_path", found = result.found);
    Ok(result)
}
