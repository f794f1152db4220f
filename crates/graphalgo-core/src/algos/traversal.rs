use std::collections::VecDeque;

use crate::error::Result;
use crate::graph::{Graph, VertexId};

/// Vertices reachable from `start`, in breadth-first order.
///
/// A vertex may be queued more than once before it is first dequeued;
/// only the first dequeue counts.
#[tracing::instrument(skip(graph), fields(num_vertices = graph.num_vertices()))]
pub fn breadth_first_traversal<G: Graph + ?Sized>(
    graph: &G,
    start: VertexId,
) -> Result<Vec<VertexId>> {
    graph.check_vertex(start)?;

    let mut visited = vec![false; graph.num_vertices()];
    let mut order = Vec::new();
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        if visited[current] {
            continue;
        }
        visited[current] = true;
        order.push(current);

        for neighbour in graph.get_adjacent_vertices(current)? {
            if !visited[neighbour] {
                queue.push_back(neighbour);
            }
        }
    }

    tracing::debug!(visited = order.len(), "bfs_finished");
    Ok(order)
}

/// Vertices reachable from `start`, in depth-first pre-order.
///
/// Neighbours are pushed in reverse so the lowest-numbered one is explored
/// first, giving the same order as the recursive formulation.
#[tracing::instrument(skip(graph), fields(num_vertices = graph.num_vertices()))]
pub fn depth_first_traversal<G: Graph + ?Sized>(
    graph: &G,
    start: VertexId,
) -> Result<Vec<VertexId>> {
    graph.check_vertex(start)?;

    let mut visited = vec![false; graph.num_vertices()];
    let mut order = Vec::new();
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        if visited[current] {
            continue;
        }
        visited[current] = true;
        order.push(current);

        let neighbours = graph.get_adjacent_vertices(current)?;
        stack.extend(neighbours.into_iter().rev().filter(|&n| !visited[n]));
    }

    tracing::debug!(visited = order.len(), "dfs_finished");
    Ok(order)
}
