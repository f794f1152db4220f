//! Graph representations
//!
//! Provides the `Graph` trait and its two concrete representations:
//! - `AdjacencyMatrixGraph`: weighted, `V x V` weight grid
//! - `AdjacencySetGraph`: unweighted, ordered neighbour set per vertex

pub mod matrix;
pub mod set;
pub mod types;

use std::io::Write;

use crate::error::Result;

pub use matrix::AdjacencyMatrixGraph;
pub use set::AdjacencySetGraph;
pub use types::{Edge, Representation, VertexId, Weight};

/// Read/write interface shared by every graph representation.
///
/// Vertices are the contiguous integers `0..num_vertices()`. Every operation
/// taking a vertex fails with `GraphError::OutOfRange` when it is not in
/// that range. Read operations never mutate the graph, so a built graph can
/// be shared by any number of algorithm runs.
pub trait Graph {
    fn num_vertices(&self) -> usize;

    fn is_directed(&self) -> bool;

    /// Insert the edge `v1 -> v2` (and `v2 -> v1` for undirected graphs).
    fn add_edge(&mut self, v1: VertexId, v2: VertexId, weight: Weight) -> Result<()>;

    /// Out-neighbours of `v` in ascending order.
    fn get_adjacent_vertices(&self, v: VertexId) -> Result<Vec<VertexId>>;

    /// Number of edges whose target is `v`.
    fn get_in_degree(&self, v: VertexId) -> Result<usize>;

    /// Weight of `v1 -> v2`, or `None` when there is no such edge.
    fn get_edge_weight(&self, v1: VertexId, v2: VertexId) -> Result<Option<Weight>>;

    fn add_unweighted_edge(&mut self, v1: VertexId, v2: VertexId) -> Result<()> {
        self.add_edge(v1, v2, 1)
    }

    fn check_vertex(&self, v: VertexId) -> Result<()> {
        crate::ensure_vertex!(v, self.num_vertices());
        Ok(())
    }

    /// All stored directed edges ordered by `(from, to)`.
    ///
    /// Undirected graphs report both mirrored copies of every edge.
    fn edges(&self) -> Result<Vec<Edge>> {
        let mut edges = Vec::new();
        for from in 0..self.num_vertices() {
            for to in self.get_adjacent_vertices(from)? {
                if let Some(weight) = self.get_edge_weight(from, to)? {
                    edges.push(Edge::new(from, to, weight));
                }
            }
        }
        Ok(edges)
    }

    /// Write one `from --> to` line per stored edge.
    fn display(&self, out: &mut dyn Write) -> Result<()> {
        for edge in self.edges()? {
            writeln!(out, "{} --> {}", edge.from, edge.to)?;
        }
        Ok(())
    }
}

/// Build a graph of the requested representation from a literal edge list.
///
/// The first failing insertion is returned as-is.
pub fn build_graph(
    representation: Representation,
    num_vertices: usize,
    directed: bool,
    edges: &[Edge],
) -> Result<Box<dyn Graph>> {
    let mut graph: Box<dyn Graph> = match representation {
        Representation::Matrix => Box::new(AdjacencyMatrixGraph::new(num_vertices, directed)?),
        Representation::Set => Box::new(AdjacencySetGraph::new(num_vertices, directed)),
    };

    for edge in edges {
        graph.add_edge(edge.from, edge.to, edge.weight)?;
    }

    tracing::debug!(
        representation = %representation,
        num_vertices,
        directed,
        edges = edges.len(),
        "graph_built"
    );

    Ok(graph)
}
