//! Adjacency-set graph representation

use std::collections::BTreeSet;

use super::{Graph, VertexId, Weight};
use crate::error::{GraphError, Result};
use crate::ensure_vertex;

/// A vertex and the ordered set of vertices it points to
#[derive(Debug, Clone, Default)]
struct Node {
    adjacency_set: BTreeSet<VertexId>,
}

/// Unweighted graph stored as one neighbour set per vertex.
///
/// Every edge has weight 1; inserting any other weight fails with
/// `InvalidEdge`. Self-loops are rejected.
#[derive(Debug, Clone)]
pub struct AdjacencySetGraph {
    directed: bool,
    vertices: Vec<Node>,
    in_degree: Vec<usize>,
}

impl AdjacencySetGraph {
    pub fn new(num_vertices: usize, directed: bool) -> Self {
        Self {
            directed,
            vertices: vec![Node::default(); num_vertices],
            in_degree: vec![0; num_vertices],
        }
    }

    fn link(&mut self, from: VertexId, to: VertexId) {
        if self.vertices[from].adjacency_set.insert(to) {
            self.in_degree[to] += 1;
        }
    }
}

impl Graph for AdjacencySetGraph {
    fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn add_edge(&mut self, v1: VertexId, v2: VertexId, weight: Weight) -> Result<()> {
        ensure_vertex!(v1, self.num_vertices());
        ensure_vertex!(v2, self.num_vertices());

        if weight < 1 {
            return Err(GraphError::InvalidWeight { weight });
        }
        if weight != 1 {
            return Err(GraphError::InvalidEdge { weight });
        }
        if v1 == v2 {
            return Err(GraphError::SelfLoop { vertex: v1 });
        }

        self.link(v1, v2);

        if !self.directed {
            self.link(v2, v1);
        }

        Ok(())
    }

    fn get_adjacent_vertices(&self, v: VertexId) -> Result<Vec<VertexId>> {
        ensure_vertex!(v, self.num_vertices());
        Ok(self.vertices[v].adjacency_set.iter().copied().collect())
    }

    fn get_in_degree(&self, v: VertexId) -> Result<usize> {
        ensure_vertex!(v, self.num_vertices());
        Ok(self.in_degree[v])
    }

    fn get_edge_weight(&self, v1: VertexId, v2: VertexId) -> Result<Option<Weight>> {
        ensure_vertex!(v1, self.num_vertices());
        ensure_vertex!(v2, self.num_vertices());

        Ok(self.vertices[v1]
            .adjacency_set
            .contains(&v2)
            .then_some(1))
    }
}
