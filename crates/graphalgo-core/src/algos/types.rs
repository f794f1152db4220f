use serde::Serialize;

use crate::algos::relax::DistanceTable;
use crate::error::{GraphError, Result};
use crate::graph::{VertexId, Weight};

/// Outcome of a single-source, single-destination path query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    pub source: VertexId,
    pub destination: VertexId,
    pub found: bool,
    /// Vertices from source to destination; empty when not found
    pub path: Vec<VertexId>,
    /// Total weight (hop count for the unweighted search)
    pub distance: Option<Weight>,
}

impl PathResult {
    /// Reconstruct the path to `destination` from a finished table
    pub fn from_table(table: &DistanceTable, destination: VertexId) -> Self {
        let source = table.source();
        match table.path_to(destination) {
            Some(path) => PathResult {
                source,
                destination,
                found: true,
                path,
                distance: table.distance(destination),
            },
            None => PathResult {
                source,
                destination,
                found: false,
                path: Vec::new(),
                distance: None,
            },
        }
    }

    /// Number of edges on the path
    pub fn path_length(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Convert an unreachable destination into `GraphError::NoPath`
    pub fn into_path(self) -> Result<Vec<VertexId>> {
        if self.found {
            Ok(self.path)
        } else {
            Err(GraphError::NoPath {
                from: self.source,
                to: self.destination,
            })
        }
    }
}

/// Spanning tree edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MstEdge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: Weight,
}

impl MstEdge {
    /// Endpoints with the lower vertex first
    pub fn canonical(&self) -> (VertexId, VertexId) {
        if self.from <= self.to {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        }
    }
}

/// Minimum spanning tree, or the partial forest of a disconnected graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MstResult {
    /// True when the edges span every vertex
    pub connected: bool,
    /// Edges in the order they were accepted
    pub edges: Vec<MstEdge>,
}

impl MstResult {
    /// Sum of the accepted edge weights; fails when it does not fit in `Weight`
    pub fn total_weight(&self) -> Result<Weight> {
        self.edges.iter().try_fold(0 as Weight, |total, edge| {
            total
                .checked_add(edge.weight)
                .ok_or_else(|| GraphError::weight_overflow("spanning tree weight"))
        })
    }

    /// Undirected edge set, sorted, for comparing trees built differently
    pub fn canonical_edges(&self) -> Vec<(VertexId, VertexId)> {
        let mut edges: Vec<_> = self.edges.iter().map(MstEdge::canonical).collect();
        edges.sort_unstable();
        edges
    }
}
