use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::GraphError;

/// Vertex identifier, a contiguous index in `0..num_vertices`
pub type VertexId = usize;

/// Edge weight; every stored edge has weight >= 1
pub type Weight = u64;

/// A single directed edge `from -> to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(from: VertexId, to: VertexId, weight: Weight) -> Self {
        Edge { from, to, weight }
    }

    pub fn unweighted(from: VertexId, to: VertexId) -> Self {
        Edge::new(from, to, 1)
    }
}

impl std::str::FromStr for Edge {
    type Err = GraphError;

    /// Parse `U:V` or `U:V:W`
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        let vertex = |part: &str| {
            part.parse::<VertexId>()
                .map_err(|_| GraphError::invalid_value("edge", s))
        };
        let weight = |part: &str| {
            part.parse::<Weight>()
                .map_err(|_| GraphError::invalid_value("edge", s))
        };

        match parts.as_slice() {
            &[from, to] => Ok(Edge::unweighted(vertex(from)?, vertex(to)?)),
            &[from, to, w] => Ok(Edge::new(vertex(from)?, vertex(to)?, weight(w)?)),
            _ => bail_invalid!("edge", format!("{} (expected: U:V or U:V:W)", s)),
        }
    }
}

/// Storage layout of a graph, chosen once at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    /// Weighted adjacency matrix
    #[default]
    Matrix,
    /// Unweighted adjacency sets
    Set,
}

impl std::str::FromStr for Representation {
    type Err = GraphError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "matrix" => Ok(Representation::Matrix),
            "set" => Ok(Representation::Set),
            other => bail_invalid!("representation", format!("{} (expected: matrix, set)", other)),
        }
    }
}

impl std::fmt::Display for Representation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Representation::Matrix => write!(f, "matrix"),
            Representation::Set => write!(f, "set"),
        }
    }
}
