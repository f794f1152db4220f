//! Adjacency-matrix graph representation

use super::{Graph, VertexId, Weight};
use crate::error::{GraphError, Result};
use crate::ensure_vertex;

/// Weighted graph stored as a `V x V` grid.
///
/// A cell holding `0` means "no edge"; any other value is the weight of the
/// edge from the row vertex to the column vertex. Self-loops are allowed.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrixGraph {
    num_vertices: usize,
    directed: bool,
    matrix: Vec<Weight>,
    in_degree: Vec<usize>,
}

impl AdjacencyMatrixGraph {
    /// Empty graph on `num_vertices` vertices.
    ///
    /// Fails with `InvalidValue` when the `V x V` grid cannot be allocated.
    pub fn new(num_vertices: usize, directed: bool) -> Result<Self> {
        let too_large = || {
            GraphError::invalid_value(
                "vertices",
                format!("{} (too many for an adjacency matrix)", num_vertices),
            )
        };

        let cells = num_vertices.checked_mul(num_vertices).ok_or_else(too_large)?;
        let mut matrix = Vec::new();
        matrix.try_reserve_exact(cells).map_err(|_| too_large())?;
        matrix.resize(cells, 0);

        Ok(Self {
            num_vertices,
            directed,
            matrix,
            in_degree: vec![0; num_vertices],
        })
    }

    fn cell(&self, from: VertexId, to: VertexId) -> Weight {
        self.matrix[from * self.num_vertices + to]
    }

    /// Store `weight` in the cell, counting the in-degree only for new edges
    fn set_cell(&mut self, from: VertexId, to: VertexId, weight: Weight) {
        let index = from * self.num_vertices + to;
        if self.matrix[index] == 0 {
            self.in_degree[to] += 1;
        }
        self.matrix[index] = weight;
    }
}

impl Graph for AdjacencyMatrixGraph {
    fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn add_edge(&mut self, v1: VertexId, v2: VertexId, weight: Weight) -> Result<()> {
        ensure_vertex!(v1, self.num_vertices);
        ensure_vertex!(v2, self.num_vertices);

        if weight < 1 {
            return Err(GraphError::InvalidWeight { weight });
        }

        self.set_cell(v1, v2, weight);

        if !self.directed {
            self.set_cell(v2, v1, weight);
        }

        Ok(())
    }

    fn get_adjacent_vertices(&self, v: VertexId) -> Result<Vec<VertexId>> {
        ensure_vertex!(v, self.num_vertices);

        Ok((0..self.num_vertices)
            .filter(|&to| self.cell(v, to) > 0)
            .collect())
    }

    fn get_in_degree(&self, v: VertexId) -> Result<usize> {
        ensure_vertex!(v, self.num_vertices);
        Ok(self.in_degree[v])
    }

    fn get_edge_weight(&self, v1: VertexId, v2: VertexId) -> Result<Option<Weight>> {
        ensure_vertex!(v1, self.num_vertices);
        ensure_vertex!(v2, self.num_vertices);

        Ok(match self.cell(v1, v2) {
            0 => None,
            weight => Some(weight),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AdjacencyMatrixGraph {
        let mut g = AdjacencyMatrixGraph::new(4, false).unwrap();
        g.add_unweighted_edge(0, 1).unwrap();
        g.add_unweighted_edge(0, 2).unwrap();
        g.add_unweighted_edge(2, 3).unwrap();
        g
    }

    #[test]
    fn test_adjacent_vertices_undirected() {
        let g = sample();
        assert_eq!(g.get_adjacent_vertices(0).unwrap(), vec![1, 2]);
        assert_eq!(g.get_adjacent_vertices(1).unwrap(), vec![0]);
        assert_eq!(g.get_adjacent_vertices(2).unwrap(), vec![0, 3]);
        assert_eq!(g.get_adjacent_vertices(3).unwrap(), vec![2]);
    }

    #[test]
    fn test_in_degree_undirected() {
        let g = sample();
        let degrees: Vec<usize> = (0..4).map(|v| g.get_in_degree(v).unwrap()).collect();
        assert_eq!(degrees, vec![2, 1, 2, 1]);
    }

    #[test]
    fn test_in_degree_directed() {
        let mut g = AdjacencyMatrixGraph::new(3, true).unwrap();
        g.add_edge(0, 2, 4).unwrap();
        g.add_edge(1, 2, 1).unwrap();
        assert_eq!(g.get_in_degree(2).unwrap(), 2);
        assert_eq!(g.get_in_degree(0).unwrap(), 0);
    }

    #[test]
    fn test_overwrite_keeps_in_degree() {
        let mut g = AdjacencyMatrixGraph::new(2, true).unwrap();
        g.add_edge(0, 1, 3).unwrap();
        g.add_edge(0, 1, 7).unwrap();
        assert_eq!(g.get_in_degree(1).unwrap(), 1);
        assert_eq!(g.get_edge_weight(0, 1).unwrap(), Some(7));
    }

    #[test]
    fn test_undirected_self_loop_counted_once() {
        let mut g = AdjacencyMatrixGraph::new(7, false).unwrap();
        g.add_unweighted_edge(6, 6).unwrap();
        assert_eq!(g.get_in_degree(6).unwrap(), 1);
        assert_eq!(g.get_adjacent_vertices(6).unwrap(), vec![6]);
    }

    #[test]
    fn test_edge_weight() {
        let mut g = AdjacencyMatrixGraph::new(3, true).unwrap();
        g.add_edge(0, 1, 5).unwrap();
        assert_eq!(g.get_edge_weight(0, 1).unwrap(), Some(5));
        assert_eq!(g.get_edge_weight(1, 0).unwrap(), None);
        assert_eq!(g.get_edge_weight(2, 2).unwrap(), None);
    }

    #[test]
    fn test_out_of_range_vertex() {
        let mut g = AdjacencyMatrixGraph::new(9, false).unwrap();
        assert!(matches!(
            g.add_edge(9, 0, 1),
            Err(GraphError::OutOfRange {
                vertex: 9,
                num_vertices: 9
            })
        ));
        assert!(matches!(
            g.add_edge(0, 9, 1),
            Err(GraphError::OutOfRange { vertex: 9, .. })
        ));
        assert!(g.get_adjacent_vertices(12).is_err());
        assert!(g.get_in_degree(9).is_err());
        assert!(g.get_edge_weight(0, 9).is_err());
    }

    #[test]
    fn test_zero_weight_rejected() {
        let mut g = AdjacencyMatrixGraph::new(3, false).unwrap();
        assert!(matches!(
            g.add_edge(0, 1, 0),
            Err(GraphError::InvalidWeight { weight: 0 })
        ));
        assert_eq!(g.get_adjacent_vertices(0).unwrap(), Vec::<VertexId>::new());
    }

    #[test]
    fn test_empty_graph() {
        let g = AdjacencyMatrixGraph::new(0, true).unwrap();
        assert_eq!(g.num_vertices(), 0);
        assert!(g.get_adjacent_vertices(0).is_err());
    }

    #[test]
    fn test_vertex_count_overflowing_grid_rejected() {
        assert!(matches!(
            AdjacencyMatrixGraph::new(usize::MAX, false),
            Err(GraphError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_grid_too_large_to_allocate_rejected() {
        // V * V fits in usize but V * V * size_of::<Weight>() does not
        let num_vertices = 1usize << (usize::BITS / 2 - 1);
        assert!(matches!(
            AdjacencyMatrixGraph::new(num_vertices, true),
            Err(GraphError::InvalidValue { .. })
        ));
    }
}
