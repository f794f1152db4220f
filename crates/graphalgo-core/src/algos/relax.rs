//! Priority-ordered relaxation shared by Dijkstra and Prim
//!
//! Both algorithms grow a frontier from a source vertex, always expanding
//! the cheapest queued vertex and lowering the recorded cost of its
//! neighbours. They differ only in how a neighbour's candidate cost is
//! computed, which is captured by `RelaxationRule`.

use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId, Weight};
use crate::queue::IndexedPriorityQueue;

/// How the cost of reaching a neighbour through `u` is computed
pub trait RelaxationRule {
    fn candidate(&self, current: Weight, edge_weight: Weight) -> Result<Weight>;
}

/// Dijkstra: total path weight from the source
#[derive(Debug, Clone, Copy, Default)]
pub struct CumulativeDistance;

impl RelaxationRule for CumulativeDistance {
    fn candidate(&self, current: Weight, edge_weight: Weight) -> Result<Weight> {
        current
            .checked_add(edge_weight)
            .ok_or_else(|| GraphError::weight_overflow("path distance"))
    }
}

/// Prim: weight of the single connecting edge
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeCost;

impl RelaxationRule for EdgeCost {
    fn candidate(&self, _current: Weight, edge_weight: Weight) -> Result<Weight> {
        Ok(edge_weight)
    }
}

/// Best known `(distance, predecessor)` for one vertex
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TableEntry {
    pub distance: Option<Weight>,
    pub predecessor: Option<VertexId>,
}

/// Per-vertex distance and predecessor, indexed by vertex ID.
///
/// An entry with no distance has not been reached. The source records
/// itself as its own predecessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceTable {
    source: VertexId,
    entries: Vec<TableEntry>,
}

impl DistanceTable {
    pub fn new(num_vertices: usize, source: VertexId) -> Self {
        let mut entries = vec![TableEntry::default(); num_vertices];
        entries[source] = TableEntry {
            distance: Some(0),
            predecessor: Some(source),
        };
        Self { source, entries }
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, v: VertexId) -> TableEntry {
        self.entries[v]
    }

    pub fn distance(&self, v: VertexId) -> Option<Weight> {
        self.entries[v].distance
    }

    pub fn predecessor(&self, v: VertexId) -> Option<VertexId> {
        self.entries[v].predecessor
    }

    pub fn update(&mut self, v: VertexId, distance: Weight, predecessor: VertexId) {
        self.entries[v] = TableEntry {
            distance: Some(distance),
            predecessor: Some(predecessor),
        };
    }

    /// Walk predecessors from `destination` back to the source.
    ///
    /// Returns `None` when the chain breaks before reaching the source.
    pub fn path_to(&self, destination: VertexId) -> Option<Vec<VertexId>> {
        let mut path = vec![destination];
        let mut current = destination;

        while current != self.source {
            let previous = self.entries[current].predecessor?;
            path.push(previous);
            current = previous;
        }

        path.reverse();
        Some(path)
    }
}

/// Counters for one expansion, reported at debug level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpansionStats {
    pub pops: usize,
    pub stale_pops: usize,
    pub relaxations: usize,
}

/// Outcome of a full expansion from one source
#[derive(Debug, Clone)]
pub struct Expansion {
    pub table: DistanceTable,
    /// Vertices in the order they were finalised
    pub visit_order: Vec<VertexId>,
    pub stats: ExpansionStats,
}

impl Expansion {
    pub fn visited_count(&self) -> usize {
        self.visit_order.len()
    }
}

/// Run the greedy expansion from `source` until the frontier is empty.
///
/// A vertex's entry is final once it is popped; later candidates for it
/// are never considered. This holds because every stored weight is >= 1.
pub fn expand<G, R>(graph: &G, source: VertexId, rule: &R) -> Result<Expansion>
where
    G: Graph + ?Sized,
    R: RelaxationRule,
{
    graph.check_vertex(source)?;

    let num_vertices = graph.num_vertices();
    let mut table = DistanceTable::new(num_vertices, source);
    let mut visited = vec![false; num_vertices];
    let mut visit_order = Vec::with_capacity(num_vertices);
    let mut stats = ExpansionStats::default();

    let mut frontier = IndexedPriorityQueue::with_capacity(num_vertices);
    frontier.set_priority(source, 0);

    while !frontier.is_empty() {
        let (current, _) = frontier.pop_minimum()?;
        stats.pops += 1;

        if visited[current] {
            stats.stale_pops += 1;
            continue;
        }
        visited[current] = true;
        visit_order.push(current);

        let Some(current_cost) = table.distance(current) else {
            continue;
        };

        for neighbour in graph.get_adjacent_vertices(current)? {
            if visited[neighbour] {
                continue;
            }
            let Some(edge_weight) = graph.get_edge_weight(current, neighbour)? else {
                continue;
            };

            let candidate = rule.candidate(current_cost, edge_weight)?;

            if table.distance(neighbour).is_none_or(|known| known > candidate) {
                table.update(neighbour, candidate, current);
                frontier.set_priority(neighbour, candidate);
                stats.relaxations += 1;
            }
        }
    }

    tracing::debug!(
        source,
        visited = visit_order.len(),
        pops = stats.pops,
        stale_pops = stats.stale_pops,
        relaxations = stats.relaxations,
        "expansion_finished"
    );

    Ok(Expansion {
        table,
        visit_order,
        stats,
    })
}
