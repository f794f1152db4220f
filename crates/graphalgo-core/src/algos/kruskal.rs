use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::algos::types::{MstEdge, MstResult};
use crate::algos::union_find::UnionFind;
use crate::bail_invalid;
use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId, Weight};
use crate::queue::IndexedPriorityQueue;

/// How Kruskal decides whether a candidate edge closes a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CycleCheck {
    /// Disjoint-set forest, near O(1) per edge
    #[default]
    UnionFind,
    /// Tentatively add the edge and rescan the whole forest, O(V) per edge
    ForestScan,
}

impl std::str::FromStr for CycleCheck {
    type Err = GraphError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "union-find" => Ok(CycleCheck::UnionFind),
            "forest-scan" => Ok(CycleCheck::ForestScan),
            other => bail_invalid!(
                "cycle check",
                format!("{} (expected: union-find, forest-scan)", other)
            ),
        }
    }
}

impl std::fmt::Display for CycleCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CycleCheck::UnionFind => write!(f, "union-find"),
            CycleCheck::ForestScan => write!(f, "forest-scan"),
        }
    }
}

/// Options for Kruskal's algorithm
#[derive(Debug, Clone, Default)]
pub struct KruskalOptions {
    pub cycle_check: CycleCheck,
}

/// Growing forest that accepts an edge only if it keeps the forest acyclic
trait Forest {
    fn try_add(&mut self, v1: VertexId, v2: VertexId) -> bool;
}

impl Forest for UnionFind {
    fn try_add(&mut self, v1: VertexId, v2: VertexId) -> bool {
        self.union(v1, v2)
    }
}

/// Forest stored as `lower endpoint -> {higher endpoints}`
#[derive(Debug, Clone)]
struct ScannedForest {
    adjacency: Vec<BTreeSet<VertexId>>,
}

impl ScannedForest {
    fn new(num_vertices: usize) -> Self {
        Self {
            adjacency: vec![BTreeSet::new(); num_vertices],
        }
    }

    /// Search every component for a vertex reached twice.
    ///
    /// Edges are walked in both directions; following only lower -> higher
    /// misses cycles such as 0-2-1-3-0.
    fn has_cycle(&self) -> bool {
        let num_vertices = self.adjacency.len();
        let mut neighbours: Vec<Vec<VertexId>> = vec![Vec::new(); num_vertices];
        for (low, highs) in self.adjacency.iter().enumerate() {
            for &high in highs {
                neighbours[low].push(high);
                neighbours[high].push(low);
            }
        }

        let mut seen = vec![false; num_vertices];
        for root in 0..num_vertices {
            if seen[root] {
                continue;
            }
            seen[root] = true;
            let mut stack = vec![(root, root)];

            while let Some((vertex, parent)) = stack.pop() {
                for &next in &neighbours[vertex] {
                    if next == parent {
                        continue;
                    }
                    if seen[next] {
                        return true;
                    }
                    seen[next] = true;
                    stack.push((next, vertex));
                }
            }
        }

        false
    }
}

impl Forest for ScannedForest {
    fn try_add(&mut self, v1: VertexId, v2: VertexId) -> bool {
        let (low, high) = if v1 <= v2 { (v1, v2) } else { (v2, v1) };

        if low == high || !self.adjacency[low].insert(high) {
            return false;
        }

        if self.has_cycle() {
            self.adjacency[low].remove(&high);
            return false;
        }

        true
    }
}

/// Kruskal's minimum spanning tree with the default union-find cycle test
pub fn minimum_spanning_tree_kruskal<G: Graph + ?Sized>(graph: &G) -> Result<MstResult> {
    minimum_spanning_tree_kruskal_with(graph, &KruskalOptions::default())
}

/// Kruskal's minimum spanning tree.
///
/// Edges are considered by increasing weight; equal weights keep the
/// `(from, to)` enumeration order. Directed graphs are treated as
/// undirected. Returned edges list the lower vertex first.
#[tracing::instrument(
    skip(graph, opts),
    fields(num_vertices = graph.num_vertices(), cycle_check = %opts.cycle_check)
)]
pub fn minimum_spanning_tree_kruskal_with<G: Graph + ?Sized>(
    graph: &G,
    opts: &KruskalOptions,
) -> Result<MstResult> {
    let num_vertices = graph.num_vertices();
    let target = num_vertices.saturating_sub(1);

    let mut queue: IndexedPriorityQueue<(VertexId, VertexId), Weight> =
        IndexedPriorityQueue::new();
    for edge in graph.edges()? {
        if edge.from == edge.to || (!graph.is_directed() && edge.from > edge.to) {
            continue;
        }
        queue.set_priority((edge.from, edge.to), edge.weight);
    }

    let mut forest: Box<dyn Forest> = match opts.cycle_check {
        CycleCheck::UnionFind => Box::new(UnionFind::new(num_vertices)),
        CycleCheck::ForestScan => Box::new(ScannedForest::new(num_vertices)),
    };

    let mut edges = Vec::with_capacity(target);
    let mut rejected = 0usize;

    while edges.len() < target && !queue.is_empty() {
        let ((v1, v2), weight) = queue.pop_minimum()?;

        if !forest.try_add(v1, v2) {
            rejected += 1;
            continue;
        }

        edges.push(MstEdge {
            from: v1.min(v2),
            to: v1.max(v2),
            weight,
        });
    }

    let connected = edges.len() == target;
    tracing::debug!(
        accepted = edges.len(),
        rejected,
        unexamined = queue.len(),
        connected,
        "kruskal_finished"
    );

    Ok(MstResult { connected, edges })
}
