//! Graph algorithms
//!
//! - Dijkstra and Prim share the priority-driven relaxation engine in `relax`
//! - Kruskal grows a forest from edges in weight order
//! - BFS/DFS traversals, hop-count paths and topological sort need no weights

pub mod dijkstra;
pub mod kruskal;
pub mod prim;
pub mod relax;
pub mod topological;
pub mod traversal;
pub mod types;
pub mod union_find;
pub mod unweighted;

pub use dijkstra::{build_distance_table, shortest_path};
pub use kruskal::{
    minimum_spanning_tree_kruskal, minimum_spanning_tree_kruskal_with, CycleCheck, KruskalOptions,
};
pub use prim::minimum_spanning_tree_prim;
pub use relax::{DistanceTable, TableEntry};
pub use topological::topological_sort;
pub use traversal::{breadth_first_traversal, depth_first_traversal};
pub use types::{MstEdge, MstResult, PathResult};
pub use unweighted::unweighted_shortest_path;
