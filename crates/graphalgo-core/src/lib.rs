//! Graphalgo Core Library
//!
//! Graph representations (adjacency matrix and adjacency sets), an indexed
//! priority queue with decrease-key, and the classic algorithms built on
//! them: Dijkstra, Prim, Kruskal, BFS, DFS and topological sort.

pub mod algos;
pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod queue;
