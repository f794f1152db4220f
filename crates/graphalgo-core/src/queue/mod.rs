//! Priority queues used by the greedy algorithms
//!
//! - `indexed`: binary heap with a key -> slot index, supporting decrease-key

pub mod indexed;

pub use indexed::IndexedPriorityQueue;
