use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{GraphError, Result};

/// Heap slot: a key, its current priority and its first-insertion sequence
#[derive(Debug, Clone)]
struct HeapEntry<K, P> {
    key: K,
    priority: P,
    seq: u64,
}

impl<K, P: Ord> HeapEntry<K, P> {
    /// Min-heap order: priority first, then insertion order
    fn rank(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Min-priority queue over keys with in-place priority updates.
///
/// Backed by a binary heap plus a key -> heap slot map, so `set_priority`
/// and `pop_minimum` are both O(log n). Each key is queued at most once.
/// Equal priorities pop in the order their keys were first inserted.
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<K, P> {
    heap: Vec<HeapEntry<K, P>>,
    slots: HashMap<K, usize>,
    next_seq: u64,
}

impl<K, P> Default for IndexedPriorityQueue<K, P> {
    fn default() -> Self {
        Self {
            heap: Vec::new(),
            slots: HashMap::new(),
            next_seq: 0,
        }
    }
}

impl<K, P> IndexedPriorityQueue<K, P>
where
    K: Copy + Eq + Hash,
    P: Ord + Copy,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            slots: HashMap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.slots.contains_key(key)
    }

    pub fn priority_of(&self, key: &K) -> Option<P> {
        self.slots.get(key).map(|&slot| self.heap[slot].priority)
    }

    /// Insert `key`, or overwrite its priority if it is already queued.
    ///
    /// The latest value always wins, whether it is lower or higher than the
    /// previous one. An updated key keeps its original insertion sequence.
    pub fn set_priority(&mut self, key: K, priority: P) {
        if let Some(&slot) = self.slots.get(&key) {
            let previous = self.heap[slot].priority;
            self.heap[slot].priority = priority;
            match priority.cmp(&previous) {
                Ordering::Less => self.sift_up(slot),
                Ordering::Greater => self.sift_down(slot),
                Ordering::Equal => {}
            }
            return;
        }

        let slot = self.heap.len();
        self.heap.push(HeapEntry {
            key,
            priority,
            seq: self.next_seq,
        });
        self.next_seq += 1;
        self.slots.insert(key, slot);
        self.sift_up(slot);
    }

    /// Smallest entry without removing it
    pub fn peek_minimum(&self) -> Option<(K, P)> {
        self.heap.first().map(|entry| (entry.key, entry.priority))
    }

    /// Remove and return the key with the smallest priority
    pub fn pop_minimum(&mut self) -> Result<(K, P)> {
        if self.heap.is_empty() {
            return Err(GraphError::EmptyQueue);
        }

        let last = self.heap.len() - 1;
        self.swap(0, last);
        let entry = self.heap.pop().ok_or(GraphError::EmptyQueue)?;
        self.slots.remove(&entry.key);

        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        Ok((entry.key, entry.priority))
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        self.slots.insert(self.heap[a].key, a);
        self.slots.insert(self.heap[b].key, b);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[slot].rank(&self.heap[parent]) != Ordering::Less {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;

            if left < len && self.heap[left].rank(&self.heap[smallest]) == Ordering::Less {
                smallest = left;
            }
            if right < len && self.heap[right].rank(&self.heap[smallest]) == Ordering::Less {
                smallest = right;
            }
            if smallest == slot {
                break;
            }

            self.swap(slot, smallest);
            slot = smallest;
        }
    }
}
