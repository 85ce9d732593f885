//! Priority frontier for the weighted searches.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// One frontier entry.
///
/// Ordered by `priority`, then by insertion sequence so that equal
/// priorities pop first-in first-out and results are reproducible.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Entry {
    pub priority: f64,
    pub seq: u64,
    pub cost: f64,
    pub index: usize,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-heap of [`Entry`] with a built-in sequence counter.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Reverse<Entry>>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, index: usize, cost: f64, priority: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry {
            priority,
            seq,
            cost,
            index,
        }));
    }

    pub fn pop(&mut self) -> Option<Entry> {
        self.heap.pop().map(|Reverse(e)| e)
    }
}
