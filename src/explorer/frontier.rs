//! Max-priority frontier for the graph exploration

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use crate::scoring::ScoredUrl;
use crate::urls::normalize_url;

/// Heap entry ordered by graph score, older entries first on ties
#[derive(Debug)]
struct Entry {
    score: f64,
    seq: u64,
    node: ScoredUrl,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Priority queue of nodes to expand plus the set of every URL ever queued.
///
/// Deduplication happens on insertion: once a normalized URL has been pushed
/// or marked seen, it can never enter the queue again.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    seen: HashSet<String>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `node` unless its URL was already seen. Returns whether it was queued.
    pub fn push(&mut self, node: ScoredUrl) -> bool {
        if !self.seen.insert(normalize_url(&node.url)) {
            return false;
        }
        let entry = Entry {
            score: node.graph_score(),
            seq: self.next_seq,
            node,
        };
        self.next_seq += 1;
        self.heap.push(entry);
        true
    }

    /// Remove and return the highest-scoring node
    pub fn pop(&mut self) -> Option<ScoredUrl> {
        self.heap.pop().map(|entry| entry.node)
    }

    /// Record a URL as seen without queueing it, e.g. a redirect target
    pub fn mark_seen(&mut self, url: &str) -> bool {
        self.seen.insert(normalize_url(url))
    }

    pub fn is_seen(&self, url: &str) -> bool {
        self.seen.contains(&normalize_url(url))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drain the nodes never popped, in priority order
    pub fn into_remaining(self) -> Vec<ScoredUrl> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .rev()
            .map(|entry| entry.node)
            .collect()
    }
}
