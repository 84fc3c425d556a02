//! Priority queue used by the A* frontier.
//!
//! Items are stored in a binary heap keyed by `(priority, insertion_order)`.
//! Depending on [`Order`], the lowest or highest priority is dequeued first;
//! ties are always broken by insertion order (FIFO). The same item may be
//! enqueued several times with different priorities.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Which end of the priority range is served first.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Order {
    #[default]
    LowFirst,
    HighFirst,
}

#[derive(Debug)]
struct Entry<T> {
    item: T,
    priority: f64,
    /// Sort key: `priority` for low-first queues, its negation otherwise.
    key: f64,
    /// Monotonically increasing counter used to break ties.
    seq: u64,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Wrapped in Reverse for the heap: smaller key first, then smaller seq.
        self.key
            .total_cmp(&other.key)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A priority queue of `(item, priority)` pairs with duplicates allowed.
///
/// Priorities are `f64` compared with [`f64::total_cmp`].
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    order: Order,
    seq: u64,
}

impl<T> PriorityQueue<T> {
    /// Create an empty queue serving the lowest priority first.
    pub fn new() -> Self {
        Self::with_order(Order::LowFirst)
    }

    /// Create an empty queue with the given service order.
    pub fn with_order(order: Order) -> Self {
        Self {
            heap: BinaryHeap::new(),
            order,
            seq: 0,
        }
    }

    pub fn order(&self) -> Order {
        self.order
    }

    /// Add `item` with `priority`. Returns the queue for chaining.
    pub fn enqueue(&mut self, item: T, priority: f64) -> &mut Self {
        let key = match self.order {
            Order::LowFirst => priority,
            Order::HighFirst => -priority,
        };
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry {
            item,
            priority,
            key,
            seq,
        }));
        self
    }

    /// Remove and return the next item, or `None` when empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(e)| e.item)
    }

    /// Like [`dequeue`](Self::dequeue), also returning the priority.
    pub fn dequeue_with_priority(&mut self) -> Option<(T, f64)> {
        self.heap.pop().map(|Reverse(e)| (e.item, e.priority))
    }

    /// Priority of the next item without removing it.
    pub fn peek_priority(&self) -> Option<f64> {
        self.heap.peek().map(|Reverse(e)| e.priority)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
