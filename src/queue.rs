use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Min-priority queue.
///
/// Items with equal priority come out in the order they were pushed, so a
/// search driven by this queue is reproducible.
#[derive(Debug)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    sequence: u64,
}

#[derive(Debug)]
struct Entry<T> {
    priority: usize,
    sequence: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}

impl<T> Eq for Entry<T> {}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            sequence: 0,
        }
    }

    pub fn push(&mut self, priority: usize, item: T) {
        self.heap.push(Reverse(Entry {
            priority,
            sequence: self.sequence,
            item,
        }));
        self.sequence += 1;
    }

    /// Removes the item with the smallest priority.
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(entry)| entry.item)
    }

    pub fn peek_priority(&self) -> Option<usize> {
        self.heap.peek().map(|Reverse(entry)| entry.priority)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_smallest_priority_first() {
        let mut queue = PriorityQueue::new();
        queue.push(5, "five");
        queue.push(1, "one");
        queue.push(3, "three");

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek_priority(), Some(1));
        assert_eq!(queue.pop(), Some("one"));
        assert_eq!(queue.pop(), Some("three"));
        assert_eq!(queue.pop(), Some("five"));
        assert_eq!(queue.pop(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn equal_priorities_pop_in_push_order() {
        let mut queue = PriorityQueue::new();
        for item in 0..10 {
            queue.push(7, item);
        }
        queue.push(2, 100);

        assert_eq!(queue.pop(), Some(100));
        let rest: Vec<i32> = std::iter::from_fn(|| queue.pop()).collect();
        assert_eq!(rest, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn payload_needs_no_ordering() {
        struct Opaque;
        let mut queue = PriorityQueue::default();
        queue.push(0, Opaque);
        assert!(queue.pop().is_some());
    }
}
