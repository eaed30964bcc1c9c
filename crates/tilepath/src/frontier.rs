use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry ordered by priority, then by insertion order.
#[derive(Clone, Copy, Debug)]
struct Entry {
    idx: usize,
    priority: f32,
    seq: u64,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest priority first,
        // and the earliest insertion among equal priorities.
        other
            .priority
            .total_cmp(&self.priority)
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

/// The open set: nodes discovered but not yet finalized.
///
/// Removal is lazy. `live[idx]` holds the sequence number of the heap entry
/// that currently represents node `idx`; any other entry for that node is
/// stale and skipped when popped. Sequence numbers never repeat, so entries
/// from before the last [`clear`](Self::clear) can never look live.
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    live: Vec<u64>,
    next_seq: u64,
    base_seq: u64,
    len: usize,
}

impl Frontier {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            live: vec![0; capacity],
            next_seq: 0,
            base_seq: 0,
            len: 0,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.heap.clear();
        self.base_seq = self.next_seq;
        self.len = 0;
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub(crate) fn contains(&self, idx: usize) -> bool {
        self.live[idx] > self.base_seq
    }

    /// Insert `idx` with the given priority. Replaces any existing entry.
    pub(crate) fn push(&mut self, idx: usize, priority: f32) {
        if !self.contains(idx) {
            self.len += 1;
        }
        self.next_seq += 1;
        self.live[idx] = self.next_seq;
        self.heap.push(Entry {
            idx,
            priority,
            seq: self.next_seq,
        });
    }

    /// Remove `idx` if present.
    pub(crate) fn remove(&mut self, idx: usize) -> bool {
        if !self.contains(idx) {
            return false;
        }
        self.live[idx] = 0;
        self.len -= 1;
        true
    }

    /// Remove and return the node with the lowest priority.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        while let Some(entry) = self.heap.pop() {
            if self.live[entry.idx] != entry.seq || !self.contains(entry.idx) {
                continue;
            }
            self.live[entry.idx] = 0;
            self.len -= 1;
            return Some(entry.idx);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_priority_order() {
        let mut f = Frontier::new(8);
        f.push(0, 3.0);
        f.push(1, 1.0);
        f.push(2, 2.0);
        assert_eq!(f.len(), 3);
        assert_eq!(f.pop(), Some(1));
        assert_eq!(f.pop(), Some(2));
        assert_eq!(f.pop(), Some(0));
        assert_eq!(f.pop(), None);
        assert!(f.is_empty());
    }

    #[test]
    fn equal_priorities_pop_fifo() {
        let mut f = Frontier::new(8);
        for idx in [5, 2, 7, 0] {
            f.push(idx, 4.0);
        }
        let order: Vec<_> = std::iter::from_fn(|| f.pop()).collect();
        assert_eq!(order, vec![5, 2, 7, 0]);
    }

    #[test]
    fn removed_entries_are_skipped() {
        let mut f = Frontier::new(4);
        f.push(0, 1.0);
        f.push(1, 2.0);
        assert!(f.remove(0));
        assert!(!f.remove(0));
        assert!(!f.contains(0));
        assert_eq!(f.len(), 1);
        assert_eq!(f.pop(), Some(1));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn reinsertion_supersedes_old_entry() {
        let mut f = Frontier::new(4);
        f.push(0, 5.0);
        f.push(1, 3.0);
        f.push(0, 1.0);
        assert_eq!(f.len(), 2);
        assert_eq!(f.pop(), Some(0));
        assert_eq!(f.pop(), Some(1));
        // The stale 5.0 entry for node 0 must not resurface.
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn clear_forgets_everything() {
        let mut f = Frontier::new(4);
        f.push(2, 1.0);
        f.push(3, 1.0);
        f.clear();
        assert!(f.is_empty());
        assert!(!f.contains(2));
        f.push(3, 2.0);
        assert!(f.contains(3));
        assert_eq!(f.pop(), Some(3));
        assert_eq!(f.pop(), None);
    }
}
