/// The closed set: nodes already expanded in the current search.
///
/// Membership is a generation stamp per node, so clearing is O(1).
pub(crate) struct VisitedSet {
    stamps: Vec<u32>,
    generation: u32,
}

impl VisitedSet {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            stamps: vec![0; capacity],
            generation: 1,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            self.stamps.fill(0);
            self.generation = 1;
        }
    }

    #[inline]
    pub(crate) fn contains(&self, idx: usize) -> bool {
        self.stamps[idx] == self.generation
    }

    #[inline]
    pub(crate) fn insert(&mut self, idx: usize) {
        self.stamps[idx] = self.generation;
    }

    /// Reopen `idx`. Returns whether it was present.
    #[inline]
    pub(crate) fn remove(&mut self, idx: usize) -> bool {
        let present = self.contains(idx);
        if present {
            self.stamps[idx] = 0;
        }
        present
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_remove() {
        let mut v = VisitedSet::new(4);
        assert!(!v.contains(2));
        v.insert(2);
        assert!(v.contains(2));
        assert!(v.remove(2));
        assert!(!v.contains(2));
        assert!(!v.remove(2));
    }

    #[test]
    fn clear_drops_all_members() {
        let mut v = VisitedSet::new(4);
        v.insert(0);
        v.insert(3);
        v.clear();
        assert!(!v.contains(0));
        assert!(!v.contains(3));
    }

    #[test]
    fn clear_survives_wraparound() {
        let mut v = VisitedSet::new(2);
        v.generation = u32::MAX;
        v.insert(1);
        v.clear();
        assert_eq!(v.generation, 1);
        assert!(!v.contains(1));
        assert!(!v.contains(0));
    }
}
