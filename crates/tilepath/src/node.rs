use tilepath_core::{Point, Range};

/// One search record per tile.
///
/// Fields other than `pos` are only meaningful when `generation` matches the
/// grid's current generation; older records read as untouched.
#[derive(Debug, Clone)]
pub(crate) struct SearchNode {
    pub(crate) pos: Point,
    pub(crate) cost: f32,
    pub(crate) heuristic: f32,
    pub(crate) depth: u32,
    pub(crate) parent: Option<usize>,
    generation: u32,
}

impl SearchNode {
    fn new(pos: Point) -> Self {
        Self {
            pos,
            cost: 0.0,
            heuristic: 0.0,
            depth: 0,
            parent: None,
            generation: 0,
        }
    }

    /// Priority key in the frontier.
    #[inline]
    pub(crate) fn total(&self) -> f32 {
        self.cost + self.heuristic
    }
}

/// The reusable node arena, one [`SearchNode`] per tile in row-major order.
///
/// Allocated once for a map size. Each search bumps the generation so that
/// records written by earlier searches are ignored without a full reset.
pub(crate) struct NodeGrid {
    range: Range,
    nodes: Vec<SearchNode>,
    generation: u32,
}

impl NodeGrid {
    pub(crate) fn new(range: Range) -> Self {
        Self {
            range,
            nodes: range.iter().map(SearchNode::new).collect(),
            generation: 0,
        }
    }

    #[inline]
    pub(crate) fn range(&self) -> Range {
        self.range
    }

    /// Start a new search: every record becomes untouched.
    pub(crate) fn begin_search(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: stale records could alias the new generation.
            for n in self.nodes.iter_mut() {
                n.generation = 0;
            }
            self.generation = 1;
        }
    }

    /// Flat index of `p`, or `None` when outside the map.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        self.range.index(p)
    }

    #[inline]
    pub(crate) fn get(&self, idx: usize) -> &SearchNode {
        &self.nodes[idx]
    }

    /// The node at `idx`, reinitialized first if the current search has not
    /// touched it yet.
    pub(crate) fn touch(&mut self, idx: usize) -> &mut SearchNode {
        let generation = self.generation;
        let n = &mut self.nodes[idx];
        if n.generation != generation {
            n.generation = generation;
            n.cost = f32::INFINITY;
            n.heuristic = 0.0;
            n.depth = 0;
            n.parent = None;
        }
        n
    }

    /// Recorded cost of `idx` in the current search; `+∞` if untouched.
    #[inline]
    pub(crate) fn cost(&self, idx: usize) -> f32 {
        let n = &self.nodes[idx];
        if n.generation == self.generation {
            n.cost
        } else {
            f32::INFINITY
        }
    }

    /// Back-pointer of `idx` in the current search.
    #[inline]
    pub(crate) fn parent(&self, idx: usize) -> Option<usize> {
        let n = &self.nodes[idx];
        if n.generation == self.generation {
            n.parent
        } else {
            None
        }
    }
}
