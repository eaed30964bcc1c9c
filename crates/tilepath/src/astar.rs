use log::{debug, trace, warn};
use tilepath_core::{Point, Range};

use crate::config::PathFinderConfig;
use crate::error::PathError;
use crate::frontier::Frontier;
use crate::heuristic::{AStarHeuristic, ClosestHeuristic};
use crate::node::NodeGrid;
use crate::path::{Path, Step};
use crate::traits::TileBasedMap;
use crate::visited::VisitedSet;

/// Extra cost added to a diagonal step when the diagonal penalty is
/// requested, so that a diagonal over unit orthogonal costs weighs √2.
pub const DIAGONAL_PENALTY: f32 = std::f32::consts::SQRT_2 - 1.0;

/// A* pathfinder over a [`TileBasedMap`].
///
/// The node arena, open set and closed set are allocated once for the map
/// size given at construction and reused by every
/// [`find_path`](Self::find_path) call. Searches take `&mut self`; use one
/// pathfinder per thread (or agent) to search concurrently.
pub struct AStarPathFinder<H = ClosestHeuristic> {
    nodes: NodeGrid,
    frontier: Frontier,
    visited: VisitedSet,
    heuristic: H,
    max_search_distance: u32,
    allow_diagonal_movement: bool,
}

impl AStarPathFinder<ClosestHeuristic> {
    /// Create a pathfinder for `map` using the straight-line heuristic.
    pub fn new<M: TileBasedMap + ?Sized>(map: &M, config: PathFinderConfig) -> Self {
        Self::with_heuristic(map, config, ClosestHeuristic)
    }
}

impl<H> AStarPathFinder<H> {
    /// Create a pathfinder for `map` with a custom heuristic.
    ///
    /// Only the map's extents are read here.
    pub fn with_heuristic<M: TileBasedMap + ?Sized>(
        map: &M,
        config: PathFinderConfig,
        heuristic: H,
    ) -> Self {
        let range = map.range();
        let len = range.len();
        Self {
            nodes: NodeGrid::new(range),
            frontier: Frontier::new(len),
            visited: VisitedSet::new(len),
            heuristic,
            max_search_distance: config.max_search_distance,
            allow_diagonal_movement: config.allow_diagonal_movement,
        }
    }

    /// The maximum search depth explored before giving up.
    #[inline]
    pub fn max_search_distance(&self) -> u32 {
        self.max_search_distance
    }

    /// Change the search-distance budget for subsequent searches.
    pub fn set_max_search_distance(&mut self, distance: u32) {
        self.max_search_distance = distance;
    }

    #[inline]
    pub fn allows_diagonal_movement(&self) -> bool {
        self.allow_diagonal_movement
    }

    /// The map extents this pathfinder was built for.
    #[inline]
    pub fn range(&self) -> Range {
        self.nodes.range()
    }

    #[inline]
    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// Find the cheapest path for `mover` from `start` to `target`.
    ///
    /// Returns `Ok(None)` when the target is blocked for `mover`, or when no
    /// path is found before the frontier or the search-distance budget runs
    /// out. When `use_diagonal_penalty` is set, every diagonal step costs an
    /// extra [`DIAGONAL_PENALTY`]. A start equal to an open target yields the
    /// one-step path even with a search distance of zero.
    ///
    /// # Errors
    ///
    /// [`PathError::MapSizeMismatch`] if `map` is not the size this
    /// pathfinder was built for, [`PathError::OutOfRange`] for coordinates
    /// outside the map, and [`PathError::NegativeCost`] /
    /// [`PathError::InvalidHeuristic`] when the map or heuristic break their
    /// contracts.
    pub fn find_path<M>(
        &mut self,
        map: &M,
        mover: &M::Mover,
        start: Point,
        target: Point,
        use_diagonal_penalty: bool,
    ) -> Result<Option<Path>, PathError>
    where
        M: TileBasedMap + ?Sized,
        H: AStarHeuristic<M>,
    {
        let range = self.nodes.range();
        let found = map.range();
        if found != range {
            return Err(PathError::MapSizeMismatch {
                expected: range,
                found,
            });
        }
        let start_idx = self
            .nodes
            .idx(start)
            .ok_or(PathError::OutOfRange { pos: start, range })?;
        let target_idx = self
            .nodes
            .idx(target)
            .ok_or(PathError::OutOfRange { pos: target, range })?;

        if map.blocked(mover, target) {
            debug!("target {target} is blocked, no search");
            return Ok(None);
        }
        if start_idx == target_idx {
            return Ok(Some(Path::from_reversed(vec![Step {
                pos: start,
                cost: 0.0,
            }])));
        }

        // Initial state: nothing visited, only the start tile open at cost 0.
        self.nodes.begin_search();
        self.frontier.clear();
        self.visited.clear();
        {
            let n = self.nodes.touch(start_idx);
            n.cost = 0.0;
            n.depth = 0;
            n.parent = None;
        }
        self.frontier.push(start_idx, 0.0);
        self.nodes.touch(target_idx).parent = None;

        let mut max_depth = 0;
        let mut expanded = 0usize;
        while max_depth < self.max_search_distance {
            let Some(current) = self.frontier.pop() else {
                break;
            };
            if current == target_idx {
                break;
            }
            self.visited.insert(current);
            expanded += 1;
            max_depth = self.expand(
                map,
                mover,
                current,
                start,
                target,
                use_diagonal_penalty,
                max_depth,
            )?;
        }

        if self.nodes.parent(target_idx).is_none() {
            if self.frontier.is_empty() {
                debug!("no path from {start} to {target} ({expanded} nodes expanded)");
            } else {
                debug!(
                    "search budget of {} exhausted between {start} and {target} \
                     ({expanded} nodes expanded, {} still open)",
                    self.max_search_distance,
                    self.frontier.len()
                );
            }
            return Ok(None);
        }

        // Walk the back-pointers from the target; the start tile is the only
        // node of this search without a parent.
        let mut steps = Vec::with_capacity(self.nodes.get(target_idx).depth as usize + 1);
        let mut cursor = Some(target_idx);
        while let Some(ci) = cursor {
            let n = self.nodes.get(ci);
            steps.push(Step {
                pos: n.pos,
                cost: n.cost,
            });
            cursor = self.nodes.parent(ci);
        }
        let path = Path::from_reversed(steps);
        debug!(
            "path from {start} to {target}: {} steps, cost {}, {expanded} nodes expanded",
            path.len(),
            path.total_cost()
        );
        Ok(Some(path))
    }

    /// Whether `p` is on the map and open for `mover`. The start tile always
    /// counts as open.
    fn valid_location<M>(&self, map: &M, mover: &M::Mover, start: Point, p: Point) -> Option<usize>
    where
        M: TileBasedMap + ?Sized,
    {
        let idx = self.nodes.idx(p)?;
        if p != start && map.blocked(mover, p) {
            return None;
        }
        Some(idx)
    }

    /// Evaluate every neighbour of `current`, admitting those reached more
    /// cheaply than before. Returns the updated maximum depth.
    #[allow(clippy::too_many_arguments)]
    fn expand<M>(
        &mut self,
        map: &M,
        mover: &M::Mover,
        current: usize,
        start: Point,
        target: Point,
        use_diagonal_penalty: bool,
        mut max_depth: u32,
    ) -> Result<u32, PathError>
    where
        M: TileBasedMap + ?Sized,
        H: AStarHeuristic<M>,
    {
        let (cp, current_cost, current_depth) = {
            let n = self.nodes.get(current);
            (n.pos, n.cost, n.depth)
        };

        for dx in -1..=1 {
            for dy in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let np = cp.shift(dx, dy);
                let diagonal = cp.is_diagonal_to(np);
                if diagonal {
                    if !self.allow_diagonal_movement {
                        continue;
                    }
                    // [B][#][B]
                    // [#][A][#]
                    // [B][#][B]
                    // No squeezing between the two orthogonal tiles.
                    if self
                        .valid_location(map, mover, start, cp.shift(0, dy))
                        .is_none()
                        || self
                            .valid_location(map, mover, start, cp.shift(dx, 0))
                            .is_none()
                    {
                        continue;
                    }
                }

                let Some(ni) = self.valid_location(map, mover, start, np) else {
                    continue;
                };

                let step_cost = map.cost(mover, cp, np);
                if !(step_cost >= 0.0) {
                    warn!("map returned movement cost {step_cost} from {cp} to {np}");
                    return Err(PathError::NegativeCost {
                        from: cp,
                        to: np,
                        cost: step_cost,
                    });
                }
                let mut tentative = current_cost + step_cost;
                if use_diagonal_penalty && diagonal {
                    tentative += DIAGONAL_PENALTY;
                }
                map.path_finder_visited(np);

                if tentative < self.nodes.cost(ni) {
                    let was_open = self.frontier.remove(ni);
                    let was_closed = self.visited.remove(ni);
                    if was_open || was_closed {
                        trace!(
                            "cheaper route to {np}: {} -> {tentative} (reopened: {was_closed})",
                            self.nodes.cost(ni)
                        );
                    }
                }

                if !self.frontier.contains(ni) && !self.visited.contains(ni) {
                    let estimate = self.heuristic.estimate(map, mover, np, target);
                    if !(estimate >= 0.0) {
                        warn!("heuristic returned {estimate} at {np}");
                        return Err(PathError::InvalidHeuristic { pos: np, estimate });
                    }
                    let n = self.nodes.touch(ni);
                    n.cost = tentative;
                    n.heuristic = estimate;
                    n.parent = Some(current);
                    n.depth = current_depth + 1;
                    max_depth = max_depth.max(n.depth);
                    let priority = n.total();
                    self.frontier.push(ni, priority);
                }
            }
        }

        Ok(max_depth)
    }
}
