//! Cost-to-target estimators used to order the A* frontier.
//!
//! The search does not rely on admissibility for termination or for node
//! reopening, so inadmissible heuristics are allowed: they trade path
//! optimality for fewer expansions.

use tilepath_core::Point;

use crate::traits::TileBasedMap;

/// Estimates the remaining cost from one tile to the target.
///
/// Implemented for every `Fn(&M, &M::Mover, Point, Point) -> f32` closure.
pub trait AStarHeuristic<M: TileBasedMap + ?Sized> {
    /// Estimated cost of moving `mover` from `from` to `to`. Must be
    /// non-negative.
    fn estimate(&self, map: &M, mover: &M::Mover, from: Point, to: Point) -> f32;
}

impl<M, F> AStarHeuristic<M> for F
where
    M: TileBasedMap + ?Sized,
    F: Fn(&M, &M::Mover, Point, Point) -> f32,
{
    #[inline]
    fn estimate(&self, map: &M, mover: &M::Mover, from: Point, to: Point) -> f32 {
        self(map, mover, from, to)
    }
}

#[inline]
fn deltas(from: Point, to: Point) -> (f32, f32) {
    let d = to - from;
    (d.x as f32, d.y as f32)
}

/// Straight-line (Euclidean) distance. The default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClosestHeuristic;

impl<M: TileBasedMap + ?Sized> AStarHeuristic<M> for ClosestHeuristic {
    #[inline]
    fn estimate(&self, _map: &M, _mover: &M::Mover, from: Point, to: Point) -> f32 {
        let (dx, dy) = deltas(from, to);
        (dx * dx + dy * dy).sqrt()
    }
}

/// Squared Euclidean distance.
///
/// Skips the square root and strongly favours tiles near the target, so it
/// overestimates and may return longer paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClosestSquaredHeuristic;

impl<M: TileBasedMap + ?Sized> AStarHeuristic<M> for ClosestSquaredHeuristic {
    #[inline]
    fn estimate(&self, _map: &M, _mover: &M::Mover, from: Point, to: Point) -> f32 {
        let (dx, dy) = deltas(from, to);
        dx * dx + dy * dy
    }
}

/// Manhattan distance scaled by the cheapest possible step cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManhattanHeuristic {
    pub minimum_cost: f32,
}

impl ManhattanHeuristic {
    /// Heuristic for maps whose cheapest step costs `minimum_cost`.
    pub const fn new(minimum_cost: f32) -> Self {
        Self { minimum_cost }
    }
}

impl Default for ManhattanHeuristic {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl<M: TileBasedMap + ?Sized> AStarHeuristic<M> for ManhattanHeuristic {
    #[inline]
    fn estimate(&self, _map: &M, _mover: &M::Mover, from: Point, to: Point) -> f32 {
        let (dx, dy) = deltas(from, to);
        self.minimum_cost * (dx.abs() + dy.abs())
    }
}
