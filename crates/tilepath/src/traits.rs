use tilepath_core::{Point, Range};

/// The map query surface a pathfinder searches.
///
/// Coordinates run over `[0, width_in_tiles()) × [0, height_in_tiles())`.
/// Blocking and costs may depend on who is moving: the associated
/// [`Mover`](Self::Mover) is handed back to every query unchanged and means
/// nothing to the pathfinder itself.
pub trait TileBasedMap {
    /// Identity of the agent being moved (e.g. walking vs. flying units).
    type Mover: ?Sized;

    /// Width of the map in tiles. Fixed for the map's lifetime.
    fn width_in_tiles(&self) -> i32;

    /// Height of the map in tiles. Fixed for the map's lifetime.
    fn height_in_tiles(&self) -> i32;

    /// Whether `mover` can not occupy or traverse the tile at `p`.
    fn blocked(&self, mover: &Self::Mover, p: Point) -> bool;

    /// Cost of a single step from `from` to the adjacent tile `to`.
    /// Must be non-negative.
    fn cost(&self, mover: &Self::Mover, from: Point, to: Point) -> f32;

    /// Called for every tile the search evaluates. Diagnostics only.
    fn path_finder_visited(&self, _p: Point) {}

    /// The map extents as a [`Range`] anchored at the origin.
    #[inline]
    fn range(&self) -> Range {
        Range::with_size(self.width_in_tiles(), self.height_in_tiles())
    }
}
