//! An integer-tile grid for map representation.
//!
//! [`Tile`] is a newtype over `i32`; what each value means (wall, floor,
//! water, ...) is up to the host. [`TileGrid`] owns a `width × height`
//! row-major buffer of tiles.

use crate::geom::{Point, Range};

/// A map tile value, wrapping an `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile(pub i32);

/// A 2D grid of [`Tile`] values anchored at the origin.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileGrid {
    tiles: Vec<Tile>,
    bounds: Range,
}

impl TileGrid {
    /// Create a new grid filled with `Tile(0)`.
    ///
    /// Negative dimensions are treated as zero.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::with_size(width, height);
        Self {
            tiles: vec![Tile::default(); bounds.len()],
            bounds,
        }
    }

    /// Returns the bounding range of this grid.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Width of the grid.
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height of the grid.
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Get the tile at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Tile> {
        self.bounds.index(p).map(|i| self.tiles[i])
    }

    /// Set the tile at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, tile: Tile) {
        if let Some(i) = self.bounds.index(p) {
            self.tiles[i] = tile;
        }
    }

    /// Count how many tiles equal the given tile.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Iterate over `(position, tile)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.bounds.iter().zip(self.tiles.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_size() {
        let g = TileGrid::new(10, 5);
        assert_eq!(g.width(), 10);
        assert_eq!(g.height(), 5);
        assert_eq!(g.count(Tile(0)), 50);
    }

    #[test]
    fn test_negative_size_is_empty() {
        let g = TileGrid::new(-3, 4);
        assert!(g.bounds().is_empty());
        assert_eq!(g.at(Point::ZERO), None);
    }

    #[test]
    fn test_set_and_at() {
        let mut g = TileGrid::new(4, 4);
        let p = Point::new(2, 3);
        g.set(p, Tile(42));
        assert_eq!(g.at(p), Some(Tile(42)));
        assert_eq!(g.at(Point::new(0, 0)), Some(Tile(0)));
        assert_eq!(g.at(Point::new(10, 10)), None);
        g.set(Point::new(-1, 0), Tile(7));
        assert_eq!(g.count(Tile(7)), 0);
    }

    #[test]
    fn test_count() {
        let mut g = TileGrid::new(5, 5);
        g.set(Point::new(0, 0), Tile(2));
        g.set(Point::new(4, 4), Tile(2));
        assert_eq!(g.count(Tile(0)), 23);
        assert_eq!(g.count(Tile(2)), 2);
    }

    #[test]
    fn test_iter_is_row_major() {
        let mut g = TileGrid::new(3, 2);
        g.set(Point::new(1, 1), Tile(11));
        let all: Vec<_> = g.iter().collect();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], (Point::new(0, 0), Tile(0)));
        assert_eq!(all[4], (Point::new(1, 1), Tile(11)));
    }
}
