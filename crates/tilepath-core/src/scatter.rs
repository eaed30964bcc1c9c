//! Seeded random obstacle placement.
//!
//! [`Scatter`] sprinkles obstacle tiles over a [`TileGrid`] at a given fill
//! ratio. It is used to build reproducible random maps for demos and
//! stress tests of the pathfinder.

use crate::geom::Point;
use crate::grid::{Tile, TileGrid};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random obstacle generator.
pub struct Scatter<R: Rng> {
    pub rng: R,
}

impl Scatter<StdRng> {
    /// Create a scatterer with a deterministic seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> Scatter<R> {
    /// Turn roughly `ratio` (0.0–1.0) of the grid's tiles into `obstacle`.
    ///
    /// Each tile independently becomes an obstacle with probability
    /// `ratio`; tiles listed in `keep_open` are never touched. Returns the
    /// number of tiles that were set.
    pub fn scatter(
        &mut self,
        grid: &mut TileGrid,
        obstacle: Tile,
        ratio: f64,
        keep_open: &[Point],
    ) -> usize {
        let ratio = ratio.clamp(0.0, 1.0);
        let mut placed = 0;
        for p in grid.bounds().iter() {
            if keep_open.contains(&p) {
                continue;
            }
            let r: f64 = self.rng.random();
            if r < ratio {
                grid.set(p, obstacle);
                placed += 1;
            }
        }
        placed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WALL: Tile = Tile(1);

    #[test]
    fn scatter_respects_keep_open() {
        let mut grid = TileGrid::new(10, 10);
        let keep = [Point::new(0, 0), Point::new(9, 9)];
        let placed = Scatter::seeded(7).scatter(&mut grid, WALL, 1.0, &keep);
        assert_eq!(placed, 98);
        assert_eq!(grid.at(Point::new(0, 0)), Some(Tile(0)));
        assert_eq!(grid.at(Point::new(9, 9)), Some(Tile(0)));
    }

    #[test]
    fn scatter_zero_ratio_places_nothing() {
        let mut grid = TileGrid::new(8, 8);
        let placed = Scatter::seeded(1).scatter(&mut grid, WALL, 0.0, &[]);
        assert_eq!(placed, 0);
        assert_eq!(grid.count(WALL), 0);
    }

    #[test]
    fn scatter_is_reproducible() {
        let mut a = TileGrid::new(20, 20);
        let mut b = TileGrid::new(20, 20);
        Scatter::seeded(42).scatter(&mut a, WALL, 0.3, &[]);
        Scatter::seeded(42).scatter(&mut b, WALL, 0.3, &[]);
        assert_eq!(a, b);
        let walls = a.count(WALL);
        assert!(walls > 0 && walls < 400);
    }
}
