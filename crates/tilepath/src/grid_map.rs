//! A ready-made [`TileBasedMap`] over a [`TileGrid`].
//!
//! [`GridMap`] borrows a grid and delegates the meaning of each [`Tile`] to
//! a [`TerrainRules`] implementation, which decides per mover what is
//! passable and what a step costs. It also keeps a log of every tile the
//! search evaluated, so hosts can draw the search footprint.

use std::cell::RefCell;

use tilepath_core::{Point, Tile, TileGrid};

use crate::traits::TileBasedMap;

/// How movers interact with tile values.
pub trait TerrainRules {
    /// Identity of the agent being moved.
    type Mover: ?Sized;

    /// Whether `mover` may enter a tile of this kind.
    fn passable(&self, mover: &Self::Mover, tile: Tile) -> bool;

    /// Cost for `mover` to step from a `from` tile onto a `to` tile.
    fn cost(&self, _mover: &Self::Mover, _from: Tile, _to: Tile) -> f32 {
        1.0
    }
}

/// A [`TileBasedMap`] view of a [`TileGrid`].
pub struct GridMap<'a, R> {
    grid: &'a TileGrid,
    rules: R,
    visits: RefCell<Vec<bool>>,
}

impl<'a, R: TerrainRules> GridMap<'a, R> {
    pub fn new(grid: &'a TileGrid, rules: R) -> Self {
        Self {
            grid,
            rules,
            visits: RefCell::new(vec![false; grid.bounds().len()]),
        }
    }

    pub fn grid(&self) -> &TileGrid {
        self.grid
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Whether any search evaluated `p` since the last
    /// [`clear_visits`](Self::clear_visits).
    pub fn visited(&self, p: Point) -> bool {
        self.grid
            .bounds()
            .index(p)
            .is_some_and(|i| self.visits.borrow()[i])
    }

    /// Number of distinct tiles evaluated since the last clear.
    pub fn visit_count(&self) -> usize {
        self.visits.borrow().iter().filter(|&&v| v).count()
    }

    pub fn clear_visits(&self) {
        self.visits.borrow_mut().fill(false);
    }
}

impl<R: TerrainRules> TileBasedMap for GridMap<'_, R> {
    type Mover = R::Mover;

    fn width_in_tiles(&self) -> i32 {
        self.grid.width()
    }

    fn height_in_tiles(&self) -> i32 {
        self.grid.height()
    }

    fn blocked(&self, mover: &Self::Mover, p: Point) -> bool {
        self.grid
            .at(p)
            .is_none_or(|tile| !self.rules.passable(mover, tile))
    }

    fn cost(&self, mover: &Self::Mover, from: Point, to: Point) -> f32 {
        match (self.grid.at(from), self.grid.at(to)) {
            (Some(a), Some(b)) => self.rules.cost(mover, a, b),
            _ => f32::INFINITY,
        }
    }

    fn path_finder_visited(&self, p: Point) {
        if let Some(i) = self.grid.bounds().index(p) {
            self.visits.borrow_mut()[i] = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AStarPathFinder, PathFinderConfig};
    use tilepath_core::Layout;

    const FLOOR: Tile = Tile(0);
    const WALL: Tile = Tile(1);
    const MUD: Tile = Tile(2);

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Unit {
        Infantry,
        Hover,
    }

    struct Rules;

    impl TerrainRules for Rules {
        type Mover = Unit;

        fn passable(&self, _mover: &Unit, tile: Tile) -> bool {
            tile != WALL
        }

        fn cost(&self, mover: &Unit, _from: Tile, to: Tile) -> f32 {
            match (mover, to) {
                (Unit::Infantry, MUD) => 5.0,
                _ => 1.0,
            }
        }
    }

    fn grid(s: &str) -> TileGrid {
        Layout::parse(s).unwrap().to_grid(|c| match c {
            '#' => WALL,
            '%' => MUD,
            _ => FLOOR,
        })
    }

    #[test]
    fn blocked_outside_and_on_walls() {
        let g = grid("
.#
..");
        let map = GridMap::new(&g, Rules);
        assert_eq!(map.width_in_tiles(), 2);
        assert_eq!(map.height_in_tiles(), 2);
        assert!(map.blocked(&Unit::Infantry, Point::new(1, 0)));
        assert!(!map.blocked(&Unit::Infantry, Point::new(0, 0)));
        assert!(map.blocked(&Unit::Infantry, Point::new(2, 0)));
    }

    #[test]
    fn costs_depend_on_mover() {
        let g = grid("
.%.
...
...");
        let map = GridMap::new(&g, Rules);
        let config = PathFinderConfig {
            allow_diagonal_movement: false,
            ..PathFinderConfig::default()
        };
        let mut finder = AStarPathFinder::new(&map, config);
        let from = Point::new(0, 0);
        let to = Point::new(2, 0);

        let hover = finder.find_path(&map, &Unit::Hover, from, to, false).unwrap().unwrap();
        assert_eq!(hover.total_cost(), 2.0);
        assert!(hover.contains(Point::new(1, 0)));

        let infantry = finder.find_path(&map, &Unit::Infantry, from, to, false).unwrap().unwrap();
        assert_eq!(infantry.total_cost(), 4.0);
        assert!(!infantry.contains(Point::new(1, 0)));
    }

    #[test]
    fn records_search_footprint() {
        let g = grid("
.....
.###.
.....");
        let map = GridMap::new(&g, Rules);
        let mut finder = AStarPathFinder::new(&map, PathFinderConfig::default());
        assert_eq!(map.visit_count(), 0);
        finder
            .find_path(&map, &Unit::Infantry, Point::new(0, 1), Point::new(4, 1), true)
            .unwrap()
            .unwrap();
        assert!(map.visit_count() > 0);
        assert!(map.visited(Point::new(4, 1)));
        assert!(!map.visited(Point::new(2, 1)));
        assert!(!map.visited(Point::new(-1, 0)));

        map.clear_visits();
        assert_eq!(map.visit_count(), 0);
    }
}
