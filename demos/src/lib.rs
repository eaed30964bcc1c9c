//! Shared model for the pathfinding demo.
//!
//! A [`Scenario`] is a terrain grid with a start and a target, either drawn
//! by hand as a [`Layout`] or scattered at random. [`Terrain`] gives walls
//! and water their meaning for each [`Unit`], and [`render`] draws the
//! result of a search as ASCII.

use std::fmt::Write as _;

use tilepath::{GridMap, Path, PathError, TerrainRules};
use tilepath_core::{Layout, LayoutError, Point, Scatter, Tile, TileGrid};

pub const FLOOR: Tile = Tile(0);
pub const WALL: Tile = Tile(1);
pub const WATER: Tile = Tile(2);

/// Symbols accepted in map files.
pub const MAP_SYMBOLS: &str = ".#~ST";

/// Errors reported by the demo.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("reading map: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Path(#[from] PathError),
    #[error("map has no {0} position, mark it with a symbol or pass it on the command line")]
    MissingEndpoint(&'static str),
}

/// Who is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Stopped by walls and water.
    Walker,
    /// Stopped by walls only.
    Flyer,
}

/// Terrain rules: walls block everyone, water blocks walkers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Terrain;

impl TerrainRules for Terrain {
    type Mover = Unit;

    fn passable(&self, mover: &Unit, tile: Tile) -> bool {
        match tile {
            WALL => false,
            WATER => *mover == Unit::Flyer,
            _ => true,
        }
    }
}

/// A map with optional start and target markers.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub grid: TileGrid,
    pub start: Option<Point>,
    pub target: Option<Point>,
}

impl Scenario {
    /// Parse a hand-drawn map. `S` and `T` mark the start and target and
    /// count as floor.
    pub fn parse(s: &str) -> Result<Self, DemoError> {
        let layout = Layout::parse_with_symbols(s, MAP_SYMBOLS)?;
        let grid = layout.to_grid(|c| match c {
            '#' => WALL,
            '~' => WATER,
            _ => FLOOR,
        });
        Ok(Self {
            grid,
            start: layout.find('S'),
            target: layout.find('T'),
        })
    }

    /// A `width`×`height` map with walls scattered at `ratio`, keeping the
    /// opposite corners open as start and target.
    pub fn random(width: i32, height: i32, seed: u64, ratio: f64) -> Self {
        let mut grid = TileGrid::new(width, height);
        let start = Point::ZERO;
        let target = Point::new(width - 1, height - 1);
        let mut scatter = Scatter::seeded(seed);
        let walls = scatter.scatter(&mut grid, WALL, ratio, &[start, target]);
        log::debug!("scattered {walls} walls over a {width}x{height} map (seed {seed})");
        Self {
            grid,
            start: Some(start),
            target: Some(target),
        }
    }

    /// The start and target, with `start`/`target` overriding the map's own
    /// markers.
    pub fn endpoints(
        &self,
        start: Option<Point>,
        target: Option<Point>,
    ) -> Result<(Point, Point), DemoError> {
        let start = start
            .or(self.start)
            .ok_or(DemoError::MissingEndpoint("start"))?;
        let target = target
            .or(self.target)
            .ok_or(DemoError::MissingEndpoint("target"))?;
        Ok((start, target))
    }
}

/// Draw the map with the search footprint (`+`) and the path (`*`).
pub fn render(
    map: &GridMap<'_, Terrain>,
    path: Option<&Path>,
    start: Point,
    target: Point,
) -> String {
    let grid = map.grid();
    let mut out = String::with_capacity(grid.bounds().len() + grid.height() as usize);
    for (p, tile) in grid.iter() {
        let c = if p == start {
            'S'
        } else if p == target {
            'T'
        } else if path.is_some_and(|path| path.contains(p)) {
            '*'
        } else {
            match tile {
                WALL => '#',
                WATER => '~',
                _ if map.visited(p) => '+',
                _ => '.',
            }
        };
        out.push(c);
        if p.x == grid.width() - 1 {
            out.push('\n');
        }
    }
    out
}

/// One-line summary of a search result.
pub fn summary(path: Option<&Path>, visited: usize) -> String {
    let mut s = String::new();
    match path {
        Some(path) => {
            let _ = write!(
                s,
                "path: {} steps, cost {:.3}",
                path.len(),
                path.total_cost()
            );
        }
        None => s.push_str("no path"),
    }
    let _ = write!(s, ", {visited} tiles evaluated");
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilepath::{AStarPathFinder, PathFinderConfig};

    const RIVER: &str = "
S.~..
..~..
..~.T
.....";

    #[test]
    fn parse_finds_markers() {
        let sc = Scenario::parse(RIVER).unwrap();
        assert_eq!(sc.start, Some(Point::new(0, 0)));
        assert_eq!(sc.target, Some(Point::new(4, 2)));
        assert_eq!(sc.grid.at(Point::new(2, 1)), Some(WATER));
        assert_eq!(sc.grid.at(Point::new(0, 0)), Some(FLOOR));
    }

    #[test]
    fn parse_rejects_unknown_symbols() {
        assert!(matches!(
            Scenario::parse("S.x\n..T"),
            Err(DemoError::Layout(LayoutError::InvalidSymbol { symbol: 'x', .. }))
        ));
    }

    #[test]
    fn endpoints_can_be_overridden() {
        let sc = Scenario::parse("...\n...").unwrap();
        assert!(matches!(
            sc.endpoints(None, None),
            Err(DemoError::MissingEndpoint("start"))
        ));
        let (s, t) = sc
            .endpoints(Some(Point::new(0, 0)), Some(Point::new(2, 1)))
            .unwrap();
        assert_eq!((s, t), (Point::new(0, 0), Point::new(2, 1)));
    }

    #[test]
    fn random_keeps_corners_open() {
        let sc = Scenario::random(12, 8, 3, 1.0);
        assert_eq!(sc.grid.at(Point::new(0, 0)), Some(FLOOR));
        assert_eq!(sc.grid.at(Point::new(11, 7)), Some(FLOOR));
        assert_eq!(sc.grid.count(WALL), 12 * 8 - 2);
    }

    #[test]
    fn walker_detours_flyer_crosses() {
        let sc = Scenario::parse(RIVER).unwrap();
        let (start, target) = sc.endpoints(None, None).unwrap();
        let map = GridMap::new(&sc.grid, Terrain);
        let mut finder = AStarPathFinder::new(&map, PathFinderConfig::default());

        let walk = finder
            .find_path(&map, &Unit::Walker, start, target, false)
            .unwrap()
            .unwrap();
        assert!(walk.contains(Point::new(2, 3)));

        let fly = finder
            .find_path(&map, &Unit::Flyer, start, target, false)
            .unwrap()
            .unwrap();
        assert!(fly.len() < walk.len());
    }

    #[test]
    fn render_marks_path_and_endpoints() {
        let sc = Scenario::parse("S..\n.#.\n..T").unwrap();
        let map = GridMap::new(&sc.grid, Terrain);
        let config = PathFinderConfig {
            allow_diagonal_movement: false,
            ..PathFinderConfig::default()
        };
        let mut finder = AStarPathFinder::new(&map, config);
        let (start, target) = sc.endpoints(None, None).unwrap();
        let path = finder
            .find_path(&map, &Unit::Walker, start, target, false)
            .unwrap();
        let picture = render(&map, path.as_ref(), start, target);
        let lines: Vec<&str> = picture.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(&lines[0][..1], "S");
        assert_eq!(&lines[1][1..2], "#");
        assert_eq!(&lines[2][2..], "T");
        assert_eq!(picture.matches('*').count(), 3);
        assert!(summary(path.as_ref(), map.visit_count()).starts_with("path: 5 steps, cost 4.000"));
    }

    #[test]
    fn summary_without_path() {
        assert_eq!(summary(None, 7), "no path, 7 tiles evaluated");
    }
}
