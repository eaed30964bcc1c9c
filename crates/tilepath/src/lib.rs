//! A* pathfinding over tile-based maps.
//!
//! The host application describes its world through [`TileBasedMap`]: grid
//! extents, a per-mover blocked-cell predicate, a per-mover step cost and an
//! optional visit notification. [`AStarPathFinder`] owns a node arena sized
//! to that map and answers [`find_path`](AStarPathFinder::find_path)
//! queries, reusing its arena so that repeated searches allocate only the
//! returned [`Path`].
//!
//! ```
//! use tilepath::{AStarPathFinder, PathFinderConfig, TileBasedMap};
//! use tilepath_core::Point;
//!
//! struct Open;
//!
//! impl TileBasedMap for Open {
//!     type Mover = ();
//!     fn width_in_tiles(&self) -> i32 { 5 }
//!     fn height_in_tiles(&self) -> i32 { 5 }
//!     fn blocked(&self, _: &(), _: Point) -> bool { false }
//!     fn cost(&self, _: &(), _: Point, _: Point) -> f32 { 1.0 }
//! }
//!
//! let config = PathFinderConfig { allow_diagonal_movement: false, ..Default::default() };
//! let mut finder = AStarPathFinder::new(&Open, config);
//! let path = finder
//!     .find_path(&Open, &(), Point::new(0, 0), Point::new(4, 4), false)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(path.len(), 9);
//! assert_eq!(path.total_cost(), 8.0);
//! ```
//!
//! # Modules
//!
//! | Module | Role |
//! |---|---|
//! | `heuristic` | cost-to-target estimators |
//! | `node` | the reusable search node arena |
//! | `frontier` / `visited` | open and closed sets |
//! | `astar` | the search driver |
//! | `path` | the returned step sequence |
//! | `grid_map` | a ready-made [`TileBasedMap`] over a [`TileGrid`](tilepath_core::TileGrid) |

mod astar;
mod config;
mod error;
mod frontier;
mod grid_map;
mod heuristic;
mod node;
mod path;
mod traits;
mod visited;

pub use astar::{AStarPathFinder, DIAGONAL_PENALTY};
pub use config::PathFinderConfig;
pub use error::PathError;
pub use grid_map::{GridMap, TerrainRules};
pub use heuristic::{AStarHeuristic, ClosestHeuristic, ClosestSquaredHeuristic, ManhattanHeuristic};
pub use path::{Path, Step};
pub use traits::TileBasedMap;
