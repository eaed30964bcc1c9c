//! **tilepath-core** — geometry and grid types shared by the *tilepath*
//! crates.
//!
//! This crate provides the integer [`Point`] and half-open [`Range`] used to
//! address tiles, an owned [`TileGrid`] of terrain values, ASCII
//! [`Layout`] parsing and seeded random obstacle [`Scatter`]ing for building
//! test and demo maps.

pub mod geom;
pub mod grid;
pub mod layout;
pub mod scatter;

pub use geom::{Point, Range};
pub use grid::{Tile, TileGrid};
pub use layout::{Layout, LayoutError};
pub use scatter::Scatter;
