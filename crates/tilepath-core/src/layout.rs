//! Maps built from ASCII pictures.
//!
//! A [`Layout`] parses a block of text into a rectangle of symbols, which
//! can then be turned into a [`TileGrid`] through a symbol → tile mapping.
//! Handy for tests and hand-drawn demo levels:
//!
//! ```text
//! #####
//! #S..#
//! #.#.#
//! #..T#
//! #####
//! ```

use crate::geom::Point;
use crate::grid::{Tile, TileGrid};
use thiserror::Error;

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Lines have inconsistent widths.
    #[error("layout: line {line} is {found} symbols wide, expected {expected}")]
    InconsistentSize {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A symbol not in the allowed set was found.
    #[error("layout contains invalid symbol \u{201c}{symbol}\u{201d} at {pos}")]
    InvalidSymbol { symbol: char, pos: Point },
}

/// A rectangle of symbols parsed from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    rows: Vec<Vec<char>>,
    size: Point,
}

impl Layout {
    /// Parse a layout accepting any symbol.
    ///
    /// Leading and trailing blank lines are ignored, as is surrounding
    /// whitespace of the whole block; every remaining line must have the
    /// same width.
    pub fn parse(s: &str) -> Result<Self, LayoutError> {
        Self::parse_with_symbols(s, "")
    }

    /// Parse a layout, rejecting any symbol not in `symbols` (unless
    /// `symbols` is empty).
    pub fn parse_with_symbols(s: &str, symbols: &str) -> Result<Self, LayoutError> {
        let mut rows: Vec<Vec<char>> = Vec::new();
        for (y, line) in s.trim().lines().enumerate() {
            let row: Vec<char> = line.trim_end_matches('\r').chars().collect();
            if let Some(first) = rows.first()
                && first.len() != row.len()
            {
                return Err(LayoutError::InconsistentSize {
                    line: y,
                    expected: first.len(),
                    found: row.len(),
                });
            }
            if !symbols.is_empty()
                && let Some(x) = row.iter().position(|&c| !symbols.contains(c))
            {
                return Err(LayoutError::InvalidSymbol {
                    symbol: row[x],
                    pos: Point::new(x as i32, y as i32),
                });
            }
            rows.push(row);
        }
        let width = rows.first().map_or(0, Vec::len);
        let size = Point::new(width as i32, rows.len() as i32);
        Ok(Self { rows, size })
    }

    /// The (width, height) of the layout in tiles.
    pub fn size(&self) -> Point {
        self.size
    }

    /// The symbol at `p`, or `None` when outside the layout.
    pub fn symbol(&self, p: Point) -> Option<char> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        self.rows
            .get(p.y as usize)
            .and_then(|row| row.get(p.x as usize))
            .copied()
    }

    /// Position of the first occurrence of `symbol`, scanning row by row.
    pub fn find(&self, symbol: char) -> Option<Point> {
        self.iter().find(|&(_, c)| c == symbol).map(|(p, _)| p)
    }

    /// Iterate over all positions and their symbols.
    pub fn iter(&self) -> impl Iterator<Item = (Point, char)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &c)| (Point::new(x as i32, y as i32), c))
        })
    }

    /// Build a grid of the layout's size using a mapping from symbols to
    /// tiles.
    pub fn to_grid(&self, f: impl Fn(char) -> Tile) -> TileGrid {
        let mut grid = TileGrid::new(self.size.x, self.size.y);
        for (p, c) in self.iter() {
            grid.set(p, f(c));
        }
        grid
    }
}
