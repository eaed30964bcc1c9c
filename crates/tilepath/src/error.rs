use thiserror::Error;
use tilepath_core::{Point, Range};

/// Reasons a [`find_path`](crate::AStarPathFinder::find_path) call can fail.
///
/// Not finding a path is not an error; it is reported as `Ok(None)`. These
/// variants are precondition violations by the caller or contract violations
/// by the map or heuristic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// A start or target coordinate lies outside the map.
    #[error("coordinate {pos} out of range {range}")]
    OutOfRange { pos: Point, range: Range },

    /// The map handed to the search is not the size the pathfinder was
    /// built for.
    #[error("map is {found} but the pathfinder was built for {expected}")]
    MapSizeMismatch { expected: Range, found: Range },

    /// The map reported a negative (or NaN) movement cost.
    #[error("negative movement cost {cost} from {from} to {to}")]
    NegativeCost { from: Point, to: Point, cost: f32 },

    /// The heuristic returned a negative (or NaN) estimate.
    #[error("invalid heuristic estimate {estimate} at {pos}")]
    InvalidHeuristic { pos: Point, estimate: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PathError::OutOfRange {
            pos: Point::new(9, 1),
            range: Range::with_size(5, 5),
        };
        assert_eq!(err.to_string(), "coordinate (9, 1) out of range [(0, 0)-(5, 5))");

        let err = PathError::NegativeCost {
            from: Point::new(0, 0),
            to: Point::new(1, 0),
            cost: -1.0,
        };
        assert!(err.to_string().starts_with("negative movement cost -1"));
    }
}
