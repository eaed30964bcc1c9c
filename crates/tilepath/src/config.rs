/// Default search-distance budget, in hops from the start.
pub const DEFAULT_MAX_SEARCH_DISTANCE: u32 = 100;

/// Construction-time settings for an [`AStarPathFinder`](crate::AStarPathFinder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PathFinderConfig {
    /// Maximum search depth (hop count from the start) explored before
    /// giving up. Can be changed later with
    /// [`set_max_search_distance`](crate::AStarPathFinder::set_max_search_distance).
    pub max_search_distance: u32,
    /// Whether the search may step diagonally (8-way) or only orthogonally
    /// (4-way).
    pub allow_diagonal_movement: bool,
}

impl Default for PathFinderConfig {
    fn default() -> Self {
        Self {
            max_search_distance: DEFAULT_MAX_SEARCH_DISTANCE,
            allow_diagonal_movement: true,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let config = PathFinderConfig {
            max_search_distance: 12,
            allow_diagonal_movement: false,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: PathFinderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let back: PathFinderConfig = serde_json::from_str(r#"{"max_search_distance": 7}"#).unwrap();
        assert_eq!(back.max_search_distance, 7);
        assert!(back.allow_diagonal_movement);
    }
}
