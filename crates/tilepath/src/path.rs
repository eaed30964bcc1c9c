use tilepath_core::Point;

/// One tile of a [`Path`] with the cumulative cost of reaching it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub pos: Point,
    pub cost: f32,
}

impl Step {
    #[inline]
    pub fn x(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.pos.y
    }
}

/// A path found by the pathfinder, from the start tile to the target tile
/// inclusive.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    steps: Vec<Step>,
}

impl Path {
    /// Build a path from steps listed target-first.
    pub(crate) fn from_reversed(mut steps: Vec<Step>) -> Self {
        steps.reverse();
        Self { steps }
    }

    /// Number of steps, including the start tile.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The step at `index`, if any.
    #[inline]
    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    #[inline]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Positions along the path, start first.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.steps.iter().map(|s| s.pos)
    }

    /// Whether the path passes through `p`.
    pub fn contains(&self, p: Point) -> bool {
        self.steps.iter().any(|s| s.pos == p)
    }

    /// Cost of the whole path (the cumulative cost of its last step).
    pub fn total_cost(&self) -> f32 {
        self.steps.last().map_or(0.0, |s| s.cost)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Path {
        Path::from_reversed(vec![
            Step {
                pos: Point::new(2, 0),
                cost: 2.0,
            },
            Step {
                pos: Point::new(1, 0),
                cost: 1.0,
            },
            Step {
                pos: Point::new(0, 0),
                cost: 0.0,
            },
        ])
    }

    #[test]
    fn runs_start_to_target() {
        let path = sample();
        assert_eq!(path.len(), 3);
        assert_eq!(path.step(0).map(Step::x), Some(0));
        assert_eq!(path.step(2).map(Step::x), Some(2));
        assert_eq!(path.step(3), None);
        assert_eq!(path.total_cost(), 2.0);
        let pts: Vec<_> = path.points().collect();
        assert_eq!(pts, vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]);
    }

    #[test]
    fn contains_and_iter() {
        let path = sample();
        assert!(path.contains(Point::new(1, 0)));
        assert!(!path.contains(Point::new(1, 1)));
        let costs: Vec<f32> = (&path).into_iter().map(|s| s.cost).collect();
        assert_eq!(costs, vec![0.0, 1.0, 2.0]);
    }
}
