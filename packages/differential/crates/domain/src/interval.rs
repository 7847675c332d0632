use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed `[low, high]` pair of probabilities.
///
/// Frequency ranges read from the catalog always satisfy `0 <= low <= high <= 1`
/// (enforced by [`crate::Symptom::new`]). Posterior intervals produced by the
/// ranking engine carry no such guarantee: the naive independence assumption
/// can push either bound outside the unit interval.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Interval {
    pub low: f64,
    pub high: f64,
}

impl Interval {
    pub const ZERO: Interval = Interval {
        low: 0.0,
        high: 0.0,
    };

    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// A degenerate interval for a single-valued frequency.
    pub fn point(value: f64) -> Self {
        Self {
            low: value,
            high: value,
        }
    }

    pub fn midpoint(&self) -> f64 {
        (self.low + self.high) / 2.0
    }

    pub fn is_degenerate(&self) -> bool {
        self.low == self.high
    }

    /// True when both bounds are valid probabilities.
    pub fn is_within_unit(&self) -> bool {
        (0.0..=1.0).contains(&self.low) && (0.0..=1.0).contains(&self.high)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint() {
        assert_eq!(Interval::new(0.2, 0.6).midpoint(), 0.4);
        assert_eq!(Interval::ZERO.midpoint(), 0.0);
    }

    #[test]
    fn test_unit_bounds() {
        assert!(Interval::new(0.0, 1.0).is_within_unit());
        assert!(!Interval::new(0.5, 1.5).is_within_unit());
        assert!(!Interval::new(-0.1, 0.5).is_within_unit());
        assert!(!Interval::new(f64::NAN, 0.5).is_within_unit());
    }

    #[test]
    fn test_point_is_degenerate() {
        let p = Interval::point(0.2);
        assert!(p.is_degenerate());
        assert_eq!(p.to_string(), "0.2 - 0.2");
    }
}
