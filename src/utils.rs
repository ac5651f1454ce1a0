//! Assorted numeric helpers shared by the evaluator and the search.

/// Slack used when comparing adjustment ratios against their limits.
///
/// Ratios are quotients of integral lengths by fractional budgets
/// (`0.3 * spaces`), so a ratio that is mathematically `-1` may come out a
/// hair beyond it. Limits are inclusive within this slack.
pub const RATIO_EPSILON: f64 = 1e-9;

/// `value >= limit`, inclusive within [`RATIO_EPSILON`].
#[inline]
pub fn at_least(value: f64, limit: f64) -> bool {
    value >= limit - RATIO_EPSILON
}

/// `value <= limit`, inclusive within [`RATIO_EPSILON`].
#[inline]
pub fn at_most(value: f64, limit: f64) -> bool {
    value <= limit + RATIO_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_inclusive() {
        assert!(at_least(-1.0, -1.0));
        assert!(at_most(2.0, 2.0));
        // -0.9 / (0.3 * 3) is not exactly -1 in binary floating point.
        let ratio = -0.9 / (0.3 * 3.0);
        assert!(at_least(ratio, -1.0));
    }

    #[test]
    fn infinities_stay_out_of_range() {
        assert!(!at_least(f64::NEG_INFINITY, -1.0));
        assert!(!at_most(f64::INFINITY, 1e9));
        assert!(at_most(f64::NEG_INFINITY, 0.0));
    }

    #[test]
    fn clear_violations_rejected() {
        assert!(!at_least(-1.01, -1.0));
        assert!(!at_most(5.001, 5.0));
    }
}
