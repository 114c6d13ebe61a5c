//! Scoring module - speed levels and the fall interval
//!
//! One point is scored per cleared row. Every `SCORE_PER_LEVEL` points raise the
//! level by one, and every level shortens the fall interval by `FALL_STEP_MS`
//! until it reaches the configured floor.

use crate::types::{BASE_FALL_MS, FALL_STEP_MS, SCORE_PER_LEVEL};

/// Speed level for a score.
pub fn level_for_score(score: u32) -> u32 {
    score / SCORE_PER_LEVEL
}

/// Fall interval in milliseconds for a score, never below `min_ms`.
///
/// # Examples
///
/// ```
/// use matrix_tetris_core::scoring::fall_interval_ms;
///
/// assert_eq!(fall_interval_ms(0, 50), 1000);
/// assert_eq!(fall_interval_ms(25, 50), 800);
/// assert_eq!(fall_interval_ms(95, 50), 100);
/// assert_eq!(fall_interval_ms(1000, 50), 50);
/// ```
pub fn fall_interval_ms(score: u32, min_ms: u64) -> u64 {
    let reduction = u64::from(level_for_score(score)) * FALL_STEP_MS;
    BASE_FALL_MS.saturating_sub(reduction).max(min_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_progression() {
        assert_eq!(level_for_score(0), 0);
        assert_eq!(level_for_score(9), 0);
        assert_eq!(level_for_score(10), 1);
        assert_eq!(level_for_score(123), 12);
    }

    #[test]
    fn test_interval_decreases_per_level() {
        assert_eq!(fall_interval_ms(0, 50), 1000);
        assert_eq!(fall_interval_ms(9, 50), 1000);
        assert_eq!(fall_interval_ms(10, 50), 900);
        assert_eq!(fall_interval_ms(90, 50), 100);
    }

    #[test]
    fn test_interval_is_monotonic_and_clamped() {
        // Past level 10 the interval stays at the floor instead of growing again.
        let mut prev = u64::MAX;
        for score in 0..500 {
            let interval = fall_interval_ms(score, 50);
            assert!(interval <= prev, "interval grew at score {score}");
            assert!(interval >= 50);
            prev = interval;
        }
        assert_eq!(fall_interval_ms(100, 50), 50);
        assert_eq!(fall_interval_ms(250, 50), 50);
    }

    #[test]
    fn test_custom_floor() {
        assert_eq!(fall_interval_ms(95, 150), 150);
        assert_eq!(fall_interval_ms(0, 150), 1000);
    }
}
