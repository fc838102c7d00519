//! Time calculation utilities for tweens
//!
//! Same helpers as a wall-clock animator would use, except that `now` is an
//! argument. Callers pass `Instant::now()` in a frame loop, or a synthetic
//! instant in tests.

use std::time::{Duration, Instant};

/// Calculate animation progress (0.0 to 1.0) from start time and duration
///
/// # Returns
/// Progress value clamped to [0.0, 1.0]. A zero duration is always complete.
#[inline]
pub fn progress(start: Instant, now: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if animation is complete
#[inline]
pub fn is_complete(start: Instant, now: Instant, duration: Duration) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 1.0) - 100.0).abs() < 0.001);
        assert!((lerp(80.0, 20.0, 0.5) - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_progress() {
        let start = Instant::now();
        let d = Duration::from_millis(500);
        assert!((progress(start, start, d) - 0.0).abs() < 0.001);
        assert!((progress(start, start + Duration::from_millis(250), d) - 0.5).abs() < 0.001);
        assert!((progress(start, start + Duration::from_secs(2), d) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Instant::now();
        assert!((progress(start, start, Duration::ZERO) - 1.0).abs() < 0.001);
        assert!(is_complete(start, start, Duration::ZERO));
    }

    #[test]
    fn test_now_before_start_clamps() {
        let start = Instant::now() + Duration::from_millis(100);
        let now = start - Duration::from_millis(50);
        assert_eq!(progress(start, now, Duration::from_millis(100)), 0.0);
        assert!(!is_complete(start, now, Duration::from_millis(100)));
    }
}
