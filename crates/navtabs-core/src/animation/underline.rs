//! Underline animator: offset and width run as one parallel group.
//!
//! Both channels are long-lived. A new move supersedes the group in flight;
//! each channel continues from wherever it was at that instant. The group
//! reports completion once, and only when both tweens have finished.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, trace};

use super::channel::{AnimatedChannel, ChannelPhase};
use super::easing::EasingType;
use crate::config::StripConfig;
use crate::geometry::Vec2;

/// Default transition duration, in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 500;

/// Current geometry of the underline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AnimatedUnderlineState {
    pub offset: Vec2,
    pub width: f64,
}

/// One tween request as issued to the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TweenSpec<T> {
    pub from: T,
    pub to: T,
    pub duration_ms: u64,
    /// Whether the host may run this tween off the UI thread
    pub native_driver: bool,
}

/// A parallel group of the two underline tweens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnderlineTransition {
    pub group: u64,
    pub offset: TweenSpec<Vec2>,
    pub width: TweenSpec<f64>,
}

/// Emitted once per group, when both tweens have finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupCompleted {
    pub group: u64,
}

#[derive(Debug, Clone, Copy)]
struct RunningGroup {
    id: u64,
    offset_done: bool,
    width_done: bool,
}

#[derive(Debug, Clone)]
pub struct UnderlineAnimator {
    offset: AnimatedChannel<Vec2>,
    width: AnimatedChannel<f64>,
    group: Option<RunningGroup>,
    next_group: u64,
    duration: Duration,
    easing: EasingType,
    use_native_driver: bool,
}

impl Default for UnderlineAnimator {
    fn default() -> Self {
        Self::new(&StripConfig::default())
    }
}

impl UnderlineAnimator {
    pub fn new(config: &StripConfig) -> Self {
        Self {
            offset: AnimatedChannel::new(Vec2::ZERO),
            width: AnimatedChannel::new(0.0),
            group: None,
            next_group: 1,
            duration: Duration::from_millis(config.animation_duration_ms),
            easing: config.easing,
            use_native_driver: config.use_native_driver,
        }
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self::default()
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Check if a group is currently in flight
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.group.is_some()
    }

    /// Whether the underline has ever been given geometry
    pub fn is_idle(&self) -> bool {
        matches!(self.width.phase(), ChannelPhase::Idle { .. })
    }

    pub fn offset_phase(&self) -> &ChannelPhase<Vec2> {
        self.offset.phase()
    }

    pub fn width_phase(&self) -> &ChannelPhase<f64> {
        self.width.phase()
    }

    /// Interpolated geometry at `now`
    pub fn sample(&self, now: Instant) -> AnimatedUnderlineState {
        AnimatedUnderlineState {
            offset: self.offset.value_at(now),
            width: self.width.value_at(now),
        }
    }

    /// Final geometry of the current (or last) transition
    pub fn target(&self) -> AnimatedUnderlineState {
        AnimatedUnderlineState {
            offset: self.offset.target(),
            width: self.width.target(),
        }
    }

    /// Start moving toward the active tab's measured geometry.
    ///
    /// A zero (or non-finite) width means the tab is not laid out yet and the
    /// call changes nothing.
    pub fn move_underline(
        &mut self,
        offset: f64,
        width: f64,
        now: Instant,
    ) -> Option<UnderlineTransition> {
        if width == 0.0 || !width.is_finite() || !offset.is_finite() {
            trace!(offset, width, "Ignoring underline move to degenerate geometry");
            return None;
        }

        if let Some(previous) = self.group {
            debug!(group = previous.id, "Superseding underline transition");
        }

        let offset_tween =
            self.offset
                .animate_to(Vec2::horizontal(offset), now, self.duration, self.easing);
        let width_tween = self.width.animate_to(width, now, self.duration, self.easing);

        let id = self.next_group;
        self.next_group += 1;
        self.group = Some(RunningGroup {
            id,
            offset_done: false,
            width_done: false,
        });

        let duration_ms = self.duration.as_millis() as u64;
        debug!(group = id, offset, width, duration_ms, "Underline transition started");

        Some(UnderlineTransition {
            group: id,
            offset: TweenSpec {
                from: offset_tween.from,
                to: offset_tween.to,
                duration_ms,
                native_driver: self.use_native_driver,
            },
            width: TweenSpec {
                from: width_tween.from,
                to: width_tween.to,
                duration_ms,
                // Layout properties cannot be driven natively
                native_driver: false,
            },
        })
    }

    /// Advance both channels to `now`.
    ///
    /// Returns the completed group on the tick where the second of the two
    /// tweens finishes.
    pub fn tick(&mut self, now: Instant) -> Option<GroupCompleted> {
        let mut group = self.group?;
        group.offset_done |= self.offset.tick(now);
        group.width_done |= self.width.tick(now);

        if group.offset_done && group.width_done {
            self.group = None;
            debug!(group = group.id, "Underline transition complete");
            Some(GroupCompleted { group: group.id })
        } else {
            self.group = Some(group);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn linear() -> UnderlineAnimator {
        UnderlineAnimator::new(&StripConfig {
            easing: EasingType::Linear,
            ..Default::default()
        })
    }

    #[test]
    fn test_starts_invisible_and_idle() {
        let animator = UnderlineAnimator::with_defaults();
        assert!(animator.is_idle());
        assert!(!animator.is_animating());
        assert_eq!(animator.sample(Instant::now()), AnimatedUnderlineState::default());
        assert_eq!(animator.duration(), ms(DEFAULT_DURATION_MS));
    }

    #[test]
    fn test_zero_width_is_noop() {
        let mut animator = UnderlineAnimator::with_defaults();
        assert!(animator.move_underline(50.0, 0.0, Instant::now()).is_none());
        assert!(animator.is_idle());
        assert!(!animator.is_animating());
        assert_eq!(animator.target(), AnimatedUnderlineState::default());
    }

    #[test]
    fn test_group_targets_and_completes_together() {
        let t0 = Instant::now();
        let mut animator = UnderlineAnimator::with_defaults();
        let transition = animator.move_underline(50.0, 80.0, t0).unwrap();

        assert_eq!(transition.offset.to, Vec2::new(50.0, 0.0));
        assert_eq!(transition.width.to, 80.0);
        assert_eq!(transition.offset.duration_ms, 500);
        assert_eq!(transition.width.duration_ms, 500);
        assert!(!transition.width.native_driver);

        assert!(animator.tick(t0 + ms(250)).is_none());
        assert!(animator.offset.is_animating());
        assert!(animator.width.is_animating());

        let done = animator.tick(t0 + ms(500));
        assert_eq!(done, Some(GroupCompleted { group: transition.group }));
        assert_eq!(
            animator.width_phase(),
            &ChannelPhase::Settled { value: 80.0 }
        );
        assert_eq!(
            animator.offset_phase(),
            &ChannelPhase::Settled { value: Vec2::new(50.0, 0.0) }
        );
        assert!(animator.tick(t0 + ms(600)).is_none());
    }

    #[test]
    fn test_native_driver_only_on_offset() {
        let mut animator = UnderlineAnimator::new(&StripConfig {
            use_native_driver: true,
            ..Default::default()
        });
        let transition = animator.move_underline(1.0, 2.0, Instant::now()).unwrap();
        assert!(transition.offset.native_driver);
        assert!(!transition.width.native_driver);
    }

    #[test]
    fn test_supersede_continues_from_interpolated_values() {
        let t0 = Instant::now();
        let mut animator = linear();
        let first = animator.move_underline(100.0, 40.0, t0).unwrap();

        let second = animator.move_underline(0.0, 80.0, t0 + ms(250)).unwrap();
        assert_ne!(first.group, second.group);
        assert!((second.offset.from.x - 50.0).abs() < 1e-6);
        assert!((second.width.from - 20.0).abs() < 1e-6);
        assert_eq!(second.offset.from.y, 0.0);

        // The superseded group never reports completion
        assert!(animator.tick(t0 + ms(500)).is_none());
        assert_eq!(
            animator.tick(t0 + ms(750)),
            Some(GroupCompleted { group: second.group })
        );
        assert_eq!(
            animator.sample(t0 + ms(800)),
            AnimatedUnderlineState {
                offset: Vec2::new(0.0, 0.0),
                width: 80.0
            }
        );
    }

    #[test]
    fn test_move_after_settle_starts_from_settled() {
        let t0 = Instant::now();
        let mut animator = linear();
        animator.move_underline(10.0, 10.0, t0).unwrap();
        animator.tick(t0 + ms(500));

        let next = animator.move_underline(30.0, 20.0, t0 + ms(1000)).unwrap();
        assert_eq!(next.offset.from, Vec2::new(10.0, 0.0));
        assert_eq!(next.width.from, 10.0);
    }
}
