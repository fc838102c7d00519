//! A single animatable value.
//!
//! Each channel is a small state machine:
//!
//! ```text
//!   Idle ──animate_to──▶ Animating ──tick (elapsed ≥ duration)──▶ Settled
//!                         │    ▲                                    │
//!                         └────┘ animate_to (supersede)             │
//!                          ▲────────────────animate_to──────────────┘
//! ```
//!
//! Superseding a running tween starts the new one from the value the old one
//! had reached at that instant, so interrupted transitions compose without a
//! jump.

use std::time::{Duration, Instant};

use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp, progress};
use crate::geometry::Vec2;

/// Values a tween can interpolate.
pub trait Animatable: Copy + PartialEq + std::fmt::Debug {
    fn interpolate(from: Self, to: Self, t: f64) -> Self;
}

impl Animatable for f64 {
    #[inline]
    fn interpolate(from: Self, to: Self, t: f64) -> Self {
        lerp(from, to, t)
    }
}

impl Animatable for Vec2 {
    #[inline]
    fn interpolate(from: Self, to: Self, t: f64) -> Self {
        Vec2 {
            x: lerp(from.x, to.x, t),
            y: lerp(from.y, to.y, t),
        }
    }
}

/// A time-bounded interpolation toward `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T> {
    pub from: T,
    pub to: T,
    pub start: Instant,
    pub duration: Duration,
    pub easing: EasingType,
}

impl<T: Animatable> Tween<T> {
    pub fn value_at(&self, now: Instant) -> T {
        if is_complete(self.start, now, self.duration) {
            return self.to;
        }
        let t = progress(self.start, now, self.duration);
        T::interpolate(self.from, self.to, self.easing.apply(t))
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        is_complete(self.start, now, self.duration)
    }
}

/// Where a channel is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChannelPhase<T> {
    /// Never animated; holds its initial value
    Idle { value: T },
    /// Tween in flight
    Animating { tween: Tween<T> },
    /// Last tween finished; value is stable
    Settled { value: T },
}

/// One long-lived animatable cell.
#[derive(Debug, Clone)]
pub struct AnimatedChannel<T> {
    phase: ChannelPhase<T>,
}

impl<T: Animatable> AnimatedChannel<T> {
    pub fn new(initial: T) -> Self {
        Self {
            phase: ChannelPhase::Idle { value: initial },
        }
    }

    pub fn phase(&self) -> &ChannelPhase<T> {
        &self.phase
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, ChannelPhase::Animating { .. })
    }

    /// Current (interpolated) value
    pub fn value_at(&self, now: Instant) -> T {
        match &self.phase {
            ChannelPhase::Idle { value } | ChannelPhase::Settled { value } => *value,
            ChannelPhase::Animating { tween } => tween.value_at(now),
        }
    }

    /// Value the channel is heading to (or resting at)
    pub fn target(&self) -> T {
        match &self.phase {
            ChannelPhase::Idle { value } | ChannelPhase::Settled { value } => *value,
            ChannelPhase::Animating { tween } => tween.to,
        }
    }

    /// Start a tween toward `target`, superseding any tween in flight.
    ///
    /// Returns the tween that was started. The start value is whatever the
    /// channel shows at `now`, never a reset.
    pub fn animate_to(
        &mut self,
        target: T,
        now: Instant,
        duration: Duration,
        easing: EasingType,
    ) -> Tween<T> {
        let tween = Tween {
            from: self.value_at(now),
            to: target,
            start: now,
            duration,
            easing,
        };
        self.phase = ChannelPhase::Animating { tween };
        tween
    }

    /// Jump to `value` without animating.
    pub fn snap_to(&mut self, value: T) {
        self.phase = ChannelPhase::Settled { value };
    }

    /// Advance to `now`. Returns `true` on the tick that settles the channel.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let ChannelPhase::Animating { tween } = &self.phase {
            if tween.is_complete(now) {
                self.phase = ChannelPhase::Settled { value: tween.to };
                return true;
            }
        }
        false
    }
}

impl<T: Animatable + Default> Default for AnimatedChannel<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
