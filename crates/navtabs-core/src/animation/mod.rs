//! Tween primitives and the underline animator
//!
//! # Layers
//!
//! - `easing` - Pure easing curves mapping progress [0, 1] to [0, 1]
//! - `timing` - Progress and interpolation helpers over an injected clock
//! - `channel` - One animatable value: Idle / Animating / Settled with supersede
//! - `underline` - Two channels (offset, width) run as one parallel group
//!
//! Time is always passed in by the caller, so the same code drives a real
//! frame loop and deterministic tests.
//!
//! # Usage
//!
//! ```ignore
//! use std::time::Instant;
//! use navtabs_core::animation::UnderlineAnimator;
//!
//! let mut underline = UnderlineAnimator::with_defaults();
//! let now = Instant::now();
//! underline.move_underline(50.0, 80.0, now);
//!
//! // Every frame:
//! let completed = underline.tick(Instant::now());
//! let current = underline.sample(Instant::now());
//! ```

pub mod channel;
pub mod easing;
pub mod timing;

pub mod underline;

pub use channel::{Animatable, AnimatedChannel, ChannelPhase, Tween};
pub use easing::{EasingType, EasingTypeExt};
pub use underline::{
    AnimatedUnderlineState, GroupCompleted, TweenSpec, UnderlineAnimator, UnderlineTransition,
};
