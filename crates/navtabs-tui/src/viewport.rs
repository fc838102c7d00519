//! Horizontal scroll viewport executing the strip's scroll requests.

use std::time::{Duration, Instant};

use navtabs_core::animation::{AnimatedChannel, EasingType};
use navtabs_core::StripConfig;
use tracing::trace;

/// Scroll offset of the tab row inside its viewport, in layout units.
#[derive(Debug, Clone)]
pub struct ScrollViewport {
    offset: AnimatedChannel<f64>,
    max_offset: f64,
    duration: Duration,
    easing: EasingType,
}

impl Default for ScrollViewport {
    fn default() -> Self {
        Self::new(&StripConfig::default())
    }
}

impl ScrollViewport {
    pub fn new(config: &StripConfig) -> Self {
        Self {
            offset: AnimatedChannel::new(0.0),
            max_offset: 0.0,
            duration: Duration::from_millis(config.animation_duration_ms),
            easing: config.easing,
        }
    }

    /// Update scroll bounds after a layout pass
    pub fn set_bounds(&mut self, row_width: f64, viewport_width: f64) {
        self.max_offset = (row_width - viewport_width).max(0.0);
        let target = self.offset.target();
        if target > self.max_offset {
            self.offset.snap_to(self.max_offset);
        }
    }

    pub fn max_offset(&self) -> f64 {
        self.max_offset
    }

    /// Scroll to `x`, clamped to the scrollable range
    pub fn scroll_to(&mut self, x: f64, animated: bool, now: Instant) {
        let target = x.clamp(0.0, self.max_offset);
        trace!(requested = x, target, animated, "Viewport scroll");
        if animated && self.duration > Duration::ZERO {
            self.offset.animate_to(target, now, self.duration, self.easing);
        } else {
            self.offset.snap_to(target);
        }
    }

    /// Current offset at `now`
    pub fn offset_at(&self, now: Instant) -> f64 {
        self.offset.value_at(now)
    }

    pub fn target(&self) -> f64 {
        self.offset.target()
    }

    pub fn is_animating(&self) -> bool {
        self.offset.is_animating()
    }

    /// Advance the scroll animation
    pub fn tick(&mut self, now: Instant) {
        self.offset.tick(now);
    }

    pub fn reset(&mut self) {
        self.offset.snap_to(0.0);
        self.max_offset = 0.0;
    }
}
