//! One-dimensional geometry reported by the host renderer.

use serde::{Deserialize, Serialize};

/// Horizontal position and extent of one laid-out element.
///
/// `offset` is relative to the tab row for tab items and ignored for the row
/// and the viewport, whose width is all that matters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutMetrics {
    pub offset: f64,
    pub size: f64,
}

impl LayoutMetrics {
    pub fn new(offset: f64, size: f64) -> Self {
        Self { offset, size }
    }

    /// Width-only metrics, used for containers.
    pub fn width(size: f64) -> Self {
        Self { offset: 0.0, size }
    }

    /// Right edge (`offset + size`)
    #[inline]
    pub fn end(&self) -> f64 {
        self.offset + self.size
    }
}

/// 2-D translation. The underline only ever moves along `x`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translation along the tab axis with the vertical component pinned to 0.
    pub fn horizontal(x: f64) -> Self {
        Self { x, y: 0.0 }
    }
}

/// Elements of the strip whose layout the host reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    /// The row containing every tab item (may be wider than the viewport)
    TabRow,
    /// The visible scroll window onto the row
    Viewport,
    /// The currently active tab item
    ActiveTab,
}
