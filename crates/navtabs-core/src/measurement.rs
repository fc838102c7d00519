//! Layout measurement tracker and scroll step calculator.
//!
//! The host reports container widths whenever it finishes a layout pass, in no
//! particular order and possibly repeatedly. The tracker records them and
//! computes the scroll step the first time both widths are usable. After that
//! the step is frozen for the rest of the mount; only [`MeasurementState::reset`]
//! (a remount) brings it back to [`ScrollStep::Unmeasured`].

use tracing::debug;

/// Compute-once state of the scroll step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ScrollStep {
    /// Widths not yet known (or not yet usable)
    #[default]
    Unmeasured,
    /// Frozen for the rest of the mount
    Computed { step: f64 },
}

impl ScrollStep {
    pub fn value(&self) -> Option<f64> {
        match self {
            ScrollStep::Unmeasured => None,
            ScrollStep::Computed { step } => Some(*step),
        }
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, ScrollStep::Computed { .. })
    }
}

/// Result of the one-shot overflow computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollGeometry {
    pub step: f64,
    pub scroll_enabled: bool,
}

/// Derive the per-tab scroll increment and whether the row overflows.
///
/// Assumes uniform tab widths: the overflow is split evenly across tabs.
/// Returns `None` when there are no tabs.
pub fn compute_scroll_step(
    tab_row_width: f64,
    viewport_width: f64,
    tab_count: usize,
) -> Option<ScrollGeometry> {
    if tab_count == 0 {
        return None;
    }
    Some(ScrollGeometry {
        step: (tab_row_width - viewport_width) / tab_count as f64,
        scroll_enabled: tab_row_width > viewport_width,
    })
}

/// A width is usable once it has been reported as a positive finite number.
/// Zero means the element is not visible yet.
fn usable(width: Option<f64>) -> Option<f64> {
    width.filter(|w| w.is_finite() && *w > 0.0)
}

/// Geometry accumulated from host layout events.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementState {
    pub tab_row_width: Option<f64>,
    pub viewport_width: Option<f64>,
    pub scroll_step: ScrollStep,
    pub scroll_enabled: bool,
}

impl Default for MeasurementState {
    fn default() -> Self {
        Self {
            tab_row_width: None,
            viewport_width: None,
            scroll_step: ScrollStep::Unmeasured,
            scroll_enabled: true,
        }
    }
}

impl MeasurementState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the tab row width. Returns the geometry if this report
    /// completed the one-time step computation.
    pub fn on_tab_row_measured(&mut self, size: f64, tab_count: usize) -> Option<ScrollGeometry> {
        self.tab_row_width = Some(size);
        self.try_compute(tab_count)
    }

    /// Record the viewport width. Same trigger as [`Self::on_tab_row_measured`].
    pub fn on_viewport_measured(&mut self, size: f64, tab_count: usize) -> Option<ScrollGeometry> {
        self.viewport_width = Some(size);
        self.try_compute(tab_count)
    }

    fn try_compute(&mut self, tab_count: usize) -> Option<ScrollGeometry> {
        if self.scroll_step.is_computed() {
            return None;
        }
        let (row, viewport) = (usable(self.tab_row_width)?, usable(self.viewport_width)?);
        let geometry = compute_scroll_step(row, viewport, tab_count)?;

        self.scroll_step = ScrollStep::Computed { step: geometry.step };
        self.scroll_enabled = geometry.scroll_enabled;
        debug!(
            row,
            viewport,
            tab_count,
            step = geometry.step,
            scroll_enabled = geometry.scroll_enabled,
            "Scroll step computed"
        );
        Some(geometry)
    }

    /// Step to use for selection scrolling: `Some` only when computed and the
    /// row overflows.
    pub fn active_step(&self) -> Option<f64> {
        if self.scroll_enabled {
            self.scroll_step.value()
        } else {
            None
        }
    }

    /// Forget everything, as a fresh mount would.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = MeasurementState::new();
        assert_eq!(state.tab_row_width, None);
        assert_eq!(state.viewport_width, None);
        assert_eq!(state.scroll_step, ScrollStep::Unmeasured);
        assert!(state.scroll_enabled);
        assert_eq!(state.active_step(), None);
    }

    #[test]
    fn test_computes_when_second_width_arrives() {
        let mut state = MeasurementState::new();
        assert!(state.on_viewport_measured(300.0, 5).is_none());
        let geometry = state.on_tab_row_measured(500.0, 5).unwrap();
        assert!((geometry.step - 40.0).abs() < 1e-9);
        assert!(geometry.scroll_enabled);
        assert_eq!(state.scroll_step, ScrollStep::Computed { step: 40.0 });
    }

    #[test]
    fn test_never_recomputed() {
        let mut state = MeasurementState::new();
        state.on_tab_row_measured(500.0, 5);
        state.on_viewport_measured(300.0, 5);

        assert!(state.on_tab_row_measured(900.0, 5).is_none());
        assert!(state.on_viewport_measured(100.0, 5).is_none());
        assert_eq!(state.scroll_step.value(), Some(40.0));
        assert!(state.scroll_enabled);
        // Widths are still tracked
        assert_eq!(state.tab_row_width, Some(900.0));
        assert_eq!(state.viewport_width, Some(100.0));
    }

    #[test]
    fn test_zero_width_does_not_compute() {
        let mut state = MeasurementState::new();
        state.on_tab_row_measured(0.0, 3);
        assert!(state.on_viewport_measured(300.0, 3).is_none());
        assert_eq!(state.scroll_step, ScrollStep::Unmeasured);

        let geometry = state.on_tab_row_measured(200.0, 3).unwrap();
        assert!(!geometry.scroll_enabled);
        assert!((geometry.step + 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_tabs_no_step() {
        assert!(compute_scroll_step(100.0, 50.0, 0).is_none());
        let mut state = MeasurementState::new();
        state.on_tab_row_measured(100.0, 0);
        assert!(state.on_viewport_measured(50.0, 0).is_none());
    }

    #[test]
    fn test_reset() {
        let mut state = MeasurementState::new();
        state.on_tab_row_measured(200.0, 3);
        state.on_viewport_measured(300.0, 3);
        assert!(!state.scroll_enabled);

        state.reset();
        assert_eq!(state, MeasurementState::default());
    }
}
