//! Scroll synchronizer: where to scroll when a tab is selected.

use serde::Serialize;

use crate::measurement::MeasurementState;

/// A fire-and-forget scroll request for the host viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollRequest {
    pub x: f64,
    pub animated: bool,
}

/// Scroll offset for the tab at `index`.
///
/// Linear in the index, with one extra step past the middle of the row so
/// late tabs end up closer to the centre.
pub fn scroll_target(step: f64, index: usize, tab_count: usize) -> f64 {
    let base = step * index as f64;
    if index as f64 > tab_count as f64 / 2.0 {
        base + step
    } else {
        base
    }
}

/// Scroll request for selecting `index`, or `None` when the row fits the
/// viewport (or has not been measured yet).
pub fn on_tab_selected(
    measurement: &MeasurementState,
    index: usize,
    tab_count: usize,
) -> Option<ScrollRequest> {
    let step = measurement.active_step()?;
    Some(ScrollRequest {
        x: scroll_target(step, index, tab_count),
        animated: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measured(row: f64, viewport: f64, tabs: usize) -> MeasurementState {
        let mut state = MeasurementState::new();
        state.on_tab_row_measured(row, tabs);
        state.on_viewport_measured(viewport, tabs);
        state
    }

    #[test]
    fn test_target_before_and_after_midpoint() {
        assert_eq!(scroll_target(40.0, 0, 5), 0.0);
        assert_eq!(scroll_target(40.0, 2, 5), 80.0);
        // 3 > 2.5
        assert_eq!(scroll_target(40.0, 3, 5), 160.0);
        assert_eq!(scroll_target(40.0, 4, 5), 200.0);
        // Even count: index == half is not past the midpoint
        assert_eq!(scroll_target(10.0, 2, 4), 20.0);
        assert_eq!(scroll_target(10.0, 3, 4), 40.0);
    }

    #[test]
    fn test_overflowing_row_scrolls() {
        let state = measured(500.0, 300.0, 5);
        assert_eq!(
            on_tab_selected(&state, 4, 5),
            Some(ScrollRequest {
                x: 200.0,
                animated: true
            })
        );
    }

    #[test]
    fn test_fitting_row_never_scrolls() {
        let state = measured(200.0, 300.0, 3);
        for index in 0..3 {
            assert_eq!(on_tab_selected(&state, index, 3), None);
        }
    }

    #[test]
    fn test_unmeasured_does_not_scroll() {
        let state = MeasurementState::new();
        assert!(state.scroll_enabled);
        assert_eq!(on_tab_selected(&state, 1, 5), None);
    }
}
