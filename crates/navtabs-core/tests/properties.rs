//! Property-based tests for the measurement and scroll invariants.

use std::time::{Duration, Instant};

use navtabs_core::animation::UnderlineAnimator;
use navtabs_core::measurement::MeasurementState;
use navtabs_core::scroll::{on_tab_selected, scroll_target};
use navtabs_core::ScrollStep;
use proptest::prelude::*;

// ===== Arbitrary Strategies =====

fn arb_width() -> impl Strategy<Value = f64> {
    1.0f64..5000.0
}

/// A later layout report: which container, and its new width
fn arb_report() -> impl Strategy<Value = (bool, f64)> {
    (any::<bool>(), 0.0f64..5000.0)
}

proptest! {
    #[test]
    fn step_is_overflow_split_evenly(
        tab_count in 1usize..50,
        row in arb_width(),
        viewport in arb_width(),
    ) {
        let mut state = MeasurementState::new();
        state.on_tab_row_measured(row, tab_count);
        state.on_viewport_measured(viewport, tab_count);

        let expected = (row - viewport) / tab_count as f64;
        prop_assert_eq!(state.scroll_step, ScrollStep::Computed { step: expected });
        prop_assert_eq!(state.scroll_enabled, row > viewport);
    }

    #[test]
    fn step_is_computed_exactly_once(
        tab_count in 1usize..50,
        row in arb_width(),
        viewport in arb_width(),
        reports in prop::collection::vec(arb_report(), 0..20),
    ) {
        let mut state = MeasurementState::new();
        state.on_viewport_measured(viewport, tab_count);
        state.on_tab_row_measured(row, tab_count);
        let frozen = (state.scroll_step, state.scroll_enabled);

        for (is_row, width) in reports {
            let recomputed = if is_row {
                state.on_tab_row_measured(width, tab_count)
            } else {
                state.on_viewport_measured(width, tab_count)
            };
            prop_assert!(recomputed.is_none());
        }
        prop_assert_eq!((state.scroll_step, state.scroll_enabled), frozen);
    }

    #[test]
    fn selection_target_biases_past_midpoint(
        tab_count in 1usize..50,
        row in arb_width(),
        viewport in arb_width(),
        pick in any::<prop::sample::Index>(),
    ) {
        let index = pick.index(tab_count);
        let mut state = MeasurementState::new();
        state.on_tab_row_measured(row, tab_count);
        state.on_viewport_measured(viewport, tab_count);

        let request = on_tab_selected(&state, index, tab_count);
        if row > viewport {
            let step = (row - viewport) / tab_count as f64;
            let expected = if index as f64 > tab_count as f64 / 2.0 {
                step * index as f64 + step
            } else {
                step * index as f64
            };
            let request = request.unwrap();
            prop_assert_eq!(request.x, expected);
            prop_assert_eq!(request.x, scroll_target(step, index, tab_count));
            prop_assert!(request.animated);
        } else {
            prop_assert!(request.is_none());
        }
    }

    #[test]
    fn zero_width_move_changes_nothing(offset in -1000.0f64..1000.0, after_ms in 0u64..1000) {
        let t0 = Instant::now();
        let mut animator = UnderlineAnimator::with_defaults();
        animator.move_underline(10.0, 20.0, t0);
        let before = animator.target();
        let was_animating = animator.is_animating();

        let now = t0 + Duration::from_millis(after_ms);
        prop_assert!(animator.move_underline(offset, 0.0, now).is_none());
        prop_assert_eq!(animator.target(), before);
        prop_assert_eq!(animator.is_animating(), was_animating);
    }
}
