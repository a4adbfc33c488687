// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles the press-and-drag interaction that turns pointer travel along one
//! axis into whole frame steps.

use crate::domain::ui::Sensitivity;

/// Direction of a single frame step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Forward,
    Backward,
}

impl Step {
    /// Returns `1` or `-1`.
    #[must_use]
    pub fn signum(self) -> i64 {
        match self {
            Step::Forward => 1,
            Step::Backward => -1,
        }
    }
}

/// Whole frame steps drained from the accumulated distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Steps {
    pub direction: Step,
    /// Number of steps, saturating at `u64::MAX`.
    pub count: u64,
}

/// Relative slack when dividing distance by sensitivity, so a drag that
/// lands on an exact multiple is not lost to rounding.
const STEP_TOLERANCE: f64 = 1e-9;

/// Manages press-and-drag state
///
/// The origin and accumulated distance only exist while a drag is active;
/// ending the drag drops them. Distances are kept in `f64` so pixel-sized
/// remainders survive large coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Last tracked coordinate on the drag axis.
        origin: f64,
        /// Signed distance travelled since the last frame step.
        accumulated: f64,
    },
}

impl DragState {
    /// Starts a drag operation at `coordinate`
    ///
    /// Pressing again while already dragging re-anchors the origin.
    pub fn start(&mut self, coordinate: f32) {
        *self = DragState::Dragging {
            origin: f64::from(coordinate),
            accumulated: 0.0,
        };
    }

    /// Stops the drag operation, discarding any partial distance
    pub fn stop(&mut self) {
        *self = DragState::Idle;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Distance accumulated towards the next step, `None` when idle.
    #[must_use]
    pub fn accumulated(&self) -> Option<f32> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { accumulated, .. } => Some(*accumulated as f32),
        }
    }

    /// Records cursor movement to `coordinate`.
    ///
    /// Returns the delta that was added, or `None` when no drag is active.
    pub fn track(&mut self, coordinate: f32) -> Option<f32> {
        match self {
            DragState::Idle => None,
            DragState::Dragging {
                origin,
                accumulated,
            } => {
                let coordinate = f64::from(coordinate);
                let delta = coordinate - *origin;
                *accumulated += delta;
                *origin = coordinate;
                Some(delta as f32)
            }
        }
    }

    /// Consumes every whole sensitivity worth of accumulated distance.
    ///
    /// The remainder stays accumulated for the next movement. Returns `None`
    /// when less than one step is pending.
    pub fn take_steps(&mut self, sensitivity: Sensitivity) -> Option<Steps> {
        let DragState::Dragging { accumulated, .. } = self else {
            return None;
        };
        let threshold = f64::from(sensitivity.pixels());
        let whole = (accumulated.abs() / threshold + STEP_TOLERANCE).trunc();
        if whole < 1.0 {
            return None;
        }

        let direction = if *accumulated > 0.0 {
            Step::Forward
        } else {
            Step::Backward
        };
        *accumulated -= whole.copysign(*accumulated) * threshold;
        if accumulated.abs() < threshold * STEP_TOLERANCE {
            *accumulated = 0.0;
        }

        Some(Steps {
            direction,
            // Float-to-int casts saturate.
            count: whole as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sensitivity(pixels: f32) -> Sensitivity {
        Sensitivity::new(pixels).expect("valid sensitivity")
    }

    fn drain(state: &mut DragState, pixels: f32) -> Option<Steps> {
        state.take_steps(sensitivity(pixels))
    }

    #[test]
    fn default_drag_state_is_idle() {
        let state = DragState::default();
        assert!(!state.is_dragging());
        assert!(state.accumulated().is_none());
    }

    #[test]
    fn start_drag_sets_origin_and_zero_distance() {
        let mut state = DragState::default();
        state.start(120.0);

        assert!(state.is_dragging());
        assert_eq!(
            state,
            DragState::Dragging {
                origin: 120.0,
                accumulated: 0.0,
            }
        );
    }

    #[test]
    fn stop_drag_discards_distance() {
        let mut state = DragState::default();
        state.start(0.0);
        state.track(42.0);
        state.stop();

        assert_eq!(state, DragState::Idle);
        assert!(state.accumulated().is_none());
    }

    #[test]
    fn track_is_ignored_when_idle() {
        let mut state = DragState::default();
        assert!(state.track(300.0).is_none());
        assert!(state.take_steps(sensitivity(1.0)).is_none());
    }

    #[test]
    fn track_accumulates_relative_movement() {
        let mut state = DragState::default();
        state.start(10.0);

        assert_eq!(state.track(40.0), Some(30.0));
        assert_eq!(state.track(25.0), Some(-15.0));
        assert_eq!(state.accumulated(), Some(15.0));
    }

    #[test]
    fn exact_sensitivity_produces_one_step() {
        let mut state = DragState::default();
        state.start(0.0);
        state.track(100.0);

        assert_eq!(
            drain(&mut state, 100.0),
            Some(Steps {
                direction: Step::Forward,
                count: 1,
            })
        );
        assert_eq!(state.accumulated(), Some(0.0));
    }

    #[test]
    fn one_pixel_short_produces_no_step() {
        let mut state = DragState::default();
        state.start(0.0);
        state.track(99.0);

        assert!(drain(&mut state, 100.0).is_none());
        assert_eq!(state.accumulated(), Some(99.0));
    }

    #[test]
    fn backward_drag_keeps_remainder() {
        let mut state = DragState::default();
        state.start(500.0);
        state.track(250.0);

        assert_eq!(
            drain(&mut state, 100.0),
            Some(Steps {
                direction: Step::Backward,
                count: 2,
            })
        );
        assert_eq!(state.accumulated(), Some(-50.0));
    }

    #[test]
    fn restart_resets_accumulated_distance() {
        let mut state = DragState::default();
        state.start(0.0);
        state.track(80.0);
        state.start(80.0);

        assert_eq!(state.accumulated(), Some(0.0));
    }

    #[test]
    fn tiny_sensitivity_drains_in_one_call() {
        let mut state = DragState::default();
        state.start(0.0);
        state.track(100.0);

        let steps = drain(&mut state, 0.5).expect("steps pending");
        assert_eq!(steps.count, 200);
        assert!(drain(&mut state, 0.5).is_none());

        state.track(200.0);
        let steps = drain(&mut state, 1e-6).expect("steps pending");
        assert!(steps.count > 99_000_000);
        assert!(state.accumulated().unwrap().abs() < 1e-6);
    }

    #[test]
    fn large_coordinates_keep_remainder() {
        let mut state = DragState::default();
        state.start(0.0);
        state.track(1.0e10);

        let steps = drain(&mut state, 300.0).expect("steps pending");
        assert_eq!(steps.count, 33_333_333);
        assert_eq!(state.accumulated(), Some(100.0));
    }

    #[test]
    fn fractional_sensitivity_reached_by_several_moves() {
        let mut state = DragState::default();
        state.start(0.0);
        state.track(0.1);
        state.track(0.2);
        assert!(drain(&mut state, 0.3).is_none());

        state.track(0.3);
        assert_eq!(drain(&mut state, 0.3).map(|steps| steps.count), Some(1));
        assert_eq!(state.accumulated(), Some(0.0));
    }
}
