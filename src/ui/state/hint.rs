// SPDX-License-Identifier: MPL-2.0
//! Drag hint overlay state.
//!
//! The hint is the small "drag to rotate" indicator layered over the mount
//! element. It is shown when the viewer appears, fades out on its own after
//! a timeout and disappears at once on the first press. The host owns the
//! clock: it calls [`DragHint::tick`] from its own timer or frame loop.

use std::time::Instant;

use crate::domain::ui::HintTimeout;

/// Visibility state of the drag hint overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragHint {
    timeout: HintTimeout,
    shown_at: Instant,
    visible: bool,
}

impl DragHint {
    /// Shows the hint starting at `shown_at`.
    #[must_use]
    pub fn new(timeout: HintTimeout, shown_at: Instant) -> Self {
        Self {
            timeout,
            shown_at,
            visible: true,
        }
    }

    /// Creates an already hidden hint, for hosts that disabled it.
    #[must_use]
    pub fn hidden(timeout: HintTimeout, now: Instant) -> Self {
        Self {
            timeout,
            shown_at: now,
            visible: false,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Hides the hint once its timeout has elapsed.
    ///
    /// Returns `true` when this call hid it.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.visible && now.saturating_duration_since(self.shown_at) >= self.timeout.as_duration()
        {
            self.visible = false;
            return true;
        }
        false
    }

    /// Hides the hint immediately in response to a press.
    ///
    /// Returns `true` when this call hid it.
    pub fn on_pointer_down(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn hint_starts_visible() {
        let hint = DragHint::new(HintTimeout::default(), Instant::now());
        assert!(hint.is_visible());
    }

    #[test]
    fn tick_before_timeout_keeps_hint() {
        let start = Instant::now();
        let mut hint = DragHint::new(HintTimeout::new(3_000), start);

        assert!(!hint.tick(start + Duration::from_millis(2_999)));
        assert!(hint.is_visible());
    }

    #[test]
    fn tick_after_timeout_hides_hint_once() {
        let start = Instant::now();
        let mut hint = DragHint::new(HintTimeout::new(3_000), start);

        assert!(hint.tick(start + Duration::from_millis(3_000)));
        assert!(!hint.is_visible());
        assert!(!hint.tick(start + Duration::from_secs(10)));
    }

    #[test]
    fn pointer_down_hides_immediately() {
        let start = Instant::now();
        let mut hint = DragHint::new(HintTimeout::default(), start);

        assert!(hint.on_pointer_down());
        assert!(!hint.is_visible());
        assert!(!hint.on_pointer_down());
        assert!(!hint.tick(start + Duration::from_secs(60)));
    }

    #[test]
    fn hidden_hint_never_shows() {
        let mut hint = DragHint::hidden(HintTimeout::default(), Instant::now());
        assert!(!hint.is_visible());
        assert!(!hint.on_pointer_down());
    }
}
