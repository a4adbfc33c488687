// SPDX-License-Identifier: MPL-2.0
//! Frame-sequence viewer component.
//!
//! One [`Viewer`] owns one mount surface. The host feeds it pointer events
//! one at a time through [`Viewer::handle_event`]; every whole frame step a
//! drag produces shifts the surface background to the next frame.

use crate::domain::sprite::{FrameOffset, SpriteConfig, SpriteGeometry};
use crate::domain::ui::{DragAxis, Point, Sensitivity};
use crate::ui::state::{DragState, Steps};
use crate::ui::viewer::surface::{ListenerId, Surface};

/// Pointer input delivered by the host.
///
/// Mouse and touch input map to the same events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Button or finger went down over the mount element.
    Pressed(Point),
    /// Pointer moved over the tracking surface.
    Moved(Point),
    /// Button or finger was released.
    Released,
    /// Pointer left the tracking surface.
    Left,
}

/// One frame step and the background position it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameChange {
    pub frame: usize,
    pub offset: FrameOffset,
}

/// A sprite sheet viewer attached to a surface.
///
/// Created by [`attach`](super::attach).
#[derive(Debug)]
pub struct Viewer<S: Surface> {
    surface: S,
    config: SpriteConfig,
    geometry: SpriteGeometry,
    axis: DragAxis,
    sensitivity: Sensitivity,
    current_frame: usize,
    drag: DragState,
    listener: Option<ListenerId>,
}

impl<S: Surface> Viewer<S> {
    /// Mounts on `surface` with inputs that were already validated.
    pub(super) fn mount(
        mut surface: S,
        config: SpriteConfig,
        geometry: SpriteGeometry,
        axis: DragAxis,
        sensitivity: Sensitivity,
    ) -> Self {
        surface.set_size(geometry.frame_width(), geometry.frame_height());
        surface.set_background_image(&config.sprite_url);
        surface.set_background_position(geometry.offset(0));
        let listener = surface.subscribe();

        log::debug!(
            "viewer attached: {} frames ({}x{}), axis {}, sensitivity {}px",
            geometry.frame_count(),
            geometry.columns(),
            geometry.rows(),
            axis.as_str(),
            sensitivity.pixels()
        );

        Self {
            surface,
            config,
            geometry,
            axis,
            sensitivity,
            current_frame: 0,
            drag: DragState::default(),
            listener: Some(listener),
        }
    }

    /// Applies one pointer event and returns the frame steps it caused.
    ///
    /// Events arriving after [`detach`](Self::detach) are ignored.
    pub fn handle_event(&mut self, event: PointerEvent) -> Vec<FrameChange> {
        if self.listener.is_none() {
            return Vec::new();
        }

        match event {
            PointerEvent::Pressed(point) => {
                self.drag.start(self.axis.coordinate(point));
                Vec::new()
            }
            PointerEvent::Moved(point) => {
                if self.drag.track(self.axis.coordinate(point)).is_none() {
                    return Vec::new();
                }
                match self.drag.take_steps(self.sensitivity) {
                    Some(steps) => self.advance(steps),
                    None => Vec::new(),
                }
            }
            PointerEvent::Released | PointerEvent::Left => {
                self.drag.stop();
                Vec::new()
            }
        }
    }

    /// Moves by `steps`, updating the surface once per step.
    ///
    /// More than a full turn only replays the last turn: whole turns before
    /// it land on the same frames and are skipped.
    fn advance(&mut self, steps: Steps) -> Vec<FrameChange> {
        let frame_count = self.geometry.frame_count() as u64;
        let shown = steps.count.min(frame_count);
        let skipped = (steps.count - shown) % frame_count;
        let sign = steps.direction.signum();

        let mut frame = self.current_frame as i64 + sign * skipped as i64;
        (0..shown)
            .map(|_| {
                frame += sign;
                let change = self.step_to(frame);
                frame = change.frame as i64;
                change
            })
            .collect()
    }

    /// Jumps straight to `frame`, wrapping it into range.
    pub fn show_frame(&mut self, frame: i64) -> FrameChange {
        self.step_to(frame)
    }

    fn step_to(&mut self, frame: i64) -> FrameChange {
        self.current_frame = self.geometry.wrap(frame);
        let offset = self.geometry.offset(self.current_frame);
        self.surface.set_background_position(offset);
        log::trace!("frame {} at {}", self.current_frame, offset.to_css());
        FrameChange {
            frame: self.current_frame,
            offset,
        }
    }

    /// Removes the pointer listener and leaves the surface as it is.
    ///
    /// Calling it again has no effect.
    pub fn detach(&mut self) {
        if let Some(listener) = self.listener.take() {
            self.surface.unsubscribe(listener);
            self.drag.stop();
            log::debug!("viewer detached at frame {}", self.current_frame);
        }
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.listener.is_some()
    }

    #[must_use]
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.geometry.frame_count()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Distance accumulated towards the next step, `None` when idle.
    #[must_use]
    pub fn accumulated_delta(&self) -> Option<f32> {
        self.drag.accumulated()
    }

    #[must_use]
    pub fn geometry(&self) -> &SpriteGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn config(&self) -> &SpriteConfig {
        &self.config
    }

    #[must_use]
    pub fn drag_axis(&self) -> DragAxis {
        self.axis
    }

    #[must_use]
    pub fn sensitivity(&self) -> Sensitivity {
        self.sensitivity
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Detaches and hands the surface back.
    #[must_use]
    pub fn into_surface(mut self) -> S {
        self.detach();
        self.surface
    }
}
