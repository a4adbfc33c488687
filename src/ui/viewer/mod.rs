// SPDX-License-Identifier: MPL-2.0
//! 360° frame-sequence viewer.
//!
//! [`attach`] validates a sprite configuration, mounts on a surface and
//! returns a [`Viewer`] that turns drags into frame steps:
//!
//! ```
//! use sprite360::domain::sprite::SpriteConfig;
//! use sprite360::domain::ui::Point;
//! use sprite360::ui::viewer::{attach, AttachOptions, MemorySurface, PointerEvent};
//!
//! let config = SpriteConfig::new("https://cdn.example.com/chair.jpg", 400, 400, 4000, 400);
//! let mut viewer = attach(Some(MemorySurface::new()), config, AttachOptions::default()).unwrap();
//!
//! viewer.handle_event(PointerEvent::Pressed(Point::new(0.0, 0.0)));
//! let changes = viewer.handle_event(PointerEvent::Moved(Point::new(250.0, 0.0)));
//! viewer.handle_event(PointerEvent::Released);
//!
//! assert_eq!(changes.len(), 2);
//! assert_eq!(viewer.current_frame(), 2);
//! ```

pub mod component;
pub mod surface;

pub use component::{FrameChange, PointerEvent, Viewer};
pub use surface::{ListenerId, MemorySurface, Surface, SurfaceCall};

use crate::domain::error::MountError;
use crate::domain::sprite::{SpriteConfig, SpriteGeometry};
use crate::domain::ui::newtypes::sensitivity_bounds;
use crate::domain::ui::{DragAxis, Sensitivity};
use crate::error::Result;

/// Interaction settings chosen at attach time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttachOptions {
    pub drag_axis: DragAxis,
    /// Pixels of drag per frame; must be greater than zero.
    pub sensitivity: f32,
}

impl Default for AttachOptions {
    fn default() -> Self {
        Self {
            drag_axis: DragAxis::X,
            sensitivity: sensitivity_bounds::DEFAULT,
        }
    }
}

/// Attaches a viewer to `mount`.
///
/// Every input is validated before the surface is touched, so a failed
/// attach leaves the element untouched.
///
/// # Errors
///
/// - [`Error::Config`](crate::error::Error::Config) for a malformed sprite
///   configuration or a non-positive sensitivity.
/// - [`Error::Mount`](crate::error::Error::Mount) when `mount` is `None`.
pub fn attach<S: Surface>(
    mount: Option<S>,
    config: SpriteConfig,
    options: AttachOptions,
) -> Result<Viewer<S>> {
    let geometry = SpriteGeometry::new(&config).inspect_err(|err| {
        log::warn!("refusing to attach viewer: {}", err);
    })?;
    let sensitivity = Sensitivity::new(options.sensitivity)?;
    let Some(surface) = mount else {
        log::warn!("refusing to attach viewer: mount element is absent");
        return Err(MountError::Missing.into());
    };

    Ok(Viewer::mount(
        surface,
        config,
        geometry,
        options.drag_axis,
        sensitivity,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ConfigError;
    use crate::domain::sprite::FrameOffset;
    use crate::domain::ui::Point;
    use crate::error::Error;

    const URL: &str = "https://cdn.example.com/chair-360.jpg";

    fn strip() -> SpriteConfig {
        SpriteConfig::new(URL, 400, 400, 4000, 400)
    }

    fn grid() -> SpriteConfig {
        SpriteConfig::new(URL, 400, 400, 4000, 800)
    }

    fn attached(config: SpriteConfig) -> Viewer<MemorySurface> {
        attach(Some(MemorySurface::new()), config, AttachOptions::default())
            .expect("valid config should attach")
    }

    fn drag(viewer: &mut Viewer<MemorySurface>, distance: f32) -> Vec<FrameChange> {
        viewer.handle_event(PointerEvent::Pressed(Point::new(500.0, 0.0)));
        viewer.handle_event(PointerEvent::Moved(Point::new(500.0 + distance, 0.0)))
    }

    #[test]
    fn attach_styles_surface_and_subscribes() {
        let viewer = attached(strip());
        let surface = viewer.surface();

        assert_eq!(surface.size(), Some((400, 400)));
        assert_eq!(surface.background_image(), Some(URL));
        assert_eq!(surface.background_position(), FrameOffset::default());
        assert_eq!(surface.listeners().len(), 1);
        assert_eq!(viewer.current_frame(), 0);
        assert!(!viewer.is_dragging());
    }

    #[test]
    fn fractional_sheet_fails_without_touching_surface() {
        let mut surface = MemorySurface::new();
        let config = SpriteConfig::new(URL, 300, 400, 1000, 400);

        let err = attach(Some(&mut surface), config, AttachOptions::default()).unwrap_err();

        assert!(matches!(
            err,
            Error::Config(ConfigError::FractionalFrameCount { .. })
        ));
        assert!(surface.calls().is_empty());
    }

    #[test]
    fn zero_sensitivity_is_a_config_error() {
        let mut surface = MemorySurface::new();
        let options = AttachOptions {
            sensitivity: 0.0,
            ..AttachOptions::default()
        };

        let err = attach(Some(&mut surface), strip(), options).unwrap_err();

        assert_eq!(err, Error::Config(ConfigError::InvalidSensitivity(0.0)));
        assert!(surface.calls().is_empty());
    }

    #[test]
    fn missing_mount_is_a_mount_error() {
        let err = attach::<MemorySurface>(None, strip(), AttachOptions::default()).unwrap_err();
        assert_eq!(err, Error::Mount(MountError::Missing));
    }

    #[test]
    fn config_error_wins_over_missing_mount() {
        let config = SpriteConfig::new("", 400, 400, 4000, 400);
        let err = attach::<MemorySurface>(None, config, AttachOptions::default()).unwrap_err();
        assert_eq!(err, Error::Config(ConfigError::EmptySpriteUrl));
    }

    #[test]
    fn full_turn_wraps_back_to_first_frame() {
        let mut viewer = attached(strip());

        let changes = drag(&mut viewer, 1000.0);

        assert_eq!(changes.len(), 10);
        assert_eq!(changes[0].frame, 1);
        assert_eq!(changes[9].frame, 0);
        assert_eq!(viewer.current_frame(), 0);
        assert_eq!(viewer.accumulated_delta(), Some(0.0));
    }

    #[test]
    fn backward_drag_wraps_to_end() {
        let mut viewer = attached(strip());

        let changes = drag(&mut viewer, -250.0);

        let frames: Vec<_> = changes.iter().map(|change| change.frame).collect();
        assert_eq!(frames, vec![9, 8]);
        assert_eq!(viewer.current_frame(), 8);
        assert_eq!(viewer.accumulated_delta(), Some(-50.0));
        assert_eq!(
            viewer.surface().background_position(),
            FrameOffset { x: 3200, y: 0 }
        );
    }

    #[test]
    fn exact_sensitivity_advances_one_frame() {
        let mut viewer = attached(strip());
        assert_eq!(drag(&mut viewer, 100.0).len(), 1);
        assert_eq!(viewer.current_frame(), 1);
    }

    #[test]
    fn one_pixel_short_advances_nothing() {
        let mut viewer = attached(strip());
        assert!(drag(&mut viewer, 99.0).is_empty());
        assert_eq!(viewer.current_frame(), 0);
    }

    #[test]
    fn small_moves_accumulate_across_events() {
        let mut viewer = attached(strip());
        viewer.handle_event(PointerEvent::Pressed(Point::new(0.0, 0.0)));
        for x in [30.0, 60.0, 90.0] {
            assert!(viewer
                .handle_event(PointerEvent::Moved(Point::new(x, 0.0)))
                .is_empty());
        }
        let changes = viewer.handle_event(PointerEvent::Moved(Point::new(120.0, 0.0)));

        assert_eq!(changes.len(), 1);
        assert_eq!(viewer.accumulated_delta(), Some(20.0));
    }

    #[test]
    fn release_discards_partial_distance() {
        let mut viewer = attached(strip());
        drag(&mut viewer, 90.0);
        viewer.handle_event(PointerEvent::Released);

        assert!(!viewer.is_dragging());
        assert!(viewer.accumulated_delta().is_none());

        assert!(drag(&mut viewer, 20.0).is_empty());
        assert_eq!(viewer.current_frame(), 0);
    }

    #[test]
    fn leaving_surface_ends_drag() {
        let mut viewer = attached(strip());
        drag(&mut viewer, 150.0);
        viewer.handle_event(PointerEvent::Left);

        assert!(!viewer.is_dragging());
        let moved = viewer.handle_event(PointerEvent::Moved(Point::new(5000.0, 0.0)));
        assert!(moved.is_empty());
        assert_eq!(viewer.current_frame(), 1);
    }

    #[test]
    fn move_without_press_is_ignored() {
        let mut viewer = attached(strip());
        let changes = viewer.handle_event(PointerEvent::Moved(Point::new(900.0, 0.0)));
        assert!(changes.is_empty());
        assert_eq!(viewer.current_frame(), 0);
    }

    fn attached_with_sensitivity(pixels: f32) -> Viewer<MemorySurface> {
        let options = AttachOptions {
            sensitivity: pixels,
            ..AttachOptions::default()
        };
        attach(Some(MemorySurface::new()), strip(), options).expect("valid sensitivity")
    }

    #[test]
    fn sub_pixel_sensitivity_flick_wraps_to_final_frame() {
        let mut viewer = attached_with_sensitivity(0.25);

        // 3333px at 0.25px per frame is 13332 steps, 2 past a whole turn.
        let changes = drag(&mut viewer, 3333.0);

        assert_eq!(changes.len(), 10);
        assert_eq!(changes.last().map(|change| change.frame), Some(2));
        assert_eq!(viewer.current_frame(), 2);
        assert_eq!(viewer.accumulated_delta(), Some(0.0));
    }

    #[test]
    fn backward_flick_past_several_turns() {
        let mut viewer = attached_with_sensitivity(0.25);

        // -1003px is -4012 steps, which wraps to frame 8.
        let changes = drag(&mut viewer, -1003.0);

        let frames: Vec<_> = changes.iter().map(|change| change.frame).collect();
        assert_eq!(frames, vec![7, 6, 5, 4, 3, 2, 1, 0, 9, 8]);
        assert_eq!(viewer.current_frame(), 8);
    }

    #[test]
    fn tiny_sensitivity_terminates() {
        let mut viewer = attached_with_sensitivity(1e-6);

        let changes = drag(&mut viewer, 100.0);

        assert_eq!(changes.len(), 10);
        assert!(viewer.current_frame() < viewer.frame_count());
    }

    #[test]
    fn huge_coordinate_terminates_with_remainder() {
        let mut viewer = attached_with_sensitivity(300.0);
        viewer.handle_event(PointerEvent::Pressed(Point::new(0.0, 0.0)));

        // 1e10 / 300 = 33_333_333 steps, remainder 100px.
        let changes = viewer.handle_event(PointerEvent::Moved(Point::new(1.0e10, 0.0)));

        assert_eq!(changes.len(), 10);
        assert_eq!(viewer.current_frame(), 3);
        assert_eq!(viewer.accumulated_delta(), Some(100.0));
    }

    #[test]
    fn fractional_sensitivity_reached_exactly() {
        let mut viewer = attached_with_sensitivity(0.3);
        viewer.handle_event(PointerEvent::Pressed(Point::new(0.0, 0.0)));
        viewer.handle_event(PointerEvent::Moved(Point::new(0.1, 0.0)));
        viewer.handle_event(PointerEvent::Moved(Point::new(0.2, 0.0)));

        let changes = viewer.handle_event(PointerEvent::Moved(Point::new(0.3, 0.0)));

        assert_eq!(changes.len(), 1);
        assert_eq!(viewer.current_frame(), 1);
    }

    #[test]
    fn vertical_axis_ignores_horizontal_travel() {
        let options = AttachOptions {
            drag_axis: DragAxis::Y,
            sensitivity: 50.0,
        };
        let mut viewer = attach(Some(MemorySurface::new()), strip(), options).unwrap();

        viewer.handle_event(PointerEvent::Pressed(Point::new(0.0, 0.0)));
        assert!(viewer
            .handle_event(PointerEvent::Moved(Point::new(800.0, 10.0)))
            .is_empty());
        let changes = viewer.handle_event(PointerEvent::Moved(Point::new(800.0, 110.0)));

        assert_eq!(changes.len(), 2);
        assert_eq!(viewer.current_frame(), 2);
    }

    #[test]
    fn grid_sheet_positions_follow_rows() {
        let mut viewer = attached(grid());
        let change = viewer.show_frame(15);

        assert_eq!(change.offset, FrameOffset { x: 2000, y: 400 });
        assert_eq!(
            viewer.surface().background_position(),
            FrameOffset { x: 2000, y: 400 }
        );
        assert_eq!(viewer.show_frame(-1).frame, 19);
    }

    #[test]
    fn each_step_updates_background_once() {
        let mut viewer = attached(grid());
        drag(&mut viewer, 300.0);

        let updates: Vec<_> = viewer.surface().position_updates().collect();
        assert_eq!(
            updates,
            vec![
                FrameOffset { x: 0, y: 0 },
                FrameOffset { x: 400, y: 0 },
                FrameOffset { x: 800, y: 0 },
                FrameOffset { x: 1200, y: 0 },
            ]
        );
    }

    #[test]
    fn detach_unsubscribes_once_and_keeps_style() {
        let mut viewer = attached(strip());
        drag(&mut viewer, 200.0);

        viewer.detach();
        let after_first = viewer.surface().clone();
        viewer.detach();

        assert!(!viewer.is_attached());
        assert_eq!(viewer.surface(), &after_first);
        assert!(after_first.listeners().is_empty());
        assert_eq!(
            after_first.background_position(),
            FrameOffset { x: 800, y: 0 }
        );
        let unsubscribes = after_first
            .calls()
            .iter()
            .filter(|call| matches!(call, SurfaceCall::Unsubscribe(_)))
            .count();
        assert_eq!(unsubscribes, 1);
    }

    #[test]
    fn events_after_detach_are_ignored() {
        let mut viewer = attached(strip());
        viewer.handle_event(PointerEvent::Pressed(Point::new(0.0, 0.0)));
        viewer.detach();

        let changes = viewer.handle_event(PointerEvent::Moved(Point::new(500.0, 0.0)));

        assert!(changes.is_empty());
        assert!(!viewer.is_dragging());
        assert_eq!(viewer.current_frame(), 0);
    }

    #[test]
    fn into_surface_detaches() {
        let viewer = attached(strip());
        let surface = viewer.into_surface();
        assert!(surface.listeners().is_empty());
        assert_eq!(surface.size(), Some((400, 400)));
    }
}
