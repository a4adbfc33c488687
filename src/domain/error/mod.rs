// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! Validation failures for sprite configurations and mount targets. These
//! are pure values with no dependency on infrastructure crates.

use std::fmt;

/// Reasons a sprite configuration cannot drive a viewer.
///
/// Raised synchronously by [`attach`](crate::ui::viewer::attach) and by the
/// catalog when a stored record is incomplete. The caller fixes the input and
/// attaches again; nothing is retried.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A required field of the stored record is absent.
    MissingField(&'static str),

    /// The sprite URL is empty or only whitespace.
    EmptySpriteUrl,

    /// A dimension is zero or negative.
    NonPositiveDimension { field: &'static str, value: i64 },

    /// A dimension does not fit in 32 bits.
    DimensionTooLarge { field: &'static str, value: i64 },

    /// The sheet is not an exact multiple of the frame along one axis.
    FractionalFrameCount {
        axis: &'static str,
        sheet: u32,
        frame: u32,
    },

    /// Sensitivity must be a finite number of pixels greater than zero.
    InvalidSensitivity(f32),
}

/// Problems with the element the viewer is asked to mount on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountError {
    /// No element was found to attach to.
    Missing,
}

impl ConfigError {
    /// Returns the record field the error refers to, if any.
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ConfigError::MissingField(field) => Some(*field),
            ConfigError::EmptySpriteUrl => Some("sprite_url"),
            ConfigError::NonPositiveDimension { field, .. }
            | ConfigError::DimensionTooLarge { field, .. } => Some(*field),
            ConfigError::FractionalFrameCount { .. } | ConfigError::InvalidSensitivity(_) => None,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingField(field) => write!(f, "missing field: {}", field),
            ConfigError::EmptySpriteUrl => write!(f, "sprite URL is empty"),
            ConfigError::NonPositiveDimension { field, value } => {
                write!(f, "{} must be positive, got {}", field, value)
            }
            ConfigError::DimensionTooLarge { field, value } => {
                write!(f, "{} is too large: {}", field, value)
            }
            ConfigError::FractionalFrameCount { axis, sheet, frame } => write!(
                f,
                "sheet {} {}px is not a multiple of frame {} {}px",
                axis, sheet, axis, frame
            ),
            ConfigError::InvalidSensitivity(value) => {
                write!(f, "sensitivity must be a positive number of pixels, got {}", value)
            }
        }
    }
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MountError::Missing => write!(f, "mount element is absent"),
        }
    }
}

impl std::error::Error for ConfigError {}
impl std::error::Error for MountError {}
