// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for pointer input and viewer
//! tuning values, ensuring they are always within valid ranges.

use std::time::Duration;

use crate::domain::error::ConfigError;

// =============================================================================
// Point
// =============================================================================

/// A pointer position in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// =============================================================================
// DragAxis
// =============================================================================

/// Screen axis along which drag distance is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum DragAxis {
    /// Horizontal drags rotate the product.
    #[default]
    X,
    /// Vertical drags rotate the product.
    Y,
}

impl DragAxis {
    /// Returns the coordinate of `point` tracked on this axis.
    #[must_use]
    pub fn coordinate(self, point: Point) -> f32 {
        match self {
            DragAxis::X => point.x,
            DragAxis::Y => point.y,
        }
    }

    /// Parses `"x"` or `"y"` (case-insensitive).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "x" => Some(DragAxis::X),
            "y" => Some(DragAxis::Y),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DragAxis::X => "x",
            DragAxis::Y => "y",
        }
    }
}

// =============================================================================
// Sensitivity
// =============================================================================

/// Sensitivity bounds.
pub mod sensitivity_bounds {
    /// Default pixels of drag per frame.
    pub const DEFAULT: f32 = 100.0;
}

/// Pixels of drag distance required to advance exactly one frame.
///
/// Unlike the clamped newtypes, an invalid sensitivity is rejected: a
/// viewer must not attach with a zero, negative or non-finite value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sensitivity(f32);

impl Sensitivity {
    /// Validates a raw sensitivity in pixels.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSensitivity`] unless `pixels` is finite
    /// and greater than zero.
    pub fn new(pixels: f32) -> Result<Self, ConfigError> {
        if pixels.is_finite() && pixels > 0.0 {
            Ok(Self(pixels))
        } else {
            Err(ConfigError::InvalidSensitivity(pixels))
        }
    }

    /// Returns the value in pixels.
    #[must_use]
    pub fn pixels(self) -> f32 {
        self.0
    }
}

impl Default for Sensitivity {
    fn default() -> Self {
        Self(sensitivity_bounds::DEFAULT)
    }
}

// =============================================================================
// Hint Timeout Bounds
// =============================================================================

/// Drag hint timeout bounds (0.5 to 30 seconds).
pub mod hint_bounds {
    /// Minimum hint timeout in milliseconds.
    pub const MIN_MS: u32 = 500;
    /// Maximum hint timeout in milliseconds.
    pub const MAX_MS: u32 = 30_000;
    /// Default hint timeout in milliseconds.
    pub const DEFAULT_MS: u32 = 3_000;
}

// =============================================================================
// HintTimeout
// =============================================================================

/// Delay before the drag hint overlay fades out on its own.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (500–30000 ms).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintTimeout(u32);

impl HintTimeout {
    /// Creates a new hint timeout, clamping to valid range.
    #[must_use]
    pub fn new(millis: u32) -> Self {
        Self(millis.clamp(hint_bounds::MIN_MS, hint_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn millis(self) -> u32 {
        self.0
    }

    /// Returns the timeout as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl Default for HintTimeout {
    fn default() -> Self {
        Self(hint_bounds::DEFAULT_MS)
    }
}
