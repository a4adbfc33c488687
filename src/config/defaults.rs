// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Viewer**: Drag axis and sensitivity
//! - **Hint**: Drag hint overlay timeout

// ==========================================================================
// Viewer Defaults
// ==========================================================================

/// Default drag axis.
pub const DEFAULT_DRAG_AXIS: &str = "x";

/// Default pixels of drag per frame.
pub const DEFAULT_SENSITIVITY_PX: f32 = 100.0;

// ==========================================================================
// Hint Defaults
// ==========================================================================

/// Whether the drag hint is shown when a viewer appears.
pub const DEFAULT_HINT_ENABLED: bool = true;

/// Delay before the drag hint fades out (in milliseconds).
pub const DEFAULT_HINT_TIMEOUT_MS: u32 = 3_000;

/// Minimum hint timeout (in milliseconds).
pub const MIN_HINT_TIMEOUT_MS: u32 = 500;

/// Maximum hint timeout (in milliseconds).
pub const MAX_HINT_TIMEOUT_MS: u32 = 30_000;
