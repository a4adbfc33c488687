// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the interaction state logic separated from the
//! viewer that owns it, following the principle of separation of concerns.

pub mod drag;
pub mod hint;

// Re-export commonly used types for convenience
pub use drag::{DragState, Step, Steps};
pub use hint::DragHint;
