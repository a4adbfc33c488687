// SPDX-License-Identifier: MPL-2.0
//! Viewer components and interaction state.
//!
//! This module is independent of any rendering toolkit: hosts deliver
//! pointer events and implement [`viewer::Surface`] for their element type.
//!
//! # Components
//!
//! - [`viewer`] - Frame-sequence viewer mounted on a surface
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable state management (drag, drag hint)

pub mod state;
pub mod viewer;
