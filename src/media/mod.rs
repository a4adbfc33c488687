// SPDX-License-Identifier: MPL-2.0
//! Sprite sheet image handling.

pub mod sprite_sheet;

// Re-export commonly used types
pub use sprite_sheet::{
    default_frame_filename, export_frame, extract_frame, probe_sheet_dimensions, ExportFormat,
};
