// SPDX-License-Identifier: MPL-2.0
//! Sprite sheet types.
//!
//! A sprite sheet is a single image holding every rotation frame laid out in
//! a grid, row by row. [`SpriteConfig`] is the raw description supplied by
//! the product record; [`SpriteGeometry`] is its validated form and the only
//! way to map a frame index to a position inside the sheet.

mod geometry;

pub use geometry::{FrameOffset, SpriteGeometry};

/// Sprite sheet description as stored for a product.
///
/// Construction does not validate; [`SpriteGeometry::new`] does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteConfig {
    /// Already resolved image URL of the full sheet.
    pub sprite_url: String,
    /// Width of one frame, which is also the mount element width.
    pub frame_width: u32,
    /// Height of one frame, which is also the mount element height.
    pub frame_height: u32,
    /// Width of the whole sheet.
    pub sheet_width: u32,
    /// Height of the whole sheet.
    pub sheet_height: u32,
}

impl SpriteConfig {
    #[must_use]
    pub fn new(
        sprite_url: impl Into<String>,
        frame_width: u32,
        frame_height: u32,
        sheet_width: u32,
        sheet_height: u32,
    ) -> Self {
        Self {
            sprite_url: sprite_url.into(),
            frame_width,
            frame_height,
            sheet_width,
            sheet_height,
        }
    }
}
