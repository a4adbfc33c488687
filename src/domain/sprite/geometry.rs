// SPDX-License-Identifier: MPL-2.0
//! Frame grid arithmetic.

use super::SpriteConfig;
use crate::domain::error::ConfigError;

/// Position of a frame's top-left corner inside the sprite sheet, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct FrameOffset {
    pub x: u32,
    pub y: u32,
}

impl FrameOffset {
    /// Formats the offset as a CSS `background-position` value.
    ///
    /// The sheet is shifted left and up so the frame lands in the element's
    /// visible area, hence the negated components.
    ///
    /// ```
    /// use sprite360::domain::sprite::FrameOffset;
    ///
    /// assert_eq!(FrameOffset { x: 2000, y: 400 }.to_css(), "-2000px -400px");
    /// assert_eq!(FrameOffset::default().to_css(), "0px 0px");
    /// ```
    #[must_use]
    pub fn to_css(self) -> String {
        format!("{}px {}px", css_shift(self.x), css_shift(self.y))
    }
}

fn css_shift(value: u32) -> i64 {
    -i64::from(value)
}

/// Validated frame grid of a sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteGeometry {
    frame_width: u32,
    frame_height: u32,
    columns: u32,
    rows: u32,
}

impl SpriteGeometry {
    /// Validates `config` and derives its frame grid.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::EmptySpriteUrl`] if the URL is blank.
    /// - [`ConfigError::NonPositiveDimension`] if any dimension is zero.
    /// - [`ConfigError::FractionalFrameCount`] if a sheet dimension is not an
    ///   exact multiple of the frame dimension, including sheets smaller
    ///   than one frame.
    pub fn new(config: &SpriteConfig) -> Result<Self, ConfigError> {
        if config.sprite_url.trim().is_empty() {
            return Err(ConfigError::EmptySpriteUrl);
        }

        for (field, value) in [
            ("frame_width", config.frame_width),
            ("frame_height", config.frame_height),
            ("sheet_width", config.sheet_width),
            ("sheet_height", config.sheet_height),
        ] {
            if value == 0 {
                return Err(ConfigError::NonPositiveDimension { field, value: 0 });
            }
        }

        let columns = whole_frames("width", config.sheet_width, config.frame_width)?;
        let rows = whole_frames("height", config.sheet_height, config.frame_height)?;

        Ok(Self {
            frame_width: config.frame_width,
            frame_height: config.frame_height,
            columns,
            rows,
        })
    }

    #[must_use]
    pub fn frame_width(&self) -> u32 {
        self.frame_width
    }

    #[must_use]
    pub fn frame_height(&self) -> u32 {
        self.frame_height
    }

    /// Frames per row.
    #[must_use]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    #[must_use]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of frames, always at least 1.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Maps any signed frame position onto `[0, frame_count)`.
    #[must_use]
    pub fn wrap(&self, frame: i64) -> usize {
        let count = self.frame_count() as i64;
        frame.rem_euclid(count) as usize
    }

    /// Returns the sheet position of `frame`, wrapping out-of-range indices.
    #[must_use]
    pub fn offset(&self, frame: usize) -> FrameOffset {
        let frame = frame % self.frame_count();
        let columns = self.columns as usize;
        let column = (frame % columns) as u32;
        let row = (frame / columns) as u32;
        FrameOffset {
            x: column * self.frame_width,
            y: row * self.frame_height,
        }
    }
}

fn whole_frames(axis: &'static str, sheet: u32, frame: u32) -> Result<u32, ConfigError> {
    if sheet % frame != 0 {
        return Err(ConfigError::FractionalFrameCount { axis, sheet, frame });
    }
    Ok(sheet / frame)
}
