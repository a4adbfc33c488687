// SPDX-License-Identifier: MPL-2.0
//! Stored sprite record of one product.

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;
use crate::domain::sprite::{SpriteConfig, SpriteGeometry};

/// The five sprite fields saved for a product.
///
/// Dimensions are kept as the raw integers the admin form produced, so a
/// record may hold zero or negative values. Field names on disk match the
/// product meta keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSprite {
    #[serde(rename = "_wc360_sprite_url", default, skip_serializing_if = "Option::is_none")]
    pub sprite_url: Option<String>,

    #[serde(rename = "_wc360_frame_width", default, skip_serializing_if = "Option::is_none")]
    pub frame_width: Option<i64>,

    #[serde(rename = "_wc360_frame_height", default, skip_serializing_if = "Option::is_none")]
    pub frame_height: Option<i64>,

    #[serde(rename = "_wc360_sheet_width", default, skip_serializing_if = "Option::is_none")]
    pub sheet_width: Option<i64>,

    #[serde(rename = "_wc360_sheet_height", default, skip_serializing_if = "Option::is_none")]
    pub sheet_height: Option<i64>,
}

/// What the product page should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductDisplay {
    /// Mount the 360° viewer with this configuration.
    Viewer(SpriteConfig),
    /// Leave the default product gallery in place.
    Gallery,
}

impl ProductSprite {
    /// Converts the record into a viewer configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a field is absent, the URL is blank or
    /// a dimension is zero, negative or wider than 32 bits.
    pub fn to_sprite_config(&self) -> Result<SpriteConfig, ConfigError> {
        let sprite_url = self
            .sprite_url
            .as_deref()
            .ok_or(ConfigError::MissingField("sprite_url"))?;
        if sprite_url.trim().is_empty() {
            return Err(ConfigError::EmptySpriteUrl);
        }

        Ok(SpriteConfig {
            sprite_url: sprite_url.to_string(),
            frame_width: dimension("frame_width", self.frame_width)?,
            frame_height: dimension("frame_height", self.frame_height)?,
            sheet_width: dimension("sheet_width", self.sheet_width)?,
            sheet_height: dimension("sheet_height", self.sheet_height)?,
        })
    }

    /// Decides between the 360° viewer and the gallery fallback.
    ///
    /// A record that is present but would not validate (for example a sheet
    /// that is not a whole number of frames) also falls back to the gallery.
    #[must_use]
    pub fn display(&self) -> ProductDisplay {
        let checked = self
            .to_sprite_config()
            .and_then(|config| SpriteGeometry::new(&config).map(|_| config));
        match checked {
            Ok(config) => ProductDisplay::Viewer(config),
            Err(err) => {
                log::debug!("gallery fallback: {}", err);
                ProductDisplay::Gallery
            }
        }
    }

    /// Whether all five fields are present and non-zero.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.to_sprite_config().is_ok()
    }

    /// Forgets the sprite sheet together with every dimension.
    pub fn remove_sprite(&mut self) {
        *self = ProductSprite::default();
    }

    /// Fills the sheet size from the uploaded image's dimensions.
    ///
    /// Frame dimensions depend on how the sheet is laid out and stay manual.
    pub fn autofill_sheet_dimensions(&mut self, width: u32, height: u32) {
        self.sheet_width = Some(i64::from(width));
        self.sheet_height = Some(i64::from(height));
    }
}

fn dimension(field: &'static str, value: Option<i64>) -> Result<u32, ConfigError> {
    let value = value.ok_or(ConfigError::MissingField(field))?;
    if value <= 0 {
        return Err(ConfigError::NonPositiveDimension { field, value });
    }
    u32::try_from(value).map_err(|_| ConfigError::DimensionTooLarge { field, value })
}
