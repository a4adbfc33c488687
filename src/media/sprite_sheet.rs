// SPDX-License-Identifier: MPL-2.0
//! Sprite sheet image helpers.
//!
//! Reads sheet dimensions to pre-fill a product record and cuts single
//! frames out of a sheet, using the `image` crate.

use crate::domain::sprite::{SpriteConfig, SpriteGeometry};
use crate::error::{Error, Result};
use image_rs::{DynamicImage, GenericImageView, ImageFormat, RgbaImage};
use std::path::Path;

/// Supported export formats for a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// PNG format (lossless, best quality).
    #[default]
    Png,
    /// JPEG format (lossy, smaller file size).
    Jpeg,
    /// WebP format (lossless).
    WebP,
}

impl ExportFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
            ExportFormat::WebP => "webp",
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            ExportFormat::Png => ImageFormat::Png,
            ExportFormat::Jpeg => ImageFormat::Jpeg,
            ExportFormat::WebP => ImageFormat::WebP,
        }
    }

    /// Detects format from file extension.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<ExportFormat> {
        match ext.to_lowercase().as_str() {
            "png" => Some(ExportFormat::Png),
            "jpg" | "jpeg" => Some(ExportFormat::Jpeg),
            "webp" => Some(ExportFormat::WebP),
            _ => None,
        }
    }

    /// Detects format from file path extension.
    pub fn from_path(path: &Path) -> Option<ExportFormat> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// Reads the pixel size of a sheet without decoding it.
pub fn probe_sheet_dimensions(path: &Path) -> Result<(u32, u32)> {
    Ok(image_rs::image_dimensions(path)?)
}

/// Cuts `frame` out of a decoded sheet.
///
/// # Errors
///
/// Returns [`Error::Image`] if `frame` is not a frame of the grid, or if
/// the decoded sheet is smaller than the frame grid says it should be.
pub fn extract_frame(
    sheet: &DynamicImage,
    geometry: &SpriteGeometry,
    frame: usize,
) -> Result<RgbaImage> {
    if frame >= geometry.frame_count() {
        return Err(Error::Image(format!(
            "frame {} out of range, sheet has {} frames",
            frame,
            geometry.frame_count()
        )));
    }

    let offset = geometry.offset(frame);
    let (width, height) = (geometry.frame_width(), geometry.frame_height());
    let (sheet_width, sheet_height) = sheet.dimensions();

    if offset.x + width > sheet_width || offset.y + height > sheet_height {
        return Err(Error::Image(format!(
            "frame {} at {}x{} exceeds {}x{} sheet",
            frame, offset.x, offset.y, sheet_width, sheet_height
        )));
    }

    Ok(image_rs::imageops::crop_imm(sheet, offset.x, offset.y, width, height).to_image())
}

/// Loads the sheet at `sheet_path` and writes `frame` to `out_path`.
///
/// The format follows the output extension, defaulting to PNG. Frame
/// indices are not wrapped here: an index past the last frame is an error.
pub fn export_frame(
    sheet_path: &Path,
    config: &SpriteConfig,
    frame: usize,
    out_path: &Path,
) -> Result<()> {
    let geometry = SpriteGeometry::new(config)?;
    let sheet = image_rs::open(sheet_path)?;
    let image = extract_frame(&sheet, &geometry, frame)?;
    let format = ExportFormat::from_path(out_path).unwrap_or_default();

    // JPEG has no alpha channel
    if format == ExportFormat::Jpeg {
        DynamicImage::ImageRgba8(image)
            .to_rgb8()
            .save_with_format(out_path, format.image_format())?;
    } else {
        image.save_with_format(out_path, format.image_format())?;
    }

    log::info!(
        "exported frame {} of {} to {}",
        frame,
        sheet_path.display(),
        out_path.display()
    );
    Ok(())
}

/// Generates a default filename for an exported frame.
///
/// Format: `{sheet_name}_frame_{index}.{ext}`
#[must_use]
pub fn default_frame_filename(sheet_path: &Path, frame: usize, format: ExportFormat) -> String {
    let sheet_name = sheet_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("sprite");
    format!("{}_frame_{:03}.{}", sheet_name, frame, format.extension())
}
