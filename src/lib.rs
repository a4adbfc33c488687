// SPDX-License-Identifier: MPL-2.0
//! `sprite360` turns a product sprite sheet into a drag-to-rotate 360° viewer.
//!
//! The viewer core maps drag distance along one axis to a frame index and
//! shifts the background of a fixed-size mount surface to show that frame.
//! Around it sit the product sprite catalog, sprite sheet image helpers and
//! the viewer settings.

#![doc(html_root_url = "https://docs.rs/sprite360/0.1.0")]

pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod media;
pub mod ui;

pub use domain::sprite::{FrameOffset, SpriteConfig, SpriteGeometry};
pub use error::{ConfigError, Error, MountError, Result};
pub use ui::viewer::{attach, AttachOptions, PointerEvent, Surface, Viewer};
