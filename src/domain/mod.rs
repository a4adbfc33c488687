// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core viewer rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`error`]: Validation errors ([`ConfigError`](error::ConfigError),
//!   [`MountError`](error::MountError))
//! - [`sprite`]: Sprite sheet types ([`SpriteConfig`](sprite::SpriteConfig),
//!   [`SpriteGeometry`](sprite::SpriteGeometry), [`FrameOffset`](sprite::FrameOffset))
//! - [`ui`]: Pointer and tuning value objects ([`DragAxis`](ui::DragAxis),
//!   [`Sensitivity`](ui::Sensitivity), [`HintTimeout`](ui::HintTimeout))

pub mod error;
pub mod sprite;
pub mod ui;
