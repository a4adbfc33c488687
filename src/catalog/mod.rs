// SPDX-License-Identifier: MPL-2.0
//! Product sprite catalog.
//!
//! Maps product ids to their stored [`ProductSprite`] records and persists
//! them in a TOML file:
//!
//! ```toml
//! [products.42]
//! _wc360_sprite_url = "https://shop.example.com/uploads/mug-360.jpg"
//! _wc360_frame_width = 400
//! _wc360_frame_height = 400
//! _wc360_sheet_width = 4000
//! _wc360_sheet_height = 400
//! ```

mod form;
mod record;

pub use form::{parse_int, sanitize_url, FormInput};
pub use record::{ProductDisplay, ProductSprite};

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// On-disk layout; TOML table keys are always strings.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    products: BTreeMap<String, ProductSprite>,
}

/// Sprite records keyed by product id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpriteCatalog {
    products: BTreeMap<u64, ProductSprite>,
}

impl SpriteCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, product_id: u64) -> Option<&ProductSprite> {
        self.products.get(&product_id)
    }

    /// Decides what the page of `product_id` shows; unknown products get the gallery.
    #[must_use]
    pub fn display(&self, product_id: u64) -> ProductDisplay {
        self.get(product_id)
            .map_or(ProductDisplay::Gallery, ProductSprite::display)
    }

    /// Inserts or replaces a record, returning the previous one.
    pub fn upsert(&mut self, product_id: u64, record: ProductSprite) -> Option<ProductSprite> {
        self.products.insert(product_id, record)
    }

    /// Applies a form submission to the record of `product_id`, creating it if needed.
    pub fn apply_form(&mut self, product_id: u64, input: &FormInput) -> &ProductSprite {
        let record = self.products.entry(product_id).or_default();
        input.merge_into(record);
        record
    }

    pub fn remove(&mut self, product_id: u64) -> Option<ProductSprite> {
        self.products.remove(&product_id)
    }

    /// Iterates records in product id order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &ProductSprite)> {
        self.products.iter().map(|(id, record)| (*id, record))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Loads a catalog file.
///
/// # Errors
///
/// Fails on I/O errors, invalid TOML or a product key that is not a
/// non-negative integer.
pub fn load_from_path(path: &Path) -> Result<SpriteCatalog> {
    let content = fs::read_to_string(path)?;
    let file: CatalogFile = toml::from_str(&content)?;

    let mut products = BTreeMap::new();
    for (key, record) in file.products {
        let id = key
            .parse::<u64>()
            .map_err(|_| Error::Settings(format!("invalid product id: {:?}", key)))?;
        products.insert(id, record);
    }
    log::debug!("loaded {} product records from {}", products.len(), path.display());
    Ok(SpriteCatalog { products })
}

/// Saves a catalog file, creating parent directories.
pub fn save_to_path(catalog: &SpriteCatalog, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = CatalogFile {
        products: catalog
            .products
            .iter()
            .map(|(id, record)| (id.to_string(), record.clone()))
            .collect(),
    };
    let content = toml::to_string_pretty(&file).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
