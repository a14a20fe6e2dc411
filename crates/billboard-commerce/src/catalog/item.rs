//! Catalog item type.

use crate::ids::CatalogId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A purchasable item offered in the picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Unique within the catalog.
    pub id: CatalogId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Image location, rendered next to the item.
    #[serde(alias = "url")]
    pub image_ref: String,
}

impl CatalogItem {
    /// Create a new catalog item.
    pub fn new(
        id: impl Into<CatalogId>,
        name: impl Into<String>,
        price: Money,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image_ref: image_ref.into(),
        }
    }
}
