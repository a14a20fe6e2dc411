//! Catalog sources.

use async_trait::async_trait;

use crate::catalog::{Catalog, CatalogItem};
use crate::error::CatalogError;
use crate::money::Money;

/// Supplies the catalog once at startup.
///
/// Implementations may take time (network, disk, a simulated delay). The cart
/// state manager never calls this itself; the caller awaits it and hands the
/// result to [`CartStateManager::initialize`].
///
/// [`CartStateManager::initialize`]: crate::cart::CartStateManager::initialize
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch the catalog.
    async fn get_catalog(&self) -> Result<Catalog, CatalogError>;
}

/// Provider backed by a fixed in-memory catalog.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    catalog: Catalog,
}

impl StaticCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// The built-in Coffee Billboard menu.
    pub fn coffee_menu() -> Self {
        Self::new(coffee_menu())
    }
}

#[async_trait]
impl CatalogProvider for StaticCatalog {
    async fn get_catalog(&self) -> Result<Catalog, CatalogError> {
        Ok(self.catalog.clone())
    }
}

/// The default coffee menu.
pub fn coffee_menu() -> Catalog {
    let items = [
        (0, "Espresso", 180, "images/espresso.jpg"),
        (1, "Americano", 220, "images/americano.jpg"),
        (2, "Cappuccino", 280, "images/cappuccino.jpg"),
        (3, "Latte", 300, "images/latte.jpg"),
        (4, "Flat White", 320, "images/flat-white.jpg"),
        (5, "Mocha", 350, "images/mocha.jpg"),
    ]
    .into_iter()
    .map(|(id, name, cents, image)| CatalogItem::new(id as u64, name, Money::from_cents(cents), image))
    .collect();

    // Ids above are distinct, so this cannot fail.
    Catalog::new(items).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::CatalogId;

    #[test]
    fn test_coffee_menu() {
        let menu = coffee_menu();
        assert_eq!(menu.len(), 6);
        assert_eq!(menu.first_id(), Some(CatalogId::new(0)));
        assert_eq!(menu.get(CatalogId::new(3)).unwrap().name, "Latte");
    }

    #[tokio::test]
    async fn test_static_provider() {
        let provider = StaticCatalog::coffee_menu();
        let catalog = provider.get_catalog().await.unwrap();
        assert_eq!(catalog, coffee_menu());
    }
}
