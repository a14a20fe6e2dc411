//! Namespaced store keys.

/// Namespace used by the original Coffee Billboard page.
pub const DEFAULT_NAMESPACE: &str = "coffeeBillboard_";

/// Build a physical store key from a namespace and one or more parts.
///
/// # Example
///
/// ```rust,ignore
/// let key = store_key!("coffeeBillboard_", "cart");
/// // Returns "coffeeBillboard_cart"
/// ```
#[macro_export]
macro_rules! store_key {
    ($namespace:expr, $($part:expr),+) => {{
        let mut key = String::from($namespace);
        $(
            key.push_str(&$part.to_string());
        )+
        key
    }};
}

/// The physical keys used to persist cart state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreKeys {
    namespace: String,
}

impl StoreKeys {
    pub const CART: &'static str = "cart";
    pub const NEXT_FREE_ID: &'static str = "nextFreeId";
    pub const SELECTED_ID: &'static str = "selectedId";

    /// Keys under a custom namespace.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn cart(&self) -> String {
        store_key!(&self.namespace, Self::CART)
    }

    pub fn next_free_id(&self) -> String {
        store_key!(&self.namespace, Self::NEXT_FREE_ID)
    }

    pub fn selected_id(&self) -> String {
        store_key!(&self.namespace, Self::SELECTED_ID)
    }
}

impl Default for StoreKeys {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keys() {
        let keys = StoreKeys::default();
        assert_eq!(keys.cart(), "coffeeBillboard_cart");
        assert_eq!(keys.next_free_id(), "coffeeBillboard_nextFreeId");
        assert_eq!(keys.selected_id(), "coffeeBillboard_selectedId");
    }

    #[test]
    fn test_empty_namespace() {
        let keys = StoreKeys::new("");
        assert_eq!(keys.cart(), "cart");
    }

    #[test]
    fn test_store_key_macro() {
        assert_eq!(store_key!("ns:", "a", 7), "ns:a7");
    }
}
