//! Configuration loading and representation.

/// Environment variable capping how many products a single business may store.
pub const MAX_PRODUCTS_PER_BUSINESS_VAR: &str = "CATALOG_MAX_PRODUCTS_PER_BUSINESS";

/// Product store settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreConfig {
    /// `None` means unlimited.
    pub max_products_per_business: Option<usize>,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests, layered config sources).
    ///
    /// Absent, zero or unparsable limits are treated as unlimited.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let max_products_per_business = lookup(MAX_PRODUCTS_PER_BUSINESS_VAR).and_then(|raw| {
            match raw.trim().parse::<usize>() {
                Ok(0) => None,
                Ok(limit) => Some(limit),
                Err(_) => {
                    tracing::warn!(
                        value = %raw,
                        "{MAX_PRODUCTS_PER_BUSINESS_VAR} is not a positive integer; ignoring"
                    );
                    None
                }
            }
        });

        Self {
            max_products_per_business,
        }
    }
}
