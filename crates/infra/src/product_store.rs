//! In-memory, tenant-scoped product repository.

use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::{Context, anyhow, bail};

use catalog_core::AggregateRoot;
use catalog_products::{
    BusinessId, Product, ProductCommandRepository, ProductId, ProductQueryRepository,
    ProductSnapshot,
};

use crate::config::StoreConfig;

/// In-memory product store for tests/dev.
///
/// Records are kept as JSON snapshots, so every read rehydrates through the
/// aggregate's validating constructors exactly like a real database adapter
/// would. Records are keyed by `(business, product)`; one business can never
/// see another's products.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    records: RwLock<HashMap<(BusinessId, ProductId), String>>,
    config: StoreConfig,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store limited by `CATALOG_MAX_PRODUCTS_PER_BUSINESS`, if set.
    pub fn from_env() -> Self {
        Self::with_config(StoreConfig::from_env())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            config,
        }
    }

    fn decode(raw: &str) -> anyhow::Result<Product> {
        let snapshot: ProductSnapshot =
            serde_json::from_str(raw).context("stored product is not valid JSON")?;
        let product = Product::try_from(snapshot).context("stored product failed validation")?;
        Ok(product)
    }
}

impl ProductCommandRepository for InMemoryProductStore {
    fn save(&self, product: &Product) -> anyhow::Result<Product> {
        let raw = serde_json::to_string(&ProductSnapshot::from(product))
            .context("failed to encode product")?;
        let key = (product.business_id().clone(), product.id().clone());

        let mut records = self
            .records
            .write()
            .map_err(|_| anyhow!("product store lock poisoned"))?;

        if let Some(limit) = self.config.max_products_per_business {
            let stored = records.keys().filter(|(b, _)| b == &key.0).count();
            if !records.contains_key(&key) && stored >= limit {
                bail!(
                    "business {} already stores the maximum of {limit} products",
                    key.0
                );
            }
        }

        records.insert(key, raw.clone());
        drop(records);

        Self::decode(&raw)
    }

    fn delete_by_id(&self, business_id: &BusinessId, id: &ProductId) -> anyhow::Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| anyhow!("product store lock poisoned"))?;
        records.remove(&(business_id.clone(), id.clone()));
        Ok(())
    }
}

impl ProductQueryRepository for InMemoryProductStore {
    fn find_by_id(
        &self,
        business_id: &BusinessId,
        id: &ProductId,
    ) -> anyhow::Result<Option<Product>> {
        let records = self
            .records
            .read()
            .map_err(|_| anyhow!("product store lock poisoned"))?;
        records
            .get(&(business_id.clone(), id.clone()))
            .map(|raw| Self::decode(raw))
            .transpose()
    }

    fn find_all(&self, business_id: &BusinessId) -> anyhow::Result<Vec<Product>> {
        let records = self
            .records
            .read()
            .map_err(|_| anyhow!("product store lock poisoned"))?;
        records
            .iter()
            .filter(|((b, _), _)| b == business_id)
            .map(|(_, raw)| Self::decode(raw))
            .collect()
    }
}
