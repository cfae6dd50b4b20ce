//! Persistence ports for the product aggregate.
//!
//! Concrete implementations belong in the infrastructure layer. Failures are
//! opaque (`anyhow::Error`); translating them is the service layer's job.

use std::sync::Arc;

use crate::ids::{BusinessId, ProductId};
use crate::product::Product;

/// State-changing operations, scoped to a single business.
pub trait ProductCommandRepository: Send + Sync {
    /// Save or replace a complete product snapshot and return what was persisted.
    fn save(&self, product: &Product) -> anyhow::Result<Product>;

    /// Delete a product. Deleting an unknown id is not an error.
    fn delete_by_id(&self, business_id: &BusinessId, id: &ProductId) -> anyhow::Result<()>;
}

/// Read operations, scoped to a single business.
pub trait ProductQueryRepository: Send + Sync {
    fn find_by_id(
        &self,
        business_id: &BusinessId,
        id: &ProductId,
    ) -> anyhow::Result<Option<Product>>;

    /// All products of a business, in no particular order.
    fn find_all(&self, business_id: &BusinessId) -> anyhow::Result<Vec<Product>>;
}

impl<S> ProductCommandRepository for Arc<S>
where
    S: ProductCommandRepository + ?Sized,
{
    fn save(&self, product: &Product) -> anyhow::Result<Product> {
        (**self).save(product)
    }

    fn delete_by_id(&self, business_id: &BusinessId, id: &ProductId) -> anyhow::Result<()> {
        (**self).delete_by_id(business_id, id)
    }
}

impl<S> ProductQueryRepository for Arc<S>
where
    S: ProductQueryRepository + ?Sized,
{
    fn find_by_id(
        &self,
        business_id: &BusinessId,
        id: &ProductId,
    ) -> anyhow::Result<Option<Product>> {
        (**self).find_by_id(business_id, id)
    }

    fn find_all(&self, business_id: &BusinessId) -> anyhow::Result<Vec<Product>> {
        (**self).find_all(business_id)
    }
}
