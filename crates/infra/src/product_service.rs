//! Product service: orchestrates repository calls around aggregate operations.
//!
//! The aggregate never logs or translates its own errors; this layer does both.
//! Repository failures become [`ServiceError::OperationFailed`], absent products
//! become [`ServiceError::NotFound`], domain rule violations pass through.

use thiserror::Error;

use catalog_core::{AggregateRoot, DomainError};
use catalog_products::{
    BusinessId, Product, ProductCommandRepository, ProductId, ProductQueryRepository,
    ProductSummary, Variant,
};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("product not found with ID: {0}")]
    NotFound(ProductId),

    /// The repository failed; the cause is kept for diagnostics.
    #[error("failed to {operation}: {cause:#}")]
    OperationFailed {
        operation: &'static str,
        cause: anyhow::Error,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ServiceError {
    fn failed(operation: &'static str, cause: anyhow::Error) -> Self {
        tracing::error!(operation, error = %format!("{cause:#}"), "repository operation failed");
        Self::OperationFailed { operation, cause }
    }
}

/// Application service over the product repositories.
///
/// Holds no state of its own beyond the repositories; concurrent writers are the
/// repositories' concern.
#[derive(Debug, Clone)]
pub struct ProductService<Q, C> {
    query: Q,
    command: C,
}

impl<Q, C> ProductService<Q, C>
where
    Q: ProductQueryRepository,
    C: ProductCommandRepository,
{
    pub fn new(query: Q, command: C) -> Self {
        Self { query, command }
    }

    pub fn find_product(
        &self,
        business_id: &BusinessId,
        id: &ProductId,
    ) -> Result<Product, ServiceError> {
        tracing::debug!(business_id = %business_id, product_id = %id, "loading product");

        let found = self
            .query
            .find_by_id(business_id, id)
            .map_err(|e| ServiceError::failed("load product", e))?;

        found.ok_or_else(|| {
            tracing::warn!(business_id = %business_id, product_id = %id, "product not found");
            ServiceError::NotFound(id.clone())
        })
    }

    pub fn list_products(&self, business_id: &BusinessId) -> Result<Vec<Product>, ServiceError> {
        let products = self
            .query
            .find_all(business_id)
            .map_err(|e| ServiceError::failed("list products", e))?;
        tracing::debug!(business_id = %business_id, count = products.len(), "listed products");
        Ok(products)
    }

    pub fn save_product(&self, product: &Product) -> Result<Product, ServiceError> {
        let saved = self
            .command
            .save(product)
            .map_err(|e| ServiceError::failed("save product", e))?;
        tracing::info!(
            business_id = %saved.business_id(),
            product_id = %saved.id(),
            variant_count = saved.variant_count(),
            "product saved"
        );
        Ok(saved)
    }

    pub fn delete_product(
        &self,
        business_id: &BusinessId,
        id: &ProductId,
    ) -> Result<(), ServiceError> {
        self.find_product(business_id, id)?;
        self.command
            .delete_by_id(business_id, id)
            .map_err(|e| ServiceError::failed("delete product", e))?;
        tracing::info!(business_id = %business_id, product_id = %id, "product deleted");
        Ok(())
    }

    /// Load, add the variant through the aggregate, persist the new snapshot.
    pub fn add_variant(
        &self,
        business_id: &BusinessId,
        id: &ProductId,
        variant: Variant,
    ) -> Result<Product, ServiceError> {
        let product = self.find_product(business_id, id)?;
        let updated = product.add_variant(variant)?;
        self.save_product(&updated)
    }

    pub fn find_summary(
        &self,
        business_id: &BusinessId,
        id: &ProductId,
    ) -> Result<ProductSummary, ServiceError> {
        let product = self.find_product(business_id, id)?;
        Ok(ProductSummary::from(&product))
    }
}
