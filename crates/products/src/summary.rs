//! Presentation-facing view of a product.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use catalog_core::AggregateRoot;

use crate::ids::{BusinessId, ProductId};
use crate::product::Product;

/// The only product data a presentation layer may read. Variant pricing is
/// intentionally absent; only the variant count crosses this boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: ProductId,
    pub business_id: BusinessId,
    pub category: String,
    pub description: String,
    pub image_urls: BTreeSet<String>,
    pub variant_count: usize,
}

impl From<&Product> for ProductSummary {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().clone(),
            business_id: product.business_id().clone(),
            category: product.category().to_string(),
            description: product.description().value().to_string(),
            image_urls: product.gallery().urls().map(str::to_string).collect(),
            variant_count: product.variant_count(),
        }
    }
}
