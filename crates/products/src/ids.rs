//! Catalog identifiers.

use serde::{Deserialize, Serialize};

pub use catalog_core::BusinessId;

/// Product identifier (tenant-scoped via the product's `business_id`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

catalog_core::impl_string_id!(ProductId, "ProductId");

/// Variant identifier, unique within its owning product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VariantId(String);

catalog_core::impl_string_id!(VariantId, "VariantId");
