//! Products domain module (immutable aggregate).
//!
//! This crate contains business rules for the product catalog: value objects, the
//! feature pricing model, the `Variant` entity and the `Product` aggregate root.
//! Everything here is deterministic domain logic (no IO, no HTTP, no storage);
//! persistence is reached only through the repository traits.

pub mod feature;
pub mod gallery;
pub mod ids;
pub mod money;
pub mod percentage;
pub mod product;
pub mod repository;
pub mod snapshot;
pub mod summary;
pub mod text;
pub mod variant;
pub mod weight;

pub use feature::{BasicFeature, Feature, FeatureDescriptor, FixedPriceFeature, ScalingPriceFeature};
pub use gallery::{Gallery, ImageUrl};
pub use ids::{BusinessId, ProductId, VariantId};
pub use money::Money;
pub use percentage::Percentage;
pub use product::Product;
pub use repository::{ProductCommandRepository, ProductQueryRepository};
pub use snapshot::{
    FeatureSnapshot, MoneySnapshot, ProductSnapshot, VariantSnapshot, WeightSnapshot,
};
pub use summary::ProductSummary;
pub use text::{CareInstruction, Description};
pub use variant::{Variant, VariantStatus};
pub use weight::{Weight, WeightUnit};
