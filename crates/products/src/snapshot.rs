//! Serializable storage snapshots.
//!
//! Snapshots mirror the aggregate field by field, with every field optional so
//! that incomplete records coming back from storage are reported as `Missing`
//! instead of failing deserialization. Converting a snapshot into a domain type
//! always goes through the same validating constructors as fresh creation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use catalog_core::{AggregateRoot, DomainError, DomainResult, Entity};

use crate::feature::{
    BasicFeature, Feature, FeatureDescriptor, FixedPriceFeature, ScalingPriceFeature,
};
use crate::gallery::{Gallery, ImageUrl};
use crate::ids::{BusinessId, ProductId, VariantId};
use crate::money::Money;
use crate::product::Product;
use crate::text::{CareInstruction, Description};
use crate::variant::{Variant, VariantStatus};
use crate::weight::{Weight, WeightUnit};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub id: Option<String>,
    pub business_id: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub image_urls: Option<Vec<String>>,
    pub variants: Option<Vec<VariantSnapshot>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariantSnapshot {
    pub id: Option<String>,
    pub sku: Option<String>,
    pub base_price: Option<MoneySnapshot>,
    pub current_price: Option<MoneySnapshot>,
    pub features: Option<Vec<FeatureSnapshot>>,
    pub care_instructions: Option<String>,
    pub weight: Option<WeightSnapshot>,
    pub status: Option<VariantStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoneySnapshot {
    pub amount: Option<Decimal>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightSnapshot {
    pub amount: Option<Decimal>,
    pub unit: Option<WeightUnit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeatureSnapshot {
    Basic {
        name: Option<String>,
        feature_description: Option<String>,
        label: Option<String>,
    },
    FixedPrice {
        name: Option<String>,
        feature_description: Option<String>,
        label: Option<String>,
        fixed_price: Option<Decimal>,
    },
    ScalingPrice {
        name: Option<String>,
        feature_description: Option<String>,
        label: Option<String>,
        measurement_unit: Option<String>,
        base_amount: Option<Decimal>,
        increment_amount: Option<Decimal>,
        max_quantity: Option<i64>,
    },
}

fn required<T>(value: Option<T>, field: &str) -> DomainResult<T> {
    value.ok_or_else(|| DomainError::missing(format!("{field} must not be null")))
}

// -------------------------
// Domain -> snapshot
// -------------------------

impl From<&Money> for MoneySnapshot {
    fn from(money: &Money) -> Self {
        Self {
            amount: Some(money.amount()),
            currency: Some(money.currency().to_string()),
        }
    }
}

impl From<&Weight> for WeightSnapshot {
    fn from(weight: &Weight) -> Self {
        Self {
            amount: Some(weight.amount()),
            unit: Some(weight.unit()),
        }
    }
}

impl From<&Feature> for FeatureSnapshot {
    fn from(feature: &Feature) -> Self {
        let name = Some(feature.name().to_string());
        let feature_description = Some(feature.feature_description().to_string());
        let label = Some(feature.label().to_string());
        match feature {
            Feature::Basic(_) => FeatureSnapshot::Basic {
                name,
                feature_description,
                label,
            },
            Feature::FixedPrice(f) => FeatureSnapshot::FixedPrice {
                name,
                feature_description,
                label,
                fixed_price: Some(f.fixed_price()),
            },
            Feature::ScalingPrice(f) => FeatureSnapshot::ScalingPrice {
                name,
                feature_description,
                label,
                measurement_unit: Some(f.measurement_unit().to_string()),
                base_amount: Some(f.base_amount()),
                increment_amount: Some(f.increment_amount()),
                max_quantity: Some(f.max_quantity()),
            },
        }
    }
}

impl From<&Variant> for VariantSnapshot {
    fn from(variant: &Variant) -> Self {
        Self {
            id: Some(variant.id().to_string()),
            sku: Some(variant.sku().to_string()),
            base_price: Some(variant.base_price().into()),
            current_price: Some(variant.current_price().into()),
            features: Some(variant.features().iter().map(FeatureSnapshot::from).collect()),
            care_instructions: Some(variant.care_instructions().value().to_string()),
            weight: Some(variant.weight().into()),
            status: Some(variant.status()),
        }
    }
}

impl From<&Product> for ProductSnapshot {
    fn from(product: &Product) -> Self {
        Self {
            id: Some(product.id().to_string()),
            business_id: Some(product.business_id().to_string()),
            category: Some(product.category().to_string()),
            description: Some(product.description().value().to_string()),
            image_urls: Some(product.gallery().urls().map(str::to_string).collect()),
            variants: Some(product.variants().map(VariantSnapshot::from).collect()),
        }
    }
}

// -------------------------
// Snapshot -> domain
// -------------------------

impl TryFrom<MoneySnapshot> for Money {
    type Error = DomainError;

    fn try_from(value: MoneySnapshot) -> Result<Self, Self::Error> {
        Money::new(
            required(value.amount, "amount")?,
            required(value.currency, "currency")?,
        )
    }
}

impl TryFrom<WeightSnapshot> for Weight {
    type Error = DomainError;

    fn try_from(value: WeightSnapshot) -> Result<Self, Self::Error> {
        Weight::new(
            required(value.amount, "weight amount")?,
            required(value.unit, "weight unit")?,
        )
    }
}

impl TryFrom<FeatureSnapshot> for Feature {
    type Error = DomainError;

    fn try_from(value: FeatureSnapshot) -> Result<Self, Self::Error> {
        let feature = match value {
            FeatureSnapshot::Basic {
                name,
                feature_description,
                label,
            } => BasicFeature::new(
                required(name, "name")?,
                required(feature_description, "feature description")?,
                required(label, "label")?,
            )
            .into(),
            FeatureSnapshot::FixedPrice {
                name,
                feature_description,
                label,
                fixed_price,
            } => FixedPriceFeature::new(
                required(name, "name")?,
                required(feature_description, "feature description")?,
                required(label, "label")?,
                required(fixed_price, "fixed price")?,
            )
            .into(),
            FeatureSnapshot::ScalingPrice {
                name,
                feature_description,
                label,
                measurement_unit,
                base_amount,
                increment_amount,
                max_quantity,
            } => ScalingPriceFeature::new(
                required(name, "name")?,
                required(feature_description, "feature description")?,
                required(label, "label")?,
                required(measurement_unit, "measurement unit")?,
                required(base_amount, "base amount")?,
                required(increment_amount, "increment amount")?,
                required(max_quantity, "max quantity")?,
            )?
            .into(),
        };
        Ok(feature)
    }
}

impl TryFrom<VariantSnapshot> for Variant {
    type Error = DomainError;

    fn try_from(value: VariantSnapshot) -> Result<Self, Self::Error> {
        let features = required(value.features, "features")?
            .into_iter()
            .map(Feature::try_from)
            .collect::<DomainResult<Vec<_>>>()?;

        Variant::new(
            VariantId::new(required(value.id, "id")?)?,
            required(value.sku, "sku")?,
            required(value.base_price, "basePrice")?.try_into()?,
            required(value.current_price, "currentPrice")?.try_into()?,
            features,
            CareInstruction::new(required(value.care_instructions, "careInstructions")?),
            required(value.weight, "weight")?.try_into()?,
            required(value.status, "status")?,
        )
    }
}

impl TryFrom<ProductSnapshot> for Product {
    type Error = DomainError;

    fn try_from(value: ProductSnapshot) -> Result<Self, Self::Error> {
        let images = required(value.image_urls, "gallery")?
            .into_iter()
            .map(ImageUrl::new)
            .collect::<DomainResult<Vec<_>>>()?;
        let variants = required(value.variants, "variants")?
            .into_iter()
            .map(Variant::try_from)
            .collect::<DomainResult<Vec<_>>>()?;

        Product::rehydrate(
            ProductId::new(required(value.id, "id")?)?,
            BusinessId::new(required(value.business_id, "businessId")?)?,
            required(value.category, "category")?,
            Description::new(required(value.description, "description")?),
            Gallery::new(images),
            variants,
        )
    }
}
