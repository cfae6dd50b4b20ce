//! Variant entity: a sellable configuration of a product.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use catalog_core::{DomainError, DomainResult, Entity};

use crate::feature::Feature;
use crate::ids::VariantId;
use crate::money::Money;
use crate::percentage::Percentage;
use crate::text::CareInstruction;
use crate::weight::Weight;

/// Variant status lifecycle.
///
/// `activate` is refused from `Discontinued`; `deactivate` and
/// `mark_as_discontinued` are accepted from every state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantStatus {
    Draft,
    Active,
    Inactive,
    Discontinued,
}

/// Entity: Variant.
///
/// Immutable. Every behaviour returns a new instance and keeps `id` and `sku`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    id: VariantId,
    sku: String,
    base_price: Money,
    current_price: Money,
    features: Vec<Feature>,
    care_instructions: CareInstruction,
    weight: Weight,
    status: VariantStatus,
}

impl Variant {
    /// Validating constructor, shared by [`Variant::create_draft`] and rehydration.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: VariantId,
        sku: impl Into<String>,
        base_price: Money,
        current_price: Money,
        features: Vec<Feature>,
        care_instructions: CareInstruction,
        weight: Weight,
        status: VariantStatus,
    ) -> DomainResult<Self> {
        let sku = sku.into();
        if sku.trim().is_empty() {
            return Err(DomainError::missing("sku must not be empty"));
        }
        ensure_same_currency(&base_price, &current_price)?;

        Ok(Self {
            id,
            sku,
            base_price,
            current_price,
            features,
            care_instructions,
            weight,
            status,
        })
    }

    /// New `Draft` variant with a generated id and SKU; current price starts at
    /// the base price.
    pub fn create_draft(
        base_price: Money,
        weight: Weight,
        care_instructions: CareInstruction,
        features: Vec<Feature>,
    ) -> DomainResult<Self> {
        Self::new(
            VariantId::generate(),
            generate_sku(),
            base_price.clone(),
            base_price,
            features,
            care_instructions,
            weight,
            VariantStatus::Draft,
        )
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn base_price(&self) -> &Money {
        &self.base_price
    }

    pub fn current_price(&self) -> &Money {
        &self.current_price
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn care_instructions(&self) -> &CareInstruction {
        &self.care_instructions
    }

    pub fn weight(&self) -> &Weight {
        &self.weight
    }

    pub fn status(&self) -> VariantStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == VariantStatus::Active
    }

    // --- pricing ---

    /// Replaces the base price only; the current price is left as it was.
    pub fn change_base_price(&self, new_base_price: Money) -> DomainResult<Self> {
        ensure_same_currency(&new_base_price, &self.current_price)?;
        Ok(Self {
            base_price: new_base_price,
            ..self.clone()
        })
    }

    pub fn change_current_price(&self, new_current_price: Money) -> DomainResult<Self> {
        ensure_same_currency(&self.base_price, &new_current_price)?;
        Ok(Self {
            current_price: new_current_price,
            ..self.clone()
        })
    }

    /// `current_price = base_price * (1 - discount)`.
    pub fn apply_discount(&self, discount: Percentage) -> Self {
        Self {
            current_price: self.base_price.discounted_by(discount),
            ..self.clone()
        }
    }

    pub fn remove_discount(&self) -> Self {
        Self {
            current_price: self.base_price.clone(),
            ..self.clone()
        }
    }

    // --- lifecycle ---

    pub fn activate(&self) -> DomainResult<Self> {
        if self.status == VariantStatus::Discontinued {
            return Err(DomainError::illegal_state(
                "Cannot activate a discontinued variant.",
            ));
        }
        Ok(self.with_status(VariantStatus::Active))
    }

    pub fn deactivate(&self) -> Self {
        self.with_status(VariantStatus::Inactive)
    }

    pub fn mark_as_discontinued(&self) -> Self {
        self.with_status(VariantStatus::Discontinued)
    }

    /// Compares physical/descriptive attributes only (care instructions, weight,
    /// features in order); identity, SKU, prices and status are ignored.
    pub fn has_same_attributes(&self, other: Option<&Variant>) -> bool {
        match other {
            None => false,
            Some(other) => {
                self.care_instructions == other.care_instructions
                    && self.weight == other.weight
                    && self.features == other.features
            }
        }
    }

    fn with_status(&self, status: VariantStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

impl Entity for Variant {
    type Id = VariantId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Variant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Variant[id={}, sku={}, basePrice={}, currentPrice={}, features={}, status={:?}]",
            self.id,
            self.sku,
            self.base_price,
            self.current_price,
            self.features.len(),
            self.status
        )
    }
}

/// `VARIANT-` + eight upper-case hex characters from a random UUID.
///
/// Best-effort uniqueness only (32 random bits).
fn generate_sku() -> String {
    let token = Uuid::new_v4().simple().to_string();
    format!("VARIANT-{}", token[..8].to_uppercase())
}

fn ensure_same_currency(base: &Money, current: &Money) -> DomainResult<()> {
    if !base.same_currency(current) {
        return Err(DomainError::validation(format!(
            "base price and current price must share a currency ({} vs {})",
            base.currency(),
            current.currency()
        )));
    }
    Ok(())
}
