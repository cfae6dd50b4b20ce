//! Physical weight of a variant.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, DomainResult, ValueObject};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Gram,
    Kilogram,
    Pound,
    Ounce,
}

impl WeightUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            WeightUnit::Gram => "g",
            WeightUnit::Kilogram => "kg",
            WeightUnit::Pound => "lb",
            WeightUnit::Ounce => "oz",
        }
    }
}

/// Decimal amount + unit. Equality is numeric on the amount (`1.5 kg == 1.50 kg`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Weight {
    amount: Decimal,
    unit: WeightUnit,
}

impl Weight {
    pub fn new(amount: Decimal, unit: WeightUnit) -> DomainResult<Self> {
        if amount < Decimal::ZERO {
            return Err(DomainError::validation("weight must not be negative"));
        }
        Ok(Self { amount, unit })
    }

    pub fn kilograms(amount: Decimal) -> DomainResult<Self> {
        Self::new(amount, WeightUnit::Kilogram)
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn unit(&self) -> WeightUnit {
        self.unit
    }
}

impl ValueObject for Weight {}

impl core::fmt::Display for Weight {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.amount, self.unit.symbol())
    }
}
