//! Monetary amounts for variant pricing.

use rust_decimal::Decimal;

use catalog_core::{DomainError, DomainResult, ValueObject};

use crate::percentage::Percentage;

/// A non-negative decimal amount in a single currency.
///
/// Amounts are kept exact (no rounding to minor units) so that discounts compose
/// without drift.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Money {
    amount: Decimal,
    currency: String,
}

impl Money {
    pub fn new(amount: Decimal, currency: impl Into<String>) -> DomainResult<Self> {
        let currency = currency.into();
        if currency.trim().is_empty() {
            return Err(DomainError::missing("currency must not be empty"));
        }
        if currency.len() != 3 || !currency.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(DomainError::validation(format!(
                "currency must be a three-letter uppercase code, got {currency:?}"
            )));
        }
        if amount < Decimal::ZERO {
            return Err(DomainError::validation("amount must not be negative"));
        }
        Ok(Self { amount, currency })
    }

    pub fn usd(amount: Decimal) -> DomainResult<Self> {
        Self::new(amount, "USD")
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn same_currency(&self, other: &Money) -> bool {
        self.currency == other.currency
    }

    /// `amount * (1 - discount)`, same currency.
    pub fn discounted_by(&self, discount: Percentage) -> Money {
        Money {
            amount: self.amount * discount.complement(),
            currency: self.currency.clone(),
        }
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.currency, self.amount)
    }
}
