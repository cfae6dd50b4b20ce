//! Percentage value object used for discounts.

use rust_decimal::{Decimal, RoundingStrategy};

use catalog_core::{DomainError, DomainResult, ValueObject};

/// Number of fractional digits every percentage is normalized to.
pub const PERCENTAGE_SCALE: u32 = 4;

/// A fraction in `[0, 1]`, normalized to exactly four decimal places (half-up).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Percentage(Decimal);

impl Percentage {
    /// Validate the range first, then round half-up and rescale to
    /// [`PERCENTAGE_SCALE`] digits: `0.123456789` becomes `0.1235`, `0.5` becomes
    /// `0.5000`.
    pub fn new(value: Decimal) -> DomainResult<Self> {
        if value < Decimal::ZERO || value > Decimal::ONE {
            return Err(DomainError::validation(format!(
                "Percentage must be between 0 and 1, got {value}"
            )));
        }
        let mut normalized =
            value.round_dp_with_strategy(PERCENTAGE_SCALE, RoundingStrategy::MidpointAwayFromZero);
        normalized.rescale(PERCENTAGE_SCALE);
        Ok(Self(normalized))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// `1 - value`, the factor applied to a base price by a discount.
    pub fn complement(&self) -> Decimal {
        Decimal::ONE - self.0
    }
}

impl ValueObject for Percentage {}

impl TryFrom<Decimal> for Percentage {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl core::fmt::Display for Percentage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
