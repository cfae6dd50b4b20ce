//! Variant features: descriptive facets that may contribute to price.
//!
//! The set of pricing strategies is closed, so it is modelled as the [`Feature`]
//! enum. Every strategy exposes the same descriptive capability through
//! [`FeatureDescriptor`]; the price contribution is dispatched on the variant tag.

use rust_decimal::Decimal;

use catalog_core::{DomainError, DomainResult, ValueObject};

/// Descriptive capability shared by every feature kind.
pub trait FeatureDescriptor {
    fn name(&self) -> &str;
    fn feature_description(&self) -> &str;
    fn label(&self) -> &str;
}

/// Descriptive only; never affects price.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BasicFeature {
    name: String,
    feature_description: String,
    label: String,
}

impl BasicFeature {
    pub fn new(
        name: impl Into<String>,
        feature_description: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            feature_description: feature_description.into(),
            label: label.into(),
        }
    }
}

/// Contributes a constant amount regardless of quantity.
///
/// The amount is deliberately not validated: zero and negative amounts are
/// accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FixedPriceFeature {
    name: String,
    feature_description: String,
    label: String,
    fixed_price: Decimal,
}

impl FixedPriceFeature {
    pub fn new(
        name: impl Into<String>,
        feature_description: impl Into<String>,
        label: impl Into<String>,
        fixed_price: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            feature_description: feature_description.into(),
            label: label.into(),
            fixed_price,
        }
    }

    pub fn fixed_price(&self) -> Decimal {
        self.fixed_price
    }
}

/// `price(q) = base_amount + increment_amount * q`, optionally capped at
/// `max_quantity`. A negative `max_quantity` means the quantity is unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScalingPriceFeature {
    name: String,
    feature_description: String,
    label: String,
    measurement_unit: String,
    base_amount: Decimal,
    increment_amount: Decimal,
    max_quantity: i64,
}

impl ScalingPriceFeature {
    pub fn new(
        name: impl Into<String>,
        feature_description: impl Into<String>,
        label: impl Into<String>,
        measurement_unit: impl Into<String>,
        base_amount: Decimal,
        increment_amount: Decimal,
        max_quantity: i64,
    ) -> DomainResult<Self> {
        if increment_amount < Decimal::ZERO {
            return Err(DomainError::validation(
                "increment amount must not be negative",
            ));
        }
        Ok(Self {
            name: name.into(),
            feature_description: feature_description.into(),
            label: label.into(),
            measurement_unit: measurement_unit.into(),
            base_amount,
            increment_amount,
            max_quantity,
        })
    }

    pub fn measurement_unit(&self) -> &str {
        &self.measurement_unit
    }

    pub fn base_amount(&self) -> Decimal {
        self.base_amount
    }

    pub fn increment_amount(&self) -> Decimal {
        self.increment_amount
    }

    /// Raw ceiling as configured; negative means unbounded.
    pub fn max_quantity(&self) -> i64 {
        self.max_quantity
    }

    pub fn is_unbounded(&self) -> bool {
        self.max_quantity < 0
    }

    pub fn calculate_price(&self, quantity: i64) -> DomainResult<Decimal> {
        if quantity < 0 {
            return Err(DomainError::invalid_argument(
                "Quantity must be non-negative",
            ));
        }
        if !self.is_unbounded() && quantity > self.max_quantity {
            return Err(DomainError::invalid_argument(format!(
                "Quantity exceeds maximum allowed. ({quantity} > {})",
                self.max_quantity
            )));
        }
        self.increment_amount
            .checked_mul(Decimal::from(quantity))
            .and_then(|scaled| scaled.checked_add(self.base_amount))
            .ok_or_else(|| DomainError::invalid_argument("Quantity overflows price computation"))
    }
}

macro_rules! impl_descriptor {
    ($($t:ty),+) => {
        $(
            impl FeatureDescriptor for $t {
                fn name(&self) -> &str {
                    &self.name
                }

                fn feature_description(&self) -> &str {
                    &self.feature_description
                }

                fn label(&self) -> &str {
                    &self.label
                }
            }
        )+
    };
}

impl_descriptor!(BasicFeature, FixedPriceFeature, ScalingPriceFeature);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Feature {
    Basic(BasicFeature),
    FixedPrice(FixedPriceFeature),
    ScalingPrice(ScalingPriceFeature),
}

impl Feature {
    /// Amount this feature adds to a variant's price for `quantity` units.
    ///
    /// Basic features add nothing, fixed-price features add their amount whatever
    /// the quantity, scaling features apply their formula (and its bounds).
    pub fn price_contribution(&self, quantity: i64) -> DomainResult<Decimal> {
        match self {
            Feature::Basic(_) => Ok(Decimal::ZERO),
            Feature::FixedPrice(f) => Ok(f.fixed_price()),
            Feature::ScalingPrice(f) => f.calculate_price(quantity),
        }
    }

    fn descriptor(&self) -> &dyn FeatureDescriptor {
        match self {
            Feature::Basic(f) => f,
            Feature::FixedPrice(f) => f,
            Feature::ScalingPrice(f) => f,
        }
    }
}

impl FeatureDescriptor for Feature {
    fn name(&self) -> &str {
        self.descriptor().name()
    }

    fn feature_description(&self) -> &str {
        self.descriptor().feature_description()
    }

    fn label(&self) -> &str {
        self.descriptor().label()
    }
}

impl ValueObject for Feature {}

impl From<BasicFeature> for Feature {
    fn from(value: BasicFeature) -> Self {
        Feature::Basic(value)
    }
}

impl From<FixedPriceFeature> for Feature {
    fn from(value: FixedPriceFeature) -> Self {
        Feature::FixedPrice(value)
    }
}

impl From<ScalingPriceFeature> for Feature {
    fn from(value: ScalingPriceFeature) -> Self {
        Feature::ScalingPrice(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    // Base: 5.00, increment: 2.00/unit, max: 10 units.
    fn scaling_plan() -> ScalingPriceFeature {
        ScalingPriceFeature::new(
            "SCALING_PLAN",
            "Price scales by unit count.",
            "Scaling Plan",
            "units",
            dec!(5.00),
            dec!(2.00),
            10,
        )
        .unwrap()
    }

    #[test]
    fn basic_feature_exposes_descriptive_fields() {
        let feature = BasicFeature::new("VALID_FEATURE", "A valid description.", "Valid Label");
        assert_eq!(feature.name(), "VALID_FEATURE");
        assert_eq!(feature.feature_description(), "A valid description.");
        assert_eq!(feature.label(), "Valid Label");
    }

    #[test]
    fn scaling_price_at_zero_is_base_amount() {
        assert_eq!(scaling_plan().calculate_price(0).unwrap(), dec!(5.00));
    }

    #[test]
    fn scaling_price_for_normal_quantity() {
        assert_eq!(scaling_plan().calculate_price(3).unwrap(), dec!(11.00));
    }

    #[test]
    fn scaling_price_at_max_quantity_boundary() {
        assert_eq!(scaling_plan().calculate_price(10).unwrap(), dec!(25.00));
    }

    #[test]
    fn scaling_price_rejects_negative_quantity() {
        match scaling_plan().calculate_price(-1) {
            Err(DomainError::InvalidArgument(msg)) => {
                assert!(msg.contains("Quantity must be non-negative"))
            }
            other => panic!("Expected InvalidArgument error, got {other:?}"),
        }
    }

    #[test]
    fn scaling_price_rejects_quantity_above_max() {
        match scaling_plan().calculate_price(11) {
            Err(DomainError::InvalidArgument(msg)) => {
                assert!(msg.contains("Quantity exceeds maximum allowed."))
            }
            other => panic!("Expected InvalidArgument error, got {other:?}"),
        }
    }

    #[test]
    fn negative_max_quantity_means_unbounded() {
        let unlimited = ScalingPriceFeature::new(
            "UNLIMITED_PLAN",
            "Unlimited usage.",
            "Unlimited",
            "units",
            dec!(10.00),
            dec!(1.00),
            -1,
        )
        .unwrap();

        assert!(unlimited.is_unbounded());
        assert_eq!(unlimited.calculate_price(1000).unwrap(), dec!(1010.00));
    }

    #[test]
    fn zero_max_quantity_allows_only_zero() {
        let capped = ScalingPriceFeature::new("N", "D", "L", "units", dec!(1), dec!(1), 0).unwrap();
        assert_eq!(capped.calculate_price(0).unwrap(), dec!(1));
        assert!(capped.calculate_price(1).is_err());
    }

    #[test]
    fn scaling_price_rejects_negative_increment() {
        let result = ScalingPriceFeature::new("N", "D", "L", "units", dec!(1), dec!(-0.01), 5);
        match result {
            Err(DomainError::Validation(_)) => {}
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn fixed_price_accepts_zero_and_negative_amounts() {
        let free = FixedPriceFeature::new("GIFT_WRAP", "Wrapped", "Gift wrap", dec!(0));
        let rebate = FixedPriceFeature::new("REBATE", "Rebate", "Rebate", dec!(-5.00));
        assert_eq!(free.fixed_price(), dec!(0));
        assert_eq!(rebate.fixed_price(), dec!(-5.00));
    }

    #[test]
    fn price_contribution_dispatches_on_kind() {
        let basic: Feature = BasicFeature::new("COLOR", "Red", "Color").into();
        let fixed: Feature =
            FixedPriceFeature::new("ENGRAVING", "Name", "Engraving", dec!(7.50)).into();
        let scaling: Feature = scaling_plan().into();

        assert_eq!(basic.price_contribution(4).unwrap(), dec!(0));
        assert_eq!(fixed.price_contribution(4).unwrap(), dec!(7.50));
        assert_eq!(fixed.price_contribution(-4).unwrap(), dec!(7.50));
        assert_eq!(scaling.price_contribution(4).unwrap(), dec!(13.00));
        assert!(scaling.price_contribution(-4).is_err());
    }

    #[test]
    fn enum_forwards_descriptor() {
        let feature: Feature = scaling_plan().into();
        assert_eq!(feature.name(), "SCALING_PLAN");
        assert_eq!(feature.feature_description(), "Price scales by unit count.");
        assert_eq!(feature.label(), "Scaling Plan");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: within bounds the price is exactly base + increment * q.
            #[test]
            fn scaling_price_matches_linear_formula(q in 0i64..=10) {
                let price = scaling_plan().calculate_price(q).unwrap();
                prop_assert_eq!(price, dec!(5.00) + dec!(2.00) * Decimal::from(q));
            }

            /// Property: quantities outside [0, max] are rejected.
            #[test]
            fn out_of_bounds_quantities_fail(q in prop_oneof![i64::MIN..0i64, 11i64..i64::MAX]) {
                prop_assert!(scaling_plan().calculate_price(q).is_err());
            }
        }
    }
}
