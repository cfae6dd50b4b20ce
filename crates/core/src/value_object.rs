//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Their constructor is the
/// single validation gate: if a value object exists, it is valid. To "modify" one,
/// construct a new one.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (two value objects with same values are equal)
/// - **Entity**: Has identity (two entities with same ID are the same entity)
///
/// Example:
/// - `Weight { amount: 1.5, unit: Kilogram }` is a value object
/// - `Variant { id: VariantId(...), sku: "...", .. }` is an entity
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct CareInstruction(String);
///
/// impl ValueObject for CareInstruction {}
///
/// let a = CareInstruction("Wash cold".to_string());
/// let b = CareInstruction("Wash cold".to_string());
/// assert_eq!(a, b);  // Equal by value, not identity
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
