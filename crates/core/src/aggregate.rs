//! Aggregate root trait for immutable, copy-on-write domain models.

/// Aggregate root marker + minimal interface.
///
/// Aggregates in this codebase are immutable values: every behavioural method
/// takes `&self` and returns a new, fully validated instance (or an error),
/// leaving the receiver untouched. Any snapshot a caller holds therefore stays
/// valid forever and can be shared across threads without synchronization.
///
/// Aggregates must not perform IO or side effects.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;
}
