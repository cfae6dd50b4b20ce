//! Free-text value objects.
//!
//! Both wrap plain text. Absence is ruled out by the type system, so any string
//! (including an empty one) is a valid value.

use catalog_core::ValueObject;

/// Product description.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Description(String);

impl Description {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Description {}

/// Care instructions attached to a variant (washing, handling).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CareInstruction(String);

impl CareInstruction {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl ValueObject for CareInstruction {}
