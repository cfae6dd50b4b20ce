//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are opaque strings. Freshly minted ones are random UUIDv4 tokens;
//! identifiers supplied from outside (e.g. rehydrated from storage) are accepted
//! as long as they are not blank. Both paths go through the same constructor.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Produce a fresh random identifier token (canonical hyphenated UUIDv4).
///
/// Needs no coordination: 122 random bits make collisions negligible.
pub fn generate_token() -> String {
    Uuid::new_v4().to_string()
}

/// Implements the validating constructor, generation and conversions for a
/// `struct $t(String)` identifier newtype.
#[macro_export]
macro_rules! impl_string_id {
    ($t:ident, $name:literal) => {
        impl $t {
            /// Wrap an externally supplied identifier.
            ///
            /// Fails with `DomainError::Missing` when the value is empty or blank.
            pub fn new(value: impl Into<String>) -> $crate::DomainResult<Self> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err($crate::DomainError::missing(concat!(
                        $name,
                        " value cannot be empty or blank"
                    )));
                }
                Ok(Self(value))
            }

            /// Mint a new random identifier.
            pub fn generate() -> Self {
                Self($crate::id::generate_token())
            }

            pub fn value(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $t {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl ::core::str::FromStr for $t {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $t {
            type Error = $crate::DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

/// Identifier of a business (multi-tenant boundary).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BusinessId(String);

impl_string_id!(BusinessId, "BusinessId");
