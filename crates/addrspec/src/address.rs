//! Validated email address type.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::limits::Limits;
use crate::literal::DomainLiteral;
use crate::scanner::validate_with;

/// Syntactically valid email address.
///
/// The original text is kept verbatim, comments included.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    raw: String,
    separator: usize,
    literal: Option<DomainLiteral>,
}

impl Address {
    /// Creates a new address from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is invalid.
    pub fn new(addr: impl Into<String>) -> Result<Self> {
        Self::with_limits(addr, &Limits::default())
    }

    /// Creates a new address, checking it against custom limits.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is invalid.
    pub fn with_limits(addr: impl Into<String>, limits: &Limits) -> Result<Self> {
        let raw = addr.into();
        let scan = validate_with(&raw, limits)?;
        Ok(Self {
            raw,
            separator: scan.separator,
            literal: scan.literal,
        })
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the text before the separating `@`.
    #[must_use]
    pub fn local_part(&self) -> &str {
        &self.raw[..self.separator]
    }

    /// Returns the text after the separating `@`.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.raw[self.separator + 1..]
    }

    /// Returns the domain literal, if the domain is one.
    #[must_use]
    pub const fn domain_literal(&self) -> Option<DomainLiteral> {
        self.literal
    }

    /// Consumes the address, returning the original string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.raw
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Address {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Address {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::new(s)
    }
}

impl From<Address> for String {
    fn from(addr: Address) -> Self {
        addr.into_inner()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Address {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}
