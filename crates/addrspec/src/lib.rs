//! # addrspec
//!
//! Syntactic validation of email addresses against a practical subset of
//! the RFC 5321/5322 `addr-spec` grammar.
//!
//! ## Features
//!
//! - **Dot-atom and quoted local parts**, with `\"` and `\\` escapes
//! - **Comments** (`(...)`) around atoms in the local part and domain
//! - **Domain literals**: `[192.0.2.1]` and `[IPv6:2001:db8::1]`
//! - **Length caps**: 254 bytes overall, 64 code points of local part
//! - **Reason codes**: every rejection reports why it failed
//!
//! No DNS lookups, no normalization, no IDN conversion: the input is
//! checked as written.
//!
//! ## Quick Start
//!
//! ```
//! use addrspec::{is_valid, Address};
//!
//! assert!(is_valid("first.last@iana.org"));
//! assert!(is_valid(r#""much.more unusual"@example.com"#));
//! assert!(is_valid("user@[IPv6:2001:db8::1]"));
//! assert!(!is_valid("john..doe@example.com"));
//!
//! let addr = Address::new("(comment)user@example.com")?;
//! assert_eq!(addr.domain(), "example.com");
//! # Ok::<(), addrspec::Error>(())
//! ```
//!
//! ### Rejection reasons
//!
//! ```
//! use addrspec::{validate, Error};
//!
//! assert_eq!(validate(""), Err(Error::Empty));
//! assert!(matches!(
//!     validate("user@[666.666.666.666]"),
//!     Err(Error::InvalidIpLiteral(_))
//! ));
//! ```
//!
//! ## Modules
//!
//! - [`charset`]: local-part and domain character classes
//! - [`literal`]: domain literal classification

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod address;
mod error;
mod limits;
mod scanner;

pub mod charset;
pub mod literal;

pub use address::Address;
pub use error::{Error, Result};
pub use limits::{Limits, MAX_ADDRESS_LEN, MAX_LOCAL_PART_LEN};
pub use literal::DomainLiteral;
pub use scanner::{Scan, State as ScanState, validate_with};

/// Returns true if `input` is a syntactically valid email address.
#[must_use]
pub fn is_valid(input: &str) -> bool {
    validate(input).is_ok()
}

/// Validates `input` with the default limits.
///
/// # Errors
///
/// Returns the reason the input was rejected.
pub fn validate(input: &str) -> Result<()> {
    validate_with(input, &Limits::default()).map(|_| ())
}
