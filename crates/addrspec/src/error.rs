//! Error types for address validation.

use crate::scanner::State;

/// Result type alias for address validation.
pub type Result<T> = std::result::Result<T, Error>;

/// Reason an address was rejected.
///
/// Offsets are byte offsets into the validated input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Input was empty.
    #[error("Address cannot be empty")]
    Empty,

    /// Input exceeds the overall length cap (in bytes).
    #[error("Address is {len} bytes long, limit is {max}")]
    TooLong {
        /// Encoded length of the input.
        len: usize,
        /// Configured cap.
        max: usize,
    },

    /// Local part exceeds its length cap (in code points).
    #[error("Local part is {len} characters long, limit is {max}")]
    LocalPartTooLong {
        /// Code points in the local part.
        len: usize,
        /// Configured cap.
        max: usize,
    },

    /// Character not allowed in the current position.
    #[error("Unexpected character {found:?} at offset {offset} ({state})")]
    UnexpectedChar {
        /// Offending character.
        found: char,
        /// Offset of the character.
        offset: usize,
        /// Scanner state when the character was read.
        state: State,
    },

    /// Backslash inside a quoted string followed by something other than `\` or `"`.
    #[error("Invalid escape \\{found} at offset {offset}")]
    InvalidEscape {
        /// Escaped character.
        found: char,
        /// Offset of the escaped character.
        offset: usize,
    },

    /// Comment opened but never closed.
    #[error("Unterminated comment starting at offset {offset}")]
    UnterminatedComment {
        /// Offset of the opening `(`.
        offset: usize,
    },

    /// Domain literal contains `:` but lacks the `IPv6:` tag.
    #[error("Domain literal [{0}] looks like IPv6 but lacks the IPv6: prefix")]
    MissingIpv6Prefix(String),

    /// Domain literal is not a valid IP address.
    #[error("Invalid IP address in domain literal: {0}")]
    InvalidIpLiteral(String),

    /// Input ended before a complete domain was read.
    #[error("Unexpected end of address ({state})")]
    Incomplete {
        /// Scanner state at end of input.
        state: State,
    },
}

impl Error {
    /// Returns true if the rejection came from one of the length caps.
    #[must_use]
    pub const fn is_length(&self) -> bool {
        matches!(self, Self::TooLong { .. } | Self::LocalPartTooLong { .. })
    }

    /// Returns the byte offset the error points at, if any.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::UnexpectedChar { offset, .. }
            | Self::InvalidEscape { offset, .. }
            | Self::UnterminatedComment { offset } => Some(*offset),
            _ => None,
        }
    }
}
