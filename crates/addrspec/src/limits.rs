//! Length limits applied to an address.

/// Maximum encoded length of a whole address, in bytes (RFC 5321).
pub const MAX_ADDRESS_LEN: usize = 254;

/// Maximum length of the local part, in code points (RFC 5321).
pub const MAX_LOCAL_PART_LEN: usize = 64;

/// Length caps checked by the scanner.
///
/// The two caps use different units: the overall cap counts UTF-8 bytes of
/// the raw input, the local-part cap counts code points accepted into the
/// local part (comments excluded).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Limits {
    /// Overall cap in bytes.
    pub max_address_len: usize,
    /// Local part cap in code points.
    pub max_local_part_len: usize,
}

impl Limits {
    /// Creates limits with the RFC 5321 defaults.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_address_len: MAX_ADDRESS_LEN,
            max_local_part_len: MAX_LOCAL_PART_LEN,
        }
    }

    /// Sets the overall cap.
    #[must_use]
    pub const fn with_max_address_len(mut self, len: usize) -> Self {
        self.max_address_len = len;
        self
    }

    /// Sets the local part cap.
    #[must_use]
    pub const fn with_max_local_part_len(mut self, len: usize) -> Self {
        self.max_local_part_len = len;
        self
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::new()
    }
}
