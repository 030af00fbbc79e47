//! Domain literals (`[192.0.2.1]`, `[IPv6:2001:db8::1]`).

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::error::{Error, Result};

/// Tag required in front of IPv6 domain literals.
pub const IPV6_TAG: &str = "IPv6:";

/// Address carried by a bracketed domain literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainLiteral {
    /// Dotted-decimal IPv4 address.
    Ipv4(Ipv4Addr),
    /// IPv6 address, written with the `IPv6:` tag.
    Ipv6(Ipv6Addr),
}

impl DomainLiteral {
    /// Classifies the text between `[` and `]`.
    ///
    /// Text containing a `:` must carry the `IPv6:` tag and parse as IPv6;
    /// anything else must parse as IPv4.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingIpv6Prefix`] or [`Error::InvalidIpLiteral`].
    pub fn parse(interior: &str) -> Result<Self> {
        if interior.contains(':') {
            let Some(addr) = interior.strip_prefix(IPV6_TAG) else {
                return Err(Error::MissingIpv6Prefix(interior.to_string()));
            };
            addr.parse()
                .map(Self::Ipv6)
                .map_err(|_| Error::InvalidIpLiteral(interior.to_string()))
        } else {
            interior
                .parse()
                .map(Self::Ipv4)
                .map_err(|_| Error::InvalidIpLiteral(interior.to_string()))
        }
    }

    /// Returns the literal as an IP address.
    #[must_use]
    pub const fn ip(&self) -> IpAddr {
        match *self {
            Self::Ipv4(addr) => IpAddr::V4(addr),
            Self::Ipv6(addr) => IpAddr::V6(addr),
        }
    }
}

impl fmt::Display for DomainLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ipv4(addr) => write!(f, "[{addr}]"),
            Self::Ipv6(addr) => write!(f, "[{IPV6_TAG}{addr}]"),
        }
    }
}

impl From<DomainLiteral> for IpAddr {
    fn from(literal: DomainLiteral) -> Self {
        literal.ip()
    }
}
