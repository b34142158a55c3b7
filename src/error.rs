//! Error type shared by every conversion and derived operation.
//!
//! Validators never fail, they answer `bool`. Everything else returns
//! [`Result`] and reports the offending input.

use thiserror::Error;

/// Errors returned when an input fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Ipv4Error {
    /// A single decimal or binary octet is malformed.
    #[error("invalid octet: {0:?}")]
    InvalidOctet(String),

    /// A dotted-decimal address is malformed.
    #[error("invalid IPv4 address: {0:?}")]
    InvalidAddress(String),

    /// A binary-dotted address is malformed.
    #[error("invalid binary IPv4 address: {0:?}")]
    InvalidBinaryAddress(String),

    /// The address is well formed but its bits are not contiguous ones then zeros.
    #[error("invalid subnet mask: {0:?}")]
    InvalidSubnetMask(String),

    /// An `address/prefix` string is malformed.
    #[error("invalid CIDR notation: {0:?}")]
    InvalidCidr(String),

    /// Prefix length outside `0..=32`.
    #[error("invalid prefix length {0}, expected 0..=32")]
    InvalidPrefix(u8),

    /// Integer outside the 32-bit address space.
    #[error("invalid address integer {0}, expected 0..=4294967295")]
    InvalidInteger(u64),

    /// Range requested with the start above the end.
    #[error("range start {start} is greater than end {end}")]
    RangeOrder {
        /// First address of the requested range.
        start: String,
        /// Last address of the requested range.
        end: String,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Ipv4Error>;
