//! Well-formedness checks for octets, addresses, masks and CIDR strings.
//!
//! - [`octet`] - single decimal or binary field, prefix length
//! - [`address`] - whole dotted addresses, binary addresses, masks, CIDR
//!
//! All validators are pure predicates and never fail.

mod address;
mod octet;

pub use address::{
    is_valid_binary_ip, is_valid_binary_ip_address, is_valid_cidr, is_valid_ip_address,
    is_valid_subnet_mask, BINARY_IP_LENGTH,
};
pub use octet::{is_valid_binary_octet, is_valid_decimal_octet, is_valid_prefix};
