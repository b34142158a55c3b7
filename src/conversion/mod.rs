//! Bit-exact conversions between address representations.
//!
//! - [`octet`] - decimal octet <-> binary octet
//! - [`address`] - dotted address <-> binary-dotted string <-> `u32`
//! - [`mask`] - CIDR prefix <-> subnet mask

mod address;
mod mask;
mod octet;

pub use address::{binary_to_ip, integer_to_ip, ip_to_binary, ip_to_integer, parse_ip_address};
pub use mask::{calculate_subnet_mask, cidr_to_subnet_mask, subnet_mask_to_cidr};
pub use octet::{convert_binary_octet_to_decimal, convert_decimal_octet_to_binary};

pub(crate) use address::u32_to_ip;
