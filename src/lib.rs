//! IPv4 address validation, conversion and subnet arithmetic.
//!
//! Every function is pure: strings and integers in, strings, integers or an
//! [`Ipv4Error`] out. Layers, leaves first:
//! - [`validation`] - octet and address predicates
//! - [`conversion`] - decimal <-> binary <-> `u32`, prefix <-> mask
//! - [`subnet`] - network/broadcast addresses, hosts, [`SubnetInfo`]
//! - [`operations`] - stepping, ranges, comparison, classification
//!
//! All public functions are re-exported here.

pub mod conversion;
pub mod error;
pub mod models;
pub mod operations;
pub mod subnet;
pub mod validation;

pub use conversion::{
    binary_to_ip, calculate_subnet_mask, cidr_to_subnet_mask, convert_binary_octet_to_decimal,
    convert_decimal_octet_to_binary, integer_to_ip, ip_to_binary, ip_to_integer,
    parse_ip_address, subnet_mask_to_cidr,
};
pub use error::{Ipv4Error, Result};
pub use models::{AddressScope, Cidr, SubnetInfo};
pub use operations::{
    are_ip_addresses_equal, classify_ip, compare_ip_addresses, get_ip_range, get_next_ip_address,
    get_previous_ip_address, is_ip_address_in_subnet, is_private_ip, is_public_ip,
};
pub use subnet::{
    calculate_available_ips, calculate_broadcast_address, calculate_network_address,
    get_available_hosts_count, get_subnet_info, get_subnet_info_from_cidr,
};
pub use validation::{
    is_valid_binary_ip, is_valid_binary_ip_address, is_valid_binary_octet, is_valid_cidr,
    is_valid_decimal_octet, is_valid_ip_address, is_valid_prefix, is_valid_subnet_mask,
};
