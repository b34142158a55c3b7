//! Sequential stepping through the address space.

use crate::conversion::{ip_to_integer, u32_to_ip};
use crate::error::Result;

/// The following address; `255.255.255.255` wraps to `0.0.0.0`.
///
/// # Examples
/// ```
/// use ipv4_calc::get_next_ip_address;
/// assert_eq!(get_next_ip_address("192.168.1.255").unwrap(), "192.168.2.0");
/// assert_eq!(get_next_ip_address("255.255.255.255").unwrap(), "0.0.0.0");
/// ```
pub fn get_next_ip_address(ip: &str) -> Result<String> {
    Ok(u32_to_ip(ip_to_integer(ip)?.wrapping_add(1)))
}

/// The preceding address; `0.0.0.0` wraps to `255.255.255.255`.
pub fn get_previous_ip_address(ip: &str) -> Result<String> {
    Ok(u32_to_ip(ip_to_integer(ip)?.wrapping_sub(1)))
}
