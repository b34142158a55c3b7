//! Numeric address comparison.

use crate::conversion::ip_to_integer;
use crate::error::Result;
use std::cmp::Ordering;

/// Order two addresses by their 32-bit value, not by their text.
///
/// `Less`, `Equal` and `Greater` correspond to `-1`, `0` and `1`
/// (`ordering as i8`).
///
/// # Examples
/// ```
/// use ipv4_calc::compare_ip_addresses;
/// use std::cmp::Ordering;
/// assert_eq!(
///     compare_ip_addresses("192.168.1.2", "192.168.1.10").unwrap(),
///     Ordering::Less
/// );
/// ```
pub fn compare_ip_addresses(a: &str, b: &str) -> Result<Ordering> {
    Ok(ip_to_integer(a)?.cmp(&ip_to_integer(b)?))
}

/// Do both strings denote the same address?
pub fn are_ip_addresses_equal(a: &str, b: &str) -> Result<bool> {
    Ok(compare_ip_addresses(a, b)? == Ordering::Equal)
}
