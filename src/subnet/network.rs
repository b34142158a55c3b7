//! Network and broadcast address derivation.

use crate::conversion::{ip_to_integer, u32_to_ip};
use crate::error::Result;

/// Network address: `ip AND mask`.
///
/// Any valid address is accepted as `mask`.
///
/// # Examples
/// ```
/// use ipv4_calc::calculate_network_address;
/// assert_eq!(
///     calculate_network_address("192.168.1.100", "255.255.255.0").unwrap(),
///     "192.168.1.0"
/// );
/// ```
pub fn calculate_network_address(ip: &str, mask: &str) -> Result<String> {
    Ok(u32_to_ip(network_bits(ip, mask)?))
}

/// Broadcast address: the network address with every mask-zero bit set.
pub fn calculate_broadcast_address(ip: &str, mask: &str) -> Result<String> {
    let mask_bits = ip_to_integer(mask)?;
    Ok(u32_to_ip(network_bits(ip, mask)? | !mask_bits))
}

pub(crate) fn network_bits(ip: &str, mask: &str) -> Result<u32> {
    Ok(ip_to_integer(ip)? & ip_to_integer(mask)?)
}
