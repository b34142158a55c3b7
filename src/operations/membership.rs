//! Subnet membership.

use crate::error::Result;
use crate::subnet::calculate_network_address;

/// Is `ip` inside the subnet given by `network` and `mask`?
///
/// Both sides are masked, so `network` may be any address of the subnet.
pub fn is_ip_address_in_subnet(ip: &str, network: &str, mask: &str) -> Result<bool> {
    Ok(calculate_network_address(ip, mask)? == calculate_network_address(network, mask)?)
}
