//! Aggregated subnet summary.

use super::hosts::{total_hosts, usable_hosts};
use super::network::network_bits;
use crate::conversion::{ip_to_integer, subnet_mask_to_cidr, u32_to_ip};
use crate::error::Result;
use crate::models::{Cidr, SubnetInfo};

/// Summarise the subnet containing `ip` under `mask`.
///
/// # Examples
/// ```
/// use ipv4_calc::get_subnet_info;
/// let info = get_subnet_info("192.168.1.100", "255.255.255.0").unwrap();
/// assert_eq!(info.network_address, "192.168.1.0");
/// assert_eq!(info.usable_hosts, 254);
/// ```
pub fn get_subnet_info(ip: &str, mask: &str) -> Result<SubnetInfo> {
    ip_to_integer(ip)?;
    let prefix = subnet_mask_to_cidr(mask)?;
    let network = network_bits(ip, mask)?;
    let broadcast = network | !ip_to_integer(mask)?;

    let total_hosts = total_hosts(prefix);
    let usable_hosts = usable_hosts(total_hosts);
    // Without a reserved network/broadcast pair the bounds are the subnet edges.
    let (first, last) = if total_hosts > 2 {
        (network + 1, broadcast - 1)
    } else {
        (network, broadcast)
    };

    Ok(SubnetInfo {
        network_address: u32_to_ip(network),
        broadcast_address: u32_to_ip(broadcast),
        total_hosts,
        usable_hosts,
        first_usable_host: u32_to_ip(first),
        last_usable_host: u32_to_ip(last),
    })
}

/// Summarise a subnet written as `address/prefix`.
pub fn get_subnet_info_from_cidr(cidr: &str) -> Result<SubnetInfo> {
    Cidr::new(cidr)?.subnet_info()
}
