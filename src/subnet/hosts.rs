//! Usable host enumeration.

use super::network::network_bits;
use crate::conversion::{ip_to_integer, subnet_mask_to_cidr, u32_to_ip};
use crate::error::Result;
use crate::models::MAX_LENGTH;

/// Every usable host between the network and broadcast addresses, exclusive.
///
/// `network` may be any address inside the subnet. Empty for `/31` and `/32`.
/// The list for short prefixes is very large, callers bound the size.
///
/// # Examples
/// ```
/// use ipv4_calc::calculate_available_ips;
/// assert_eq!(
///     calculate_available_ips("192.168.1.0", "255.255.255.252").unwrap(),
///     vec!["192.168.1.1", "192.168.1.2"]
/// );
/// ```
pub fn calculate_available_ips(network: &str, mask: &str) -> Result<Vec<String>> {
    ip_to_integer(network)?;
    let prefix = subnet_mask_to_cidr(mask)?;
    if prefix >= MAX_LENGTH - 1 {
        return Ok(Vec::new());
    }
    let first = network_bits(network, mask)?;
    let last = first | !ip_to_integer(mask)?;
    log::trace!(
        "calculate_available_ips: {} hosts in {network}/{prefix}",
        last - first - 1
    );
    Ok((first + 1..last).map(u32_to_ip).collect())
}

/// Number of usable hosts for a subnet mask.
///
/// `/31` counts both addresses, `/32` counts none.
pub fn get_available_hosts_count(mask: &str) -> Result<u64> {
    let prefix = subnet_mask_to_cidr(mask)?;
    Ok(usable_hosts(total_hosts(prefix)))
}

pub(crate) fn total_hosts(prefix: u8) -> u64 {
    1u64 << (MAX_LENGTH - prefix)
}

pub(crate) fn usable_hosts(total_hosts: u64) -> u64 {
    match total_hosts {
        t if t > 2 => t - 2,
        2 => 2,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Ipv4Error;

    #[test]
    fn test_calculate_available_ips() {
        let hosts = calculate_available_ips("10.0.0.0", "255.255.255.248").unwrap();
        assert_eq!(
            hosts,
            vec!["10.0.0.1", "10.0.0.2", "10.0.0.3", "10.0.0.4", "10.0.0.5", "10.0.0.6"]
        );

        let hosts = calculate_available_ips("192.168.1.0", "255.255.255.0").unwrap();
        assert_eq!(hosts.len(), 254);
        assert_eq!(hosts.first().unwrap(), "192.168.1.1");
        assert_eq!(hosts.last().unwrap(), "192.168.1.254");
    }

    #[test]
    fn test_calculate_available_ips_host_address() {
        // A host inside the subnet gives the same list as the network address.
        assert_eq!(
            calculate_available_ips("10.0.0.5", "255.255.255.252").unwrap(),
            vec!["10.0.0.5", "10.0.0.6"]
        );
    }

    #[test]
    fn test_calculate_available_ips_tiny_subnets() {
        assert!(calculate_available_ips("10.0.0.0", "255.255.255.254")
            .unwrap()
            .is_empty());
        assert!(calculate_available_ips("10.0.0.0", "255.255.255.255")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_calculate_available_ips_errors() {
        assert_eq!(
            calculate_available_ips("10.0.0", "255.255.255.0"),
            Err(Ipv4Error::InvalidAddress("10.0.0".to_string()))
        );
        assert_eq!(
            calculate_available_ips("10.0.0.0", "255.0.255.0"),
            Err(Ipv4Error::InvalidSubnetMask("255.0.255.0".to_string()))
        );
    }

    #[test]
    fn test_get_available_hosts_count() {
        assert_eq!(get_available_hosts_count("0.0.0.0").unwrap(), 4294967294);
        assert_eq!(get_available_hosts_count("255.255.0.0").unwrap(), 65534);
        assert_eq!(get_available_hosts_count("255.255.255.0").unwrap(), 254);
        assert_eq!(get_available_hosts_count("255.255.255.252").unwrap(), 2);
        assert_eq!(get_available_hosts_count("255.255.255.254").unwrap(), 2);
        assert_eq!(get_available_hosts_count("255.255.255.255").unwrap(), 0);
        assert!(get_available_hosts_count("255.255.255.1").is_err());
    }
}
