//! CIDR prefix <-> subnet mask.

use super::address::ip_to_binary;
use super::octet::convert_binary_octet_to_decimal;
use crate::error::{Ipv4Error, Result};
use crate::models::MAX_LENGTH;
use crate::validation::{is_valid_ip_address, is_valid_subnet_mask};
use itertools::Itertools;

/// Convert a prefix length to a dotted subnet mask.
///
/// # Examples
/// ```
/// use ipv4_calc::cidr_to_subnet_mask;
/// assert_eq!(cidr_to_subnet_mask(24).unwrap(), "255.255.255.0");
/// assert_eq!(cidr_to_subnet_mask(0).unwrap(), "0.0.0.0");
/// assert!(cidr_to_subnet_mask(33).is_err());
/// ```
pub fn cidr_to_subnet_mask(prefix: u8) -> Result<String> {
    if prefix > MAX_LENGTH {
        log::debug!("cidr_to_subnet_mask: prefix {prefix} too long");
        return Err(Ipv4Error::InvalidPrefix(prefix));
    }
    let ones = usize::from(prefix);
    let bits = format!("{}{}", "1".repeat(ones), "0".repeat(MAX_LENGTH as usize - ones));
    itertools::process_results(
        (0..4).map(|i| convert_binary_octet_to_decimal(&bits[i * 8..(i + 1) * 8])),
        |mut octets| octets.join("."),
    )
}

/// Same as [`cidr_to_subnet_mask`].
pub fn calculate_subnet_mask(prefix_length: u8) -> Result<String> {
    cidr_to_subnet_mask(prefix_length)
}

/// Convert a dotted subnet mask to its prefix length.
pub fn subnet_mask_to_cidr(mask: &str) -> Result<u8> {
    if !is_valid_ip_address(mask) || !is_valid_subnet_mask(mask) {
        log::debug!("subnet_mask_to_cidr: rejecting {mask:?}");
        return Err(Ipv4Error::InvalidSubnetMask(mask.to_string()));
    }
    let ones = ip_to_binary(mask)?.chars().filter(|c| *c == '1').count();
    u8::try_from(ones).map_err(|_| Ipv4Error::InvalidSubnetMask(mask.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cidr_to_subnet_mask() {
        assert_eq!(cidr_to_subnet_mask(1).unwrap(), "128.0.0.0");
        assert_eq!(cidr_to_subnet_mask(8).unwrap(), "255.0.0.0");
        assert_eq!(cidr_to_subnet_mask(16).unwrap(), "255.255.0.0");
        assert_eq!(cidr_to_subnet_mask(20).unwrap(), "255.255.240.0");
        assert_eq!(cidr_to_subnet_mask(30).unwrap(), "255.255.255.252");
        assert_eq!(cidr_to_subnet_mask(32).unwrap(), "255.255.255.255");
        assert_eq!(cidr_to_subnet_mask(33), Err(Ipv4Error::InvalidPrefix(33)));
        assert_eq!(calculate_subnet_mask(24).unwrap(), "255.255.255.0");
    }

    #[test]
    fn test_subnet_mask_to_cidr() {
        assert_eq!(subnet_mask_to_cidr("255.255.255.0").unwrap(), 24);
        assert_eq!(subnet_mask_to_cidr("255.255.0.0").unwrap(), 16);
        assert_eq!(subnet_mask_to_cidr("255.255.255.254").unwrap(), 31);
        assert_eq!(subnet_mask_to_cidr("0.0.0.0").unwrap(), 0);
        assert_eq!(subnet_mask_to_cidr("255.255.255.255").unwrap(), 32);
        assert_eq!(
            subnet_mask_to_cidr("255.0.255.0"),
            Err(Ipv4Error::InvalidSubnetMask("255.0.255.0".to_string()))
        );
        assert!(subnet_mask_to_cidr("255.255.255").is_err());
    }

    #[test]
    fn test_prefix_round_trip() {
        for prefix in 0..=MAX_LENGTH {
            let mask = cidr_to_subnet_mask(prefix).unwrap();
            assert_eq!(subnet_mask_to_cidr(&mask).unwrap(), prefix, "mask {mask}");
        }
    }
}
