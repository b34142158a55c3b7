//! Whole-address conversions.

use super::octet::{convert_binary_octet_to_decimal, convert_decimal_octet_to_binary};
use crate::error::{Ipv4Error, Result};
use crate::validation::{is_valid_binary_ip_address, is_valid_ip_address};
use itertools::Itertools;
use std::net::Ipv4Addr;

/// Convert a dotted address to its binary-dotted form (always 35 characters).
///
/// # Examples
/// ```
/// use ipv4_calc::ip_to_binary;
/// assert_eq!(
///     ip_to_binary("192.168.1.1").unwrap(),
///     "11000000.10101000.00000001.00000001"
/// );
/// ```
pub fn ip_to_binary(address: &str) -> Result<String> {
    if !is_valid_ip_address(address) {
        log::debug!("ip_to_binary: rejecting {address:?}");
        return Err(Ipv4Error::InvalidAddress(address.to_string()));
    }
    itertools::process_results(
        address.split('.').map(convert_decimal_octet_to_binary),
        |mut octets| octets.join("."),
    )
}

/// Convert a binary-dotted address back to dotted decimal.
pub fn binary_to_ip(binary_address: &str) -> Result<String> {
    if !is_valid_binary_ip_address(binary_address) {
        log::debug!("binary_to_ip: rejecting {binary_address:?}");
        return Err(Ipv4Error::InvalidBinaryAddress(binary_address.to_string()));
    }
    itertools::process_results(
        binary_address.split('.').map(convert_binary_octet_to_decimal),
        |mut octets| octets.join("."),
    )
}

/// Convert a dotted address to its big-endian 32-bit value.
///
/// # Examples
/// ```
/// use ipv4_calc::ip_to_integer;
/// assert_eq!(ip_to_integer("192.168.1.1").unwrap(), 3232235777);
/// assert_eq!(ip_to_integer("255.255.255.255").unwrap(), u32::MAX);
/// ```
pub fn ip_to_integer(address: &str) -> Result<u32> {
    if !is_valid_ip_address(address) {
        log::debug!("ip_to_integer: rejecting {address:?}");
        return Err(Ipv4Error::InvalidAddress(address.to_string()));
    }
    address.split('.').try_fold(0u32, |acc, octet| -> Result<u32> {
        let value: u8 = octet
            .parse()
            .map_err(|_| Ipv4Error::InvalidAddress(address.to_string()))?;
        Ok((acc << 8) | u32::from(value))
    })
}

/// Convert an integer in `0..=u32::MAX` to a dotted address.
pub fn integer_to_ip(n: u64) -> Result<String> {
    let bits = u32::try_from(n).map_err(|_| {
        log::debug!("integer_to_ip: {n} is outside the address space");
        Ipv4Error::InvalidInteger(n)
    })?;
    Ok(u32_to_ip(bits))
}

/// Parse a dotted address with the strict validation rules into [`Ipv4Addr`].
pub fn parse_ip_address(address: &str) -> Result<Ipv4Addr> {
    Ok(Ipv4Addr::from(ip_to_integer(address)?))
}

/// Format a 32-bit value as a dotted address, most significant octet first.
pub(crate) fn u32_to_ip(bits: u32) -> String {
    bits.to_be_bytes().iter().join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ip_to_binary() {
        assert_eq!(
            ip_to_binary("10.0.0.0").unwrap(),
            "00001010.00000000.00000000.00000000"
        );
        assert_eq!(
            ip_to_binary("1.2.3.4").unwrap(),
            "00000001.00000010.00000011.00000100"
        );
        assert_eq!(
            ip_to_binary("123.45.67.89").unwrap(),
            "01111011.00101101.01000011.01011001"
        );
        assert_eq!(
            ip_to_binary("255.255.255.255").unwrap(),
            "11111111.11111111.11111111.11111111"
        );
        for bad in ["192.168.1", "256.256.256.256", "-10.-20.-30.-40", "192.168.010.001", ""] {
            assert_eq!(
                ip_to_binary(bad),
                Err(Ipv4Error::InvalidAddress(bad.to_string())),
                "expected error for {bad:?}"
            );
        }
    }

    #[test]
    fn test_binary_to_ip() {
        assert_eq!(
            binary_to_ip("11000000.10101000.00000001.00000001").unwrap(),
            "192.168.1.1"
        );
        assert_eq!(
            binary_to_ip("00000000.00000000.00000000.00000000").unwrap(),
            "0.0.0.0"
        );
        assert_eq!(
            binary_to_ip("01111011.00101101.01000011.01011001").unwrap(),
            "123.45.67.89"
        );
        for bad in [
            "11000000.10101000.00000001",
            "11000000.10101000.00000002.11111111",
            "11000000.10101000.00000001.11111111 ",
            "11000000.10101000/00000001:11111111",
        ] {
            assert_eq!(
                binary_to_ip(bad),
                Err(Ipv4Error::InvalidBinaryAddress(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_ip_to_integer() {
        assert_eq!(ip_to_integer("0.0.0.0").unwrap(), 0);
        assert_eq!(ip_to_integer("0.0.0.1").unwrap(), 1);
        assert_eq!(ip_to_integer("0.0.1.0").unwrap(), 256);
        assert_eq!(ip_to_integer("10.0.0.1").unwrap(), 167772161);
        assert_eq!(ip_to_integer("255.255.255.255").unwrap(), 4294967295);
        assert!(ip_to_integer("192.168.1.256").is_err());
    }

    #[test]
    fn test_integer_to_ip() {
        assert_eq!(integer_to_ip(0).unwrap(), "0.0.0.0");
        assert_eq!(integer_to_ip(3232235777).unwrap(), "192.168.1.1");
        assert_eq!(integer_to_ip(167772161).unwrap(), "10.0.0.1");
        assert_eq!(integer_to_ip(4294967295).unwrap(), "255.255.255.255");
        assert_eq!(
            integer_to_ip(4294967296),
            Err(Ipv4Error::InvalidInteger(4294967296))
        );
    }

    #[test]
    fn test_parse_ip_address() {
        assert_eq!(
            parse_ip_address("192.168.1.1").unwrap(),
            Ipv4Addr::new(192, 168, 1, 1)
        );
        assert!(parse_ip_address("192.168.1.01").is_err());
    }
}
