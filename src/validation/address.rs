//! Whole-address validation.

use super::octet::{is_valid_binary_octet, is_valid_decimal_octet, is_valid_prefix};
use crate::conversion::ip_to_binary;
use crate::models::MAX_LENGTH;

/// Length of a binary-dotted address: four 8-bit fields and three dots.
pub const BINARY_IP_LENGTH: usize = 35;

/// Is `s` a dotted-decimal IPv4 address in canonical form?
///
/// Surrounding whitespace, leading zeros, empty fields and anything other
/// than exactly four fields are rejected.
///
/// # Examples
/// ```
/// use ipv4_calc::is_valid_ip_address;
/// assert!(is_valid_ip_address("192.168.1.1"));
/// assert!(!is_valid_ip_address("192.168.01.1"));
/// assert!(!is_valid_ip_address(" 192.168.1.1"));
/// ```
pub fn is_valid_ip_address(s: &str) -> bool {
    if s.trim() != s {
        return false;
    }
    let octets: Vec<&str> = s.split('.').collect();
    octets.len() == 4 && octets.iter().all(|octet| is_valid_decimal_octet(octet))
}

/// Is `s` four binary octets joined by dots (35 characters exactly)?
pub fn is_valid_binary_ip_address(s: &str) -> bool {
    if s.len() != BINARY_IP_LENGTH {
        return false;
    }
    let octets: Vec<&str> = s.split('.').collect();
    if octets.len() != 4 {
        return false;
    }
    for octet in octets {
        if !is_valid_binary_octet(octet) {
            return false;
        }
    }
    true
}

/// Alias of [`is_valid_binary_ip_address`].
pub fn is_valid_binary_ip(s: &str) -> bool {
    is_valid_binary_ip_address(s)
}

/// Is `s` a valid address whose bits are a run of ones followed by zeros?
///
/// `0.0.0.0` and `255.255.255.255` both qualify.
pub fn is_valid_subnet_mask(s: &str) -> bool {
    if !is_valid_ip_address(s) {
        return false;
    }
    let binary = match ip_to_binary(s) {
        Ok(binary) => binary,
        Err(_) => return false,
    };
    let bits: String = binary.chars().filter(|c| *c != '.').collect();
    if bits.len() != MAX_LENGTH as usize || !bits.bytes().all(|b| b == b'0' || b == b'1') {
        return false;
    }
    // A one after a zero breaks contiguity.
    !bits.contains("01")
}

/// Is `s` an `address/prefix` string with prefix `0..=32`?
///
/// The prefix must be written canonically: no sign, fraction or leading zero.
pub fn is_valid_cidr(s: &str) -> bool {
    if s.trim() != s {
        return false;
    }
    let parts: Vec<&str> = s.split('/').collect();
    if parts.len() != 2 || parts.iter().any(|p| p.is_empty()) {
        return false;
    }
    is_valid_ip_address(parts[0]) && is_valid_prefix(parts[1])
}
