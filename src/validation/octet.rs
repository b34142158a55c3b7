//! Single-octet validation.

use crate::models::MAX_LENGTH;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // ASCII digits only: rejects signs, whitespace and fractions up front.
    static ref DECIMAL_OCTET: Regex = Regex::new(r"^[0-9]{1,3}$").expect("Invalid Regex?");
    static ref PREFIX: Regex = Regex::new(r"^(0|[1-9][0-9]?)$").expect("Invalid Regex?");
}

/// Is `s` a canonical decimal octet (`0`..=`255`, no leading zero)?
///
/// # Examples
/// ```
/// use ipv4_calc::is_valid_decimal_octet;
/// assert!(is_valid_decimal_octet("192"));
/// assert!(!is_valid_decimal_octet("01"));
/// ```
pub fn is_valid_decimal_octet(s: &str) -> bool {
    if !DECIMAL_OCTET.is_match(s) {
        return false;
    }
    if s.len() > 1 && s.starts_with('0') {
        return false;
    }
    matches!(s.parse::<u16>(), Ok(value) if value <= 255)
}

/// Is `s` exactly eight `0`/`1` characters?
pub fn is_valid_binary_octet(s: &str) -> bool {
    s.len() == 8 && s.bytes().all(|b| b == b'0' || b == b'1')
}

/// Is `s` a canonical prefix length (`0`..=`32`)?
///
/// No sign, fraction, whitespace or leading zero.
pub fn is_valid_prefix(s: &str) -> bool {
    if !PREFIX.is_match(s) {
        return false;
    }
    matches!(s.parse::<u8>(), Ok(prefix) if prefix <= MAX_LENGTH)
}
