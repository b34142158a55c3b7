//! Single-octet conversions.

use crate::error::{Ipv4Error, Result};
use crate::validation::{is_valid_binary_octet, is_valid_decimal_octet};

/// Convert a decimal octet to its 8-character binary form.
///
/// # Examples
/// ```
/// use ipv4_calc::convert_decimal_octet_to_binary;
/// assert_eq!(convert_decimal_octet_to_binary("5").unwrap(), "00000101");
/// ```
pub fn convert_decimal_octet_to_binary(octet: &str) -> Result<String> {
    if !is_valid_decimal_octet(octet) {
        log::debug!("rejecting decimal octet {octet:?}");
        return Err(Ipv4Error::InvalidOctet(octet.to_string()));
    }
    let value: u8 = octet
        .parse()
        .map_err(|_| Ipv4Error::InvalidOctet(octet.to_string()))?;
    Ok(format!("{value:08b}"))
}

/// Convert an 8-character binary octet to its canonical decimal form.
pub fn convert_binary_octet_to_decimal(octet: &str) -> Result<String> {
    if !is_valid_binary_octet(octet) {
        log::debug!("rejecting binary octet {octet:?}");
        return Err(Ipv4Error::InvalidOctet(octet.to_string()));
    }
    let value = u8::from_str_radix(octet, 2)
        .map_err(|_| Ipv4Error::InvalidOctet(octet.to_string()))?;
    Ok(value.to_string())
}
