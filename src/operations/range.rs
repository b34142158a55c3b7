//! Inclusive address ranges.

use crate::conversion::{ip_to_integer, u32_to_ip};
use crate::error::{Ipv4Error, Result};

/// Every address from `start` to `end` inclusive, in ascending order.
///
/// Memory grows with the range; callers bound the size.
pub fn get_ip_range(start: &str, end: &str) -> Result<Vec<String>> {
    let first = ip_to_integer(start)?;
    let last = ip_to_integer(end)?;
    if first > last {
        log::debug!("get_ip_range: {start} is above {end}");
        return Err(Ipv4Error::RangeOrder {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    log::trace!("get_ip_range: {} addresses", u64::from(last - first) + 1);
    Ok((first..=last).map(u32_to_ip).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_ip_range() {
        assert_eq!(
            get_ip_range("192.168.1.1", "192.168.1.3").unwrap(),
            vec!["192.168.1.1", "192.168.1.2", "192.168.1.3"]
        );
        assert_eq!(
            get_ip_range("10.0.0.254", "10.0.1.1").unwrap(),
            vec!["10.0.0.254", "10.0.0.255", "10.0.1.0", "10.0.1.1"]
        );
        assert_eq!(
            get_ip_range("10.0.0.1", "10.0.0.1").unwrap(),
            vec!["10.0.0.1"]
        );
        assert_eq!(
            get_ip_range("255.255.255.254", "255.255.255.255").unwrap(),
            vec!["255.255.255.254", "255.255.255.255"]
        );
    }

    #[test]
    fn test_get_ip_range_errors() {
        assert_eq!(
            get_ip_range("192.168.1.5", "192.168.1.1"),
            Err(Ipv4Error::RangeOrder {
                start: "192.168.1.5".to_string(),
                end: "192.168.1.1".to_string()
            })
        );
        assert_eq!(
            get_ip_range("192.168.1.1", "192.168.1"),
            Err(Ipv4Error::InvalidAddress("192.168.1".to_string()))
        );
    }
}
