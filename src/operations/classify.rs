//! Public/private/special-use classification.

use crate::conversion::ip_to_integer;
use crate::error::Result;
use crate::models::AddressScope;

/// Inclusive block of addresses that is not publicly routable.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SpecialRange {
    /// First address of the block as a 32-bit value.
    pub start: u32,
    /// Last address of the block, inclusive.
    pub end: u32,
    /// Classification of every address in the block.
    pub scope: AddressScope,
}

impl SpecialRange {
    /// Does the block include the 32-bit address `bits`?
    pub fn contains(&self, bits: u32) -> bool {
        self.start <= bits && bits <= self.end
    }
}

/// Non-public blocks. Anything outside all of them is public.
pub const SPECIAL_RANGES: [SpecialRange; 7] = [
    // 10.0.0.0 - 10.255.255.255
    SpecialRange {
        start: 0x0A00_0000,
        end: 0x0AFF_FFFF,
        scope: AddressScope::Private,
    },
    // 172.16.0.0 - 172.31.255.255
    SpecialRange {
        start: 0xAC10_0000,
        end: 0xAC1F_FFFF,
        scope: AddressScope::Private,
    },
    // 192.168.0.0 - 192.168.255.255
    SpecialRange {
        start: 0xC0A8_0000,
        end: 0xC0A8_FFFF,
        scope: AddressScope::Private,
    },
    // 127.0.0.0 - 127.255.255.255
    SpecialRange {
        start: 0x7F00_0000,
        end: 0x7FFF_FFFF,
        scope: AddressScope::Loopback,
    },
    // 169.254.0.0 - 169.254.255.255
    SpecialRange {
        start: 0xA9FE_0000,
        end: 0xA9FE_FFFF,
        scope: AddressScope::LinkLocal,
    },
    // 224.0.0.0 - 239.255.255.255
    SpecialRange {
        start: 0xE000_0000,
        end: 0xEFFF_FFFF,
        scope: AddressScope::Multicast,
    },
    // 240.0.0.0 - 255.255.255.255
    SpecialRange {
        start: 0xF000_0000,
        end: 0xFFFF_FFFF,
        scope: AddressScope::Reserved,
    },
];

/// Which well-known block `ip` falls in.
///
/// # Examples
/// ```
/// use ipv4_calc::{classify_ip, models::AddressScope};
/// assert_eq!(classify_ip("127.0.0.1").unwrap(), AddressScope::Loopback);
/// assert_eq!(classify_ip("1.1.1.1").unwrap(), AddressScope::Public);
/// ```
pub fn classify_ip(ip: &str) -> Result<AddressScope> {
    let bits = ip_to_integer(ip)?;
    Ok(SPECIAL_RANGES
        .iter()
        .find(|range| range.contains(bits))
        .map(|range| range.scope)
        .unwrap_or(AddressScope::Public))
}

/// Is `ip` outside every private and special-use block?
pub fn is_public_ip(ip: &str) -> Result<bool> {
    Ok(classify_ip(ip)?.is_public())
}

/// Is `ip` in 10/8, 172.16/12 or 192.168/16?
pub fn is_private_ip(ip: &str) -> Result<bool> {
    Ok(classify_ip(ip)?.is_private())
}
