//! IPv4 CIDR notation.
//!
//! Provides [`Cidr`] for an address paired with a prefix length. Mask and
//! bound calculations go through the converter and subnet layers.

use crate::conversion::{cidr_to_subnet_mask, ip_to_integer, parse_ip_address, u32_to_ip};
use crate::error::{Ipv4Error, Result};
use crate::models::SubnetInfo;
use crate::operations::is_ip_address_in_subnet;
use crate::subnet::{calculate_broadcast_address, calculate_network_address, get_subnet_info};
use crate::validation::is_valid_cidr;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum prefix length of an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// IPv4 address with a prefix length, e.g. `10.0.0.0/24`.
///
/// Only built through [`Cidr::new`], so the prefix is always `0..=32`.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    addr: Ipv4Addr,
    prefix: u8,
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cidr::new(&s).map_err(de::Error::custom)
    }
}

impl Cidr {
    /// Create a new [`Cidr`] from a string such as `"10.0.0.0/24"`.
    ///
    /// No trimming: surrounding whitespace is an error.
    pub fn new(addr_cidr: &str) -> Result<Cidr> {
        if !is_valid_cidr(addr_cidr) {
            log::debug!("Cidr::new: rejecting {addr_cidr:?}");
            return Err(Ipv4Error::InvalidCidr(addr_cidr.to_string()));
        }
        let invalid = || Ipv4Error::InvalidCidr(addr_cidr.to_string());
        let (addr, prefix) = addr_cidr.split_once('/').ok_or_else(invalid)?;
        let addr = Ipv4Addr::from(ip_to_integer(addr)?);
        let prefix: u8 = prefix.parse().map_err(|_| invalid())?;
        Ok(Cidr { addr, prefix })
    }

    /// The address as written, host bits are not cleared.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// Prefix length (0-32).
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Subnet mask in dotted notation.
    pub fn mask(&self) -> Result<String> {
        cidr_to_subnet_mask(self.prefix)
    }

    /// Lowest (network) address in the subnet.
    pub fn network(&self) -> Result<Ipv4Addr> {
        parse_ip_address(&calculate_network_address(&self.dotted(), &self.mask()?)?)
    }

    /// Highest (broadcast) address in the subnet.
    pub fn broadcast(&self) -> Result<Ipv4Addr> {
        parse_ip_address(&calculate_broadcast_address(&self.dotted(), &self.mask()?)?)
    }

    /// Does the subnet include `ip`?
    pub fn contains(&self, ip: Ipv4Addr) -> Result<bool> {
        is_ip_address_in_subnet(&u32_to_ip(u32::from(ip)), &self.dotted(), &self.mask()?)
    }

    /// Full [`SubnetInfo`] summary for this subnet.
    pub fn subnet_info(&self) -> Result<SubnetInfo> {
        get_subnet_info(&self.dotted(), &self.mask()?)
    }

    fn dotted(&self) -> String {
        u32_to_ip(u32::from(self.addr))
    }
}

impl FromStr for Cidr {
    type Err = Ipv4Error;

    fn from_str(s: &str) -> Result<Cidr> {
        Cidr::new(s)
    }
}

impl std::fmt::Display for Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}
