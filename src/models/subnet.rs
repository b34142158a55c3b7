//! Subnet summary model.

use serde::{Deserialize, Serialize};

/// Summary of a subnet derived from an address and mask.
///
/// Serialises with camelCase keys, e.g. `networkAddress`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubnetInfo {
    /// First address of the subnet (host bits cleared).
    pub network_address: String,
    /// Last address of the subnet (host bits set).
    pub broadcast_address: String,
    /// Every address in the subnet, `2^(32 - prefix)`.
    pub total_hosts: u64,
    /// Addresses assignable to hosts.
    pub usable_hosts: u64,
    /// Lowest usable address, or the network address when none is usable.
    pub first_usable_host: String,
    /// Highest usable address, or the broadcast address when none is usable.
    pub last_usable_host: String,
}
