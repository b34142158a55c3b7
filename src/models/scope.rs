//! Address classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which well-known block an address belongs to.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AddressScope {
    /// Globally routable.
    Public,
    /// 10/8, 172.16/12, 192.168/16.
    Private,
    /// 127/8.
    Loopback,
    /// 169.254/16.
    LinkLocal,
    /// 224/4.
    Multicast,
    /// 240/4, including the limited broadcast address.
    Reserved,
}

impl AddressScope {
    /// Globally routable?
    pub fn is_public(self) -> bool {
        self == AddressScope::Public
    }

    /// One of the three private blocks?
    pub fn is_private(self) -> bool {
        self == AddressScope::Private
    }
}

impl fmt::Display for AddressScope {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            AddressScope::Public => "public",
            AddressScope::Private => "private",
            AddressScope::Loopback => "loopback",
            AddressScope::LinkLocal => "link-local",
            AddressScope::Multicast => "multicast",
            AddressScope::Reserved => "reserved",
        };
        f.write_str(name)
    }
}
