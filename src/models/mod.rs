//! Value types shared across the crate.
//!
//! - [`Cidr`] - IPv4 address with prefix length
//! - [`SubnetInfo`] - derived facts about a subnet
//! - [`AddressScope`] - classification of an address

mod ipv4;
mod scope;
mod subnet;

pub use ipv4::{Cidr, MAX_LENGTH};
pub use scope::AddressScope;
pub use subnet::SubnetInfo;
