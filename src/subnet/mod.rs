//! Subnet arithmetic built on the converters.
//!
//! - [`network`] - network and broadcast addresses
//! - [`hosts`] - usable host enumeration and counting
//! - [`info`] - aggregated [`SubnetInfo`](crate::models::SubnetInfo)

mod hosts;
mod info;
mod network;

pub use hosts::{calculate_available_ips, get_available_hosts_count};
pub use info::{get_subnet_info, get_subnet_info_from_cidr};
pub use network::{calculate_broadcast_address, calculate_network_address};
