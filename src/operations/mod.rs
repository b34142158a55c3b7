//! Address operations built on the converters.
//!
//! - [`sequence`] - next/previous address with wraparound
//! - [`range`] - inclusive range enumeration
//! - [`compare`] - numeric ordering and equality
//! - [`membership`] - subnet membership
//! - [`classify`] - public/private/special-use classification

mod classify;
mod compare;
mod membership;
mod range;
mod sequence;

pub use classify::{classify_ip, is_private_ip, is_public_ip, SpecialRange, SPECIAL_RANGES};
pub use compare::{are_ip_addresses_equal, compare_ip_addresses};
pub use membership::is_ip_address_in_subnet;
pub use range::get_ip_range;
pub use sequence::{get_next_ip_address, get_previous_ip_address};
