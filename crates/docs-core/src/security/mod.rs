//! Link safety checks for user-supplied URLs.
//!
//! Badge links end up in a public README, so they must not point at
//! loopback, private, or link-local hosts.

mod address;
mod link;

pub use address::{Ipv4Range, PRIVATE_IPV4_RANGES, is_private_address};
pub use link::{UrlRejection, validate_http_url};
