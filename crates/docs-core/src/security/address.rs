//! Private and reserved address classification.
//!
//! Only the ranges listed in [`PRIVATE_IPV4_RANGES`] and the IPv6 forms
//! handled by [`is_private_address`] are recognized. This is not a general
//! IP library: unique-local and link-local IPv6 detection is a prefix match
//! on the textual form.

use regex::Regex;
use std::sync::LazyLock;

/// Hostnames rejected regardless of format.
const BLOCKED_HOSTS: &[&str] = &["localhost", "localhost.localdomain", "0.0.0.0"];

/// Textual prefixes of unique-local (`fc00::/7`) and link-local (`fe80::/10`) IPv6.
const PRIVATE_IPV6_PREFIXES: &[&str] = &["fc", "fd", "fe8", "fe9", "fea", "feb"];

/// `::ffff:a.b.c.d`
static IPV4_MAPPED_DOTTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^::ffff:([0-9]+\.[0-9]+\.[0-9]+\.[0-9]+)$").expect("valid regex")
});

/// `::ffff:HHHH:LLLL`
static IPV4_MAPPED_HEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^::ffff:([0-9a-f]{1,4}):([0-9a-f]{1,4})$").expect("valid regex")
});

/// A reserved IPv4 range keyed on the first octet and, optionally, an
/// inclusive range of second octets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipv4Range {
    /// Required first octet
    pub first: u8,
    /// Inclusive bounds on the second octet, if the range is narrower than /8
    pub second: Option<(u8, u8)>,
    /// Human-readable name of the range
    pub label: &'static str,
}

impl Ipv4Range {
    /// Returns `true` if the octets fall in this range.
    #[must_use]
    pub const fn contains(&self, octets: [u8; 4]) -> bool {
        if octets[0] != self.first {
            return false;
        }
        match self.second {
            None => true,
            Some((min, max)) => octets[1] >= min && octets[1] <= max,
        }
    }
}

/// Reserved IPv4 ranges, checked in order.
pub const PRIVATE_IPV4_RANGES: &[Ipv4Range] = &[
    Ipv4Range {
        first: 127,
        second: None,
        label: "loopback (127.0.0.0/8)",
    },
    Ipv4Range {
        first: 10,
        second: None,
        label: "private (10.0.0.0/8)",
    },
    Ipv4Range {
        first: 172,
        second: Some((16, 31)),
        label: "private (172.16.0.0/12)",
    },
    Ipv4Range {
        first: 192,
        second: Some((168, 168)),
        label: "private (192.168.0.0/16)",
    },
    Ipv4Range {
        first: 169,
        second: Some((254, 254)),
        label: "link-local (169.254.0.0/16)",
    },
];

/// Returns `true` if `hostname` is a blocked name or a literal address in a
/// private, loopback, or link-local range.
///
/// Accepts bare hostnames, dotted IPv4, and IPv6 with or without brackets.
/// Comparison is case-insensitive. Malformed input is classified as public.
///
/// # Examples
///
/// ```
/// use action_docs_core::security::is_private_address;
///
/// assert!(is_private_address("localhost"));
/// assert!(is_private_address("192.168.1.1"));
/// assert!(is_private_address("[::1]"));
/// assert!(is_private_address("::ffff:c0a8:101"));
///
/// assert!(!is_private_address("example.com"));
/// assert!(!is_private_address("8.8.8.8"));
/// assert!(!is_private_address("999.999.999.999"));
/// ```
#[must_use]
pub fn is_private_address(hostname: &str) -> bool {
    let host = hostname.to_ascii_lowercase();
    BLOCKED_HOSTS.contains(&host.as_str()) || is_private_ipv4(&host) || is_private_ipv6(&host)
}

/// Parses exactly four all-digit segments each within `0..=255`.
fn parse_ipv4(host: &str) -> Option<[u8; 4]> {
    let mut octets = [0u8; 4];
    let mut parts = host.split('.');
    for octet in &mut octets {
        let part = parts.next()?;
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *octet = part.parse().ok()?;
    }
    parts.next().is_none().then_some(octets)
}

fn private_range(octets: [u8; 4]) -> Option<&'static Ipv4Range> {
    PRIVATE_IPV4_RANGES.iter().find(|range| range.contains(octets))
}

fn is_private_ipv4(host: &str) -> bool {
    parse_ipv4(host).and_then(private_range).is_some()
}

fn is_private_ipv6(host: &str) -> bool {
    let addr = host
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(host);

    if !addr.contains(':') {
        return false;
    }

    if addr == "::1" || addr == "::" {
        return true;
    }

    if PRIVATE_IPV6_PREFIXES
        .iter()
        .any(|prefix| addr.starts_with(prefix))
    {
        return true;
    }

    if let Some(caps) = IPV4_MAPPED_DOTTED.captures(addr) {
        return is_private_ipv4(&caps[1]);
    }

    if let Some(caps) = IPV4_MAPPED_HEX.captures(addr)
        && let (Ok(high), Ok(low)) = (
            u16::from_str_radix(&caps[1], 16),
            u16::from_str_radix(&caps[2], 16),
        )
    {
        let [a, b] = high.to_be_bytes();
        let [c, d] = low.to_be_bytes();
        return private_range([a, b, c, d]).is_some();
    }

    false
}
