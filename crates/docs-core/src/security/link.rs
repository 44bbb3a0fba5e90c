//! HTTP(S) link validation.

use super::address::is_private_address;
use thiserror::Error;
use url::Url;

/// Reason a link was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UrlRejection {
    /// The text is not an absolute URL.
    #[error("Invalid URL format")]
    InvalidFormat,

    /// Scheme other than `http` or `https`.
    #[error("URL must use http or https protocol")]
    UnsupportedScheme,

    /// Host is a private, loopback, or link-local address.
    #[error("URL cannot reference private or internal addresses")]
    PrivateAddress,
}

/// Parses `input` and accepts it only if it is a public `http`/`https` URL.
///
/// Returns the parsed URL on success.
///
/// # Errors
///
/// Returns the first [`UrlRejection`] that applies, checked in the order
/// format, scheme, host.
///
/// # Examples
///
/// ```
/// use action_docs_core::security::{validate_http_url, UrlRejection};
///
/// assert!(validate_http_url("https://img.shields.io/badge.svg").is_ok());
/// assert_eq!(
///     validate_http_url("http://127.0.0.1/badge.svg"),
///     Err(UrlRejection::PrivateAddress)
/// );
/// assert_eq!(
///     validate_http_url("ftp://example.com"),
///     Err(UrlRejection::UnsupportedScheme)
/// );
/// assert_eq!(validate_http_url("not a url"), Err(UrlRejection::InvalidFormat));
/// ```
pub fn validate_http_url(input: &str) -> Result<Url, UrlRejection> {
    let parsed = Url::parse(input).map_err(|_| UrlRejection::InvalidFormat)?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(UrlRejection::UnsupportedScheme);
    }

    let host = parsed.host_str().unwrap_or_default().to_ascii_lowercase();
    if is_private_address(&host) {
        tracing::debug!(url = input, host = %host, "rejected private address");
        return Err(UrlRejection::PrivateAddress);
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_public_urls() {
        let url = validate_http_url("https://img.shields.io/badge.svg").unwrap();
        assert_eq!(url.host_str(), Some("img.shields.io"));
        assert!(validate_http_url("http://example.com:8080/path?q=1").is_ok());
        assert!(validate_http_url("https://8.8.8.8/").is_ok());
    }

    #[test]
    fn test_rejects_invalid_format() {
        assert_eq!(validate_http_url(""), Err(UrlRejection::InvalidFormat));
        assert_eq!(
            validate_http_url("/relative/path"),
            Err(UrlRejection::InvalidFormat)
        );
        assert_eq!(
            validate_http_url("http://[::1"),
            Err(UrlRejection::InvalidFormat)
        );
    }

    #[test]
    fn test_rejects_other_schemes() {
        for input in [
            "ftp://example.com/file",
            "javascript:alert(1)",
            "file:///etc/passwd",
            "data:text/plain,hi",
        ] {
            assert_eq!(
                validate_http_url(input),
                Err(UrlRejection::UnsupportedScheme),
                "{input}"
            );
        }
    }

    #[test]
    fn test_rejects_private_hosts() {
        for input in [
            "http://127.0.0.1/badge.svg",
            "http://LOCALHOST:3000",
            "https://10.0.0.5/",
            "http://[::1]/",
            "http://[fe80::1]/",
            "http://[::ffff:192.168.1.1]/",
            "http://169.254.169.254/latest/meta-data",
            "http://0.0.0.0/",
        ] {
            assert_eq!(
                validate_http_url(input),
                Err(UrlRejection::PrivateAddress),
                "{input}"
            );
        }
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(UrlRejection::InvalidFormat.to_string(), "Invalid URL format");
        assert_eq!(
            UrlRejection::UnsupportedScheme.to_string(),
            "URL must use http or https protocol"
        );
        assert_eq!(
            UrlRejection::PrivateAddress.to_string(),
            "URL cannot reference private or internal addresses"
        );
    }
}
