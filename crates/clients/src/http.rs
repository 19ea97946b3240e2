//! Shared HTTP plumbing: agent construction, status classification and
//! query encoding.

use std::fmt::Display;

use mentor_core::{ServiceError, ServiceKind};

/// A fresh agent with ureq's default timeouts. One per call; no pooling.
pub(crate) fn agent() -> ureq::Agent {
    ureq::Agent::new_with_defaults()
}

/// Strip trailing slashes so paths can be appended with `format!`.
pub(crate) fn base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Convert a ureq error into a [`ServiceError`].
///
/// HTTP error statuses map through [`ServiceError::from_status`]; everything
/// else (refused connection, DNS, TLS, timeout) is a network failure.
pub(crate) fn classify(err: ureq::Error, service: ServiceKind, what: &str) -> ServiceError {
    match err {
        ureq::Error::StatusCode(status) => {
            tracing::debug!(%service, status, "service returned error status");
            ServiceError::from_status(service, status, what)
        }
        other => ServiceError::Network {
            service,
            message: other.to_string(),
        },
    }
}

pub(crate) fn parse_error(service: ServiceKind, err: impl Display) -> ServiceError {
    ServiceError::Parse {
        service,
        message: err.to_string(),
    }
}

/// Percent-encode a query string value or path segment (spaces → %20, etc.).
///
/// Leaves only RFC 3986 unreserved characters as-is.
pub(crate) fn urlencoded(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
