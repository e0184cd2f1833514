use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by [`crate::core::client::Client`].
///
/// Every failure is returned to the caller unmodified; nothing is retried,
/// logged away, or replaced with a fallback value. A generation failure
/// reported inside a well-formed response body is NOT an error at this level.
#[derive(Debug, Error)]
pub enum SdkError {
    #[error("invalid request url: {0}")]
    Url(#[from] url::ParseError),
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("http status {status}: {sanitized}")]
    HttpStatus {
        status: u16,
        /// Upstream body (may contain sensitive detail; only log sanitized)
        body: String,
        /// Retry-After header (ms) if available
        retry_after_ms: Option<u64>,
        /// Sanitized message for display
        sanitized: String,
        /// Upstream response headers
        headers: Vec<(String, String)>,
    },
    #[error("network: {0}")]
    Network(String),
    #[error("connect timeout after {0:?}")]
    ConnectTimeout(Duration),
    #[error("request timeout after {0:?}")]
    RequestTimeout(Duration),
    #[error("body read error: {0}")]
    BodyRead(String),
    #[error("response decode error: {0}")]
    Decode(String),
    #[error("other: {0}")]
    Other(String),
}

impl TransportError {
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn retry_after_ms(&self) -> Option<u64> {
        match self {
            TransportError::HttpStatus { retry_after_ms, .. } => *retry_after_ms,
            _ => None,
        }
    }

    pub fn sanitized_message(&self) -> String {
        match self {
            TransportError::HttpStatus { status, .. } => format!("http status {status}"),
            _ => self.to_string(),
        }
    }
}

pub fn http_status_fallback_message(status: u16) -> String {
    format!("http status {status}")
}

pub fn build_http_status_transport_error(
    status: u16,
    body: String,
    retry_after_ms: Option<u64>,
    headers: Vec<(String, String)>,
) -> TransportError {
    TransportError::HttpStatus {
        status,
        body,
        retry_after_ms,
        sanitized: http_status_fallback_message(status),
        headers,
    }
}

/// Compact rendering of an upstream body for error messages: minified JSON
/// when the body parses, a byte count otherwise.
pub fn display_body_for_error(body: &str) -> String {
    let trimmed = body.trim();
    let looks_like_json = trimmed.starts_with('{') || trimmed.starts_with('[');
    if looks_like_json {
        match serde_json::from_str::<Value>(trimmed) {
            Ok(v) => v.to_string(),
            Err(_) => format!("{} bytes", body.len()),
        }
    } else {
        format!("{} bytes", body.len())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        build_http_status_transport_error, display_body_for_error, http_status_fallback_message,
        TransportError,
    };

    #[test]
    fn fallback_message_and_builder_are_consistent() {
        assert_eq!(http_status_fallback_message(404), "http status 404");
        let built =
            build_http_status_transport_error(404, "not found".into(), Some(10), Vec::new());
        match built {
            TransportError::HttpStatus {
                status,
                retry_after_ms,
                sanitized,
                ..
            } => {
                assert_eq!(status, 404);
                assert_eq!(retry_after_ms, Some(10));
                assert_eq!(sanitized, "http status 404");
            }
            other => panic!("unexpected transport variant: {other:?}"),
        }
    }

    #[test]
    fn status_accessors_only_apply_to_http_status() {
        let err = build_http_status_transport_error(429, "slow down".into(), Some(2500), Vec::new());
        assert_eq!(err.status(), Some(429));
        assert_eq!(err.retry_after_ms(), Some(2500));
        assert_eq!(err.sanitized_message(), "http status 429");

        let err = TransportError::Network("connection refused".into());
        assert_eq!(err.status(), None);
        assert_eq!(err.retry_after_ms(), None);
        assert_eq!(err.sanitized_message(), "network: connection refused");
    }

    #[test]
    fn body_display_minifies_json_and_counts_bytes_otherwise() {
        assert_eq!(
            display_body_for_error("{ \"detail\": \"unauthorized\" }"),
            "{\"detail\":\"unauthorized\"}"
        );
        assert_eq!(display_body_for_error("<html>nope</html>"), "17 bytes");
    }
}
