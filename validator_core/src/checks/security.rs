//! Security response header check

use crate::checks::{Check, CheckOutcome};
use crate::error::{Result, ValidatorError};
use crate::probe::{ProbeClient, ProbeOptions};
use http::HeaderMap;
use serde_json::json;
use std::time::Duration;

pub const EXPECTED_HEADERS: [&str; 5] = [
    "x-frame-options",
    "x-content-type-options",
    "x-xss-protection",
    "strict-transport-security",
    "content-security-policy",
];

/// Inspects a fixed set of security headers on any response the target
/// returns, 2xx or not. A 4xx from an auth-guarded endpoint still carries
/// headers worth checking, so non-2xx statuses are not probe failures here.
pub struct SecurityHeadersCheck {
    timeout: Duration,
}

impl SecurityHeadersCheck {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait::async_trait]
impl Check for SecurityHeadersCheck {
    fn name(&self) -> &str {
        "security-headers"
    }

    async fn execute(&self, probe: &ProbeClient) -> Result<CheckOutcome> {
        let opts = ProbeOptions {
            timeout: self.timeout,
            allow_non_2xx: true,
        };
        let response = probe.get_with("/health", opts).await?;

        let (present, missing) = partition_headers(&response.headers);

        if !missing.is_empty() {
            return Err(ValidatorError::assertion(format!(
                "missing security headers: {}",
                missing.join(", ")
            )));
        }

        Ok(CheckOutcome::pass(json!({
            "checked": EXPECTED_HEADERS.len(),
            "present": present,
            "http_status": response.status,
        })))
    }
}

fn partition_headers(headers: &HeaderMap) -> (Vec<&'static str>, Vec<&'static str>) {
    let mut present = Vec::new();
    let mut missing = Vec::new();

    for name in EXPECTED_HEADERS {
        if headers.contains_key(name) {
            present.push(name);
        } else {
            missing.push(name);
        }
    }

    (present, missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::{HeaderName, HeaderValue};

    #[test]
    fn test_partition_with_one_present() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        );

        let (present, missing) = partition_headers(&headers);
        assert_eq!(present, vec!["x-frame-options"]);
        assert_eq!(
            missing,
            vec![
                "x-content-type-options",
                "x-xss-protection",
                "strict-transport-security",
                "content-security-policy",
            ]
        );
    }

    #[test]
    fn test_partition_all_present() {
        let mut headers = HeaderMap::new();
        for name in EXPECTED_HEADERS {
            headers.insert(
                HeaderName::from_static(name),
                HeaderValue::from_static("set"),
            );
        }

        let (present, missing) = partition_headers(&headers);
        assert_eq!(present.len(), 5);
        assert!(missing.is_empty());
    }
}
