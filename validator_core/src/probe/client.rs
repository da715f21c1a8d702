//! HTTP probe client used by every network-facing check

use crate::error::{Result, ValidatorError};
use http::HeaderMap;
use std::time::{Duration, Instant};

/// Per-call probe settings. `allow_non_2xx` lets checks that need to inspect
/// 4xx/429 responses (security headers, rate limiting) receive them instead
/// of an error.
#[derive(Debug, Clone, Copy)]
pub struct ProbeOptions {
    pub timeout: Duration,
    pub allow_non_2xx: bool,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            allow_non_2xx: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProbeResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: String,
    pub elapsed_ms: u64,
}

impl ProbeResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Thin wrapper over `reqwest::Client` scoped to one base URL. Never panics
/// on non-2xx; callers opt in to seeing those statuses via `ProbeOptions`.
#[derive(Debug, Clone)]
pub struct ProbeClient {
    client: reqwest::Client,
    base_url: String,
    default_timeout: Duration,
}

impl ProbeClient {
    pub fn new(base_url: impl Into<String>, default_timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ValidatorError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            default_timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_timeout(&self) -> Duration {
        self.default_timeout
    }

    fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// GET a path relative to the base URL with default options.
    pub async fn get(&self, path: &str) -> Result<ProbeResponse> {
        let opts = ProbeOptions {
            timeout: self.default_timeout,
            allow_non_2xx: false,
        };
        self.get_with(path, opts).await
    }

    pub async fn get_with(&self, path: &str, opts: ProbeOptions) -> Result<ProbeResponse> {
        self.get_url(&self.url_for(path), opts).await
    }

    /// GET an absolute URL. Used by the frontend probe, which targets a
    /// different host than the API base URL.
    pub async fn get_url(&self, url: &str, opts: ProbeOptions) -> Result<ProbeResponse> {
        let start = Instant::now();

        let response = self
            .client
            .get(url)
            .timeout(opts.timeout)
            .send()
            .await
            .map_err(|e| ValidatorError::from_probe(url, opts.timeout, e))?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response
            .text()
            .await
            .map_err(|e| ValidatorError::from_probe(url, opts.timeout, e))?;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        if !opts.allow_non_2xx && !(200..300).contains(&status) {
            return Err(ValidatorError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        Ok(ProbeResponse {
            status,
            headers,
            body,
            elapsed_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let probe =
            ProbeClient::new("http://localhost:8000/", Duration::from_secs(5)).unwrap();
        assert_eq!(probe.base_url(), "http://localhost:8000");
        assert_eq!(
            probe.url_for("/api/countries"),
            "http://localhost:8000/api/countries"
        );
        assert_eq!(probe.url_for("health"), "http://localhost:8000/health");
    }

    #[test]
    fn test_response_success_range() {
        let response = ProbeResponse {
            status: 204,
            headers: HeaderMap::new(),
            body: String::new(),
            elapsed_ms: 3,
        };
        assert!(response.is_success());

        let response = ProbeResponse {
            status: 429,
            ..response
        };
        assert!(!response.is_success());
    }

    #[test]
    fn test_response_json_parsing() {
        let response = ProbeResponse {
            status: 200,
            headers: HeaderMap::new(),
            body: r#"{"status":"healthy"}"#.to_string(),
            elapsed_ms: 12,
        };
        let value = response.json().unwrap();
        assert_eq!(value["status"], "healthy");

        let response = ProbeResponse {
            body: "not json".to_string(),
            ..response
        };
        assert!(response.json().is_err());
    }
}
