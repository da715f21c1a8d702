//! Frontend reachability check, only wired when a frontend URL is configured

use crate::checks::{Check, CheckOutcome};
use crate::error::Result;
use crate::probe::{ProbeClient, ProbeOptions};
use serde_json::json;
use std::time::Duration;

pub struct FrontendHealthCheck {
    url: String,
    timeout: Duration,
}

impl FrontendHealthCheck {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }
}

#[async_trait::async_trait]
impl Check for FrontendHealthCheck {
    fn name(&self) -> &str {
        "frontend-health"
    }

    async fn execute(&self, probe: &ProbeClient) -> Result<CheckOutcome> {
        let opts = ProbeOptions {
            timeout: self.timeout,
            allow_non_2xx: false,
        };
        let response = probe.get_url(&self.url, opts).await?;

        Ok(CheckOutcome::pass(json!({
            "url": self.url,
            "http_status": response.status,
            "response_time_ms": response.elapsed_ms,
        })))
    }
}
