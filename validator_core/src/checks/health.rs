//! API health endpoint check

use crate::checks::{Check, CheckOutcome};
use crate::error::{Result, ValidatorError};
use crate::probe::{ProbeClient, ProbeOptions};
use serde_json::json;
use std::time::Duration;

pub struct ApiHealthCheck {
    timeout: Duration,
}

impl ApiHealthCheck {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait::async_trait]
impl Check for ApiHealthCheck {
    fn name(&self) -> &str {
        "api-health"
    }

    async fn execute(&self, probe: &ProbeClient) -> Result<CheckOutcome> {
        let opts = ProbeOptions {
            timeout: self.timeout,
            allow_non_2xx: false,
        };
        let response = probe.get_with("/health", opts).await?;

        let body = response.json()?;
        let status = body
            .get("status")
            .and_then(|v| v.as_str())
            .unwrap_or("<missing>");

        if status != "healthy" {
            return Err(ValidatorError::assertion(format!(
                "expected status \"healthy\", got \"{}\"",
                status
            )));
        }

        Ok(CheckOutcome::pass(json!({
            "status": status,
            "http_status": response.status,
            "response_time_ms": response.elapsed_ms,
        })))
    }
}
