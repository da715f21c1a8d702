//! Response time budget check

use crate::checks::{Check, CheckOutcome};
use crate::error::{Result, ValidatorError};
use crate::probe::{ProbeClient, ProbeOptions};
use serde_json::json;
use std::time::Duration;

pub const DEFAULT_ENDPOINTS: [&str; 3] = [
    "/health",
    "/api/countries?limit=10",
    "/api/global-overview",
];

/// Sequentially times a fixed list of endpoints against a wall-clock budget.
/// Every endpoint is probed even after an offender is found so the failure
/// message names all of them at once.
pub struct ResponseTimeCheck {
    endpoints: Vec<String>,
    threshold_ms: u64,
    timeout: Duration,
}

impl ResponseTimeCheck {
    pub fn new(endpoints: Vec<String>, threshold_ms: u64, timeout: Duration) -> Self {
        Self {
            endpoints,
            threshold_ms,
            timeout,
        }
    }

    pub fn with_default_endpoints(threshold_ms: u64, timeout: Duration) -> Self {
        Self::new(
            DEFAULT_ENDPOINTS.iter().map(|s| s.to_string()).collect(),
            threshold_ms,
            timeout,
        )
    }
}

#[async_trait::async_trait]
impl Check for ResponseTimeCheck {
    fn name(&self) -> &str {
        "response-times"
    }

    async fn execute(&self, probe: &ProbeClient) -> Result<CheckOutcome> {
        let opts = ProbeOptions {
            timeout: self.timeout,
            allow_non_2xx: true,
        };

        let mut timings = serde_json::Map::new();
        let mut offenders = Vec::new();

        for endpoint in &self.endpoints {
            let response = probe.get_with(endpoint, opts).await?;
            timings.insert(endpoint.clone(), json!(response.elapsed_ms));

            if response.elapsed_ms > self.threshold_ms {
                offenders.push(format!("{} ({}ms)", endpoint, response.elapsed_ms));
            }
        }

        if !offenders.is_empty() {
            return Err(ValidatorError::assertion(format!(
                "endpoints exceeded the {}ms budget: {}",
                self.threshold_ms,
                offenders.join(", ")
            )));
        }

        Ok(CheckOutcome::pass(json!({
            "threshold_ms": self.threshold_ms,
            "timings_ms": serde_json::Value::Object(timings),
        })))
    }
}
