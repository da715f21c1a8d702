//! Rate limiting observation check (advisory)

use crate::checks::{Check, CheckOutcome};
use crate::error::{Result, ValidatorError};
use crate::probe::{ProbeClient, ProbeOptions};
use futures_util::future::join_all;
use serde_json::json;
use std::collections::BTreeMap;
use std::time::Duration;

/// Fires a burst of concurrent GETs at a cheap endpoint and classifies the
/// responses. Rate limit enforcement can only be observed under simultaneous
/// load, so this is the one check that issues probes in parallel.
///
/// Observational: absence of throttling is an advisory warning. The check
/// only fails when the probe layer cannot complete the burst at all.
pub struct RateLimitCheck {
    path: String,
    burst_size: usize,
    timeout: Duration,
}

impl RateLimitCheck {
    pub fn new(path: impl Into<String>, burst_size: usize, timeout: Duration) -> Self {
        Self {
            path: path.into(),
            burst_size,
            timeout,
        }
    }
}

#[async_trait::async_trait]
impl Check for RateLimitCheck {
    fn name(&self) -> &str {
        "rate-limiting"
    }

    async fn execute(&self, probe: &ProbeClient) -> Result<CheckOutcome> {
        let opts = ProbeOptions {
            timeout: self.timeout,
            allow_non_2xx: true,
        };

        let calls = (0..self.burst_size).map(|_| probe.get_with(&self.path, opts));
        let responses = join_all(calls).await;

        let mut statuses = Vec::with_capacity(self.burst_size);
        let mut transport_errors = Vec::new();

        for response in responses {
            match response {
                Ok(r) => statuses.push(r.status),
                Err(e) => transport_errors.push(e.to_string()),
            }
        }

        if statuses.is_empty() {
            return Err(ValidatorError::assertion(format!(
                "could not complete the burst of {} requests: {}",
                self.burst_size,
                transport_errors.join("; ")
            )));
        }

        let stats = BurstStats::classify(&statuses, self.burst_size);

        let outcome = CheckOutcome::pass(json!({
            "path": self.path,
            "burst_size": self.burst_size,
            "completed": statuses.len(),
            "success_count": stats.success_count,
            "rate_limited_count": stats.rate_limited_count,
            "rate_limiting_enabled": stats.rate_limiting_enabled,
            "success_rate": stats.success_rate,
            "status_counts": stats.status_counts,
            "transport_errors": transport_errors,
        }));

        if stats.rate_limiting_enabled {
            Ok(outcome)
        } else {
            Ok(outcome.with_advisory(format!(
                "no 429 responses in a burst of {}; rate limiting may be disabled",
                self.burst_size
            )))
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct BurstStats {
    pub success_count: usize,
    pub rate_limited_count: usize,
    pub rate_limiting_enabled: bool,
    pub success_rate: f64,
    pub status_counts: BTreeMap<u16, usize>,
}

impl BurstStats {
    /// Classifies burst statuses. The success rate is computed against the
    /// full burst size so dropped calls count against it.
    pub fn classify(statuses: &[u16], burst_size: usize) -> Self {
        let mut status_counts = BTreeMap::new();
        for status in statuses {
            *status_counts.entry(*status).or_insert(0usize) += 1;
        }

        let success_count = statuses.iter().filter(|s| (200..300).contains(*s)).count();
        let rate_limited_count = statuses.iter().filter(|s| **s == 429).count();

        let rate = if burst_size == 0 {
            0.0
        } else {
            success_count as f64 / burst_size as f64 * 100.0
        };
        let success_rate = (rate * 100.0).round() / 100.0;

        Self {
            success_count,
            rate_limited_count,
            rate_limiting_enabled: rate_limited_count > 0,
            success_rate,
            status_counts,
        }
    }
}
