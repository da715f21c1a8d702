//! Cache effectiveness check (advisory)

use crate::checks::{Check, CheckOutcome};
use crate::error::Result;
use crate::probe::ProbeClient;
use serde_json::json;

/// Issues the same idempotent GET twice in sequence and compares timings.
/// A slower second call is an advisory warning, never a failure: cache
/// configuration is deployment-dependent and should be surfaced, not gate a
/// deploy. Only a transport failure on either call fails the check.
pub struct CacheEffectivenessCheck {
    path: String,
}

impl CacheEffectivenessCheck {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl Check for CacheEffectivenessCheck {
    fn name(&self) -> &str {
        "cache-effectiveness"
    }

    async fn execute(&self, probe: &ProbeClient) -> Result<CheckOutcome> {
        let first = probe.get(&self.path).await?;
        let second = probe.get(&self.path).await?;

        let cache_working = second.elapsed_ms < first.elapsed_ms;
        let speedup = speedup_factor(first.elapsed_ms, second.elapsed_ms);

        let outcome = CheckOutcome::pass(json!({
            "path": self.path,
            "first_call_ms": first.elapsed_ms,
            "second_call_ms": second.elapsed_ms,
            "cache_working": cache_working,
            "speedup_factor": speedup,
        }));

        if cache_working {
            Ok(outcome)
        } else {
            Ok(outcome.with_advisory(format!(
                "second call ({}ms) was not faster than the first ({}ms); cache may be cold or disabled",
                second.elapsed_ms, first.elapsed_ms
            )))
        }
    }
}

fn speedup_factor(first_ms: u64, second_ms: u64) -> f64 {
    let first = first_ms.max(1) as f64;
    let second = second_ms.max(1) as f64;
    let factor = first / second;
    (factor * 100.0).round() / 100.0
}
