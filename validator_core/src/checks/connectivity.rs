//! Database-backed listing endpoint connectivity check

use crate::checks::{Check, CheckOutcome};
use crate::error::{Result, ValidatorError};
use crate::probe::ProbeClient;
use serde_json::json;

/// Probes the countries listing endpoint with a small page size and requires
/// a non-empty result list, proving the API can reach its datastore.
pub struct DatabaseConnectivityCheck;

#[async_trait::async_trait]
impl Check for DatabaseConnectivityCheck {
    fn name(&self) -> &str {
        "database-connectivity"
    }

    async fn execute(&self, probe: &ProbeClient) -> Result<CheckOutcome> {
        let response = probe.get("/api/countries?limit=5").await?;
        let body = response.json()?;

        let countries = body
            .get("countries")
            .and_then(|v| v.as_array())
            .ok_or_else(|| {
                ValidatorError::assertion("response is missing a \"countries\" list")
            })?;

        if countries.is_empty() {
            return Err(ValidatorError::assertion(
                "countries list is empty; database appears unseeded or unreachable",
            ));
        }

        Ok(CheckOutcome::pass(json!({
            "countries_returned": countries.len(),
            "sample": countries.first(),
            "response_time_ms": response.elapsed_ms,
        })))
    }
}
