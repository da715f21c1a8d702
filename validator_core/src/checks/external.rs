//! Externally-backed endpoint checks (weather and country lookups)

use crate::checks::{Check, CheckOutcome};
use crate::error::{Result, ValidatorError};
use crate::probe::ProbeClient;
use serde_json::json;

/// Probes each external-dependency-backed endpoint independently and
/// aggregates: any sub-probe failure fails the check with the union of
/// sub-errors.
pub struct ExternalApisCheck {
    endpoints: Vec<(String, String)>,
}

impl ExternalApisCheck {
    pub fn new(endpoints: Vec<(String, String)>) -> Self {
        Self { endpoints }
    }
}

impl Default for ExternalApisCheck {
    fn default() -> Self {
        Self::new(vec![
            ("weather".to_string(), "/api/weather/London".to_string()),
            ("country".to_string(), "/api/country/France".to_string()),
        ])
    }
}

#[async_trait::async_trait]
impl Check for ExternalApisCheck {
    fn name(&self) -> &str {
        "external-apis"
    }

    async fn execute(&self, probe: &ProbeClient) -> Result<CheckOutcome> {
        let mut statuses = serde_json::Map::new();
        let mut errors = Vec::new();

        for (name, path) in &self.endpoints {
            match probe.get(path).await {
                Ok(response) => {
                    statuses.insert(
                        name.clone(),
                        json!({
                            "path": path,
                            "http_status": response.status,
                            "response_time_ms": response.elapsed_ms,
                        }),
                    );
                }
                Err(e) => {
                    errors.push(format!("{} ({}): {}", name, path, e));
                    statuses.insert(name.clone(), json!({ "path": path, "error": e.to_string() }));
                }
            }
        }

        if !errors.is_empty() {
            return Err(ValidatorError::assertion(format!(
                "external API probes failed: {}",
                errors.join("; ")
            )));
        }

        Ok(CheckOutcome::pass(json!({
            "endpoints": serde_json::Value::Object(statuses),
            "probed": self.endpoints.len(),
        })))
    }
}
