//! Schema and migration sanity check

use crate::checks::{Check, CheckOutcome};
use crate::error::{Result, ValidatorError};
use crate::probe::ProbeClient;
use serde_json::json;

/// Requires the listing endpoint to carry a list-typed `countries` field.
/// Unlike the connectivity check, an empty list passes: the point here is
/// that migrations produced the expected response shape, not that data
/// exists.
pub struct SchemaSanityCheck;

#[async_trait::async_trait]
impl Check for SchemaSanityCheck {
    fn name(&self) -> &str {
        "schema-sanity"
    }

    async fn execute(&self, probe: &ProbeClient) -> Result<CheckOutcome> {
        let response = probe.get("/api/countries?limit=1").await?;
        let body = response.json()?;

        let countries = body.get("countries").ok_or_else(|| {
            ValidatorError::assertion("response lacks the expected \"countries\" field")
        })?;

        let list = countries.as_array().ok_or_else(|| {
            ValidatorError::assertion(format!(
                "expected \"countries\" to be a list, got {}",
                json_type_name(countries)
            ))
        })?;

        Ok(CheckOutcome::pass(json!({
            "countries_field": "array",
            "length": list.len(),
        })))
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a list",
        serde_json::Value::Object(_) => "an object",
    }
}
