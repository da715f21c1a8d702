//! Required configuration check

use crate::checks::{Check, CheckOutcome};
use crate::error::{Result, ValidatorError};
use crate::probe::ProbeClient;
use serde_json::json;

/// Verifies every required environment entry is set and non-empty. Values
/// are never echoed into the report, only names.
pub struct EnvironmentConfigCheck {
    required: Vec<String>,
}

impl EnvironmentConfigCheck {
    pub fn new(required: Vec<String>) -> Self {
        Self { required }
    }
}

#[async_trait::async_trait]
impl Check for EnvironmentConfigCheck {
    fn name(&self) -> &str {
        "environment-config"
    }

    async fn execute(&self, _probe: &ProbeClient) -> Result<CheckOutcome> {
        let mut present = Vec::new();
        let mut missing = Vec::new();

        for name in &self.required {
            let set = std::env::var(name)
                .map(|v| !v.trim().is_empty())
                .unwrap_or(false);
            if set {
                present.push(name.clone());
            } else {
                missing.push(name.clone());
            }
        }

        if !missing.is_empty() {
            return Err(ValidatorError::assertion(format!(
                "missing required environment entries: {}",
                missing.join(", ")
            )));
        }

        Ok(CheckOutcome::pass(json!({
            "checked": self.required.len(),
            "present": present,
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::ProbeClient;
    use std::time::Duration;

    fn probe() -> ProbeClient {
        ProbeClient::new("http://localhost:1", Duration::from_secs(1)).unwrap()
    }

    #[tokio::test]
    async fn test_missing_entries_are_named() {
        std::env::set_var("VALIDATOR_TEST_SET_VAR", "value");
        std::env::remove_var("VALIDATOR_TEST_UNSET_VAR");

        let check = EnvironmentConfigCheck::new(vec![
            "VALIDATOR_TEST_SET_VAR".to_string(),
            "VALIDATOR_TEST_UNSET_VAR".to_string(),
        ]);

        let err = check.execute(&probe()).await.unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("VALIDATOR_TEST_UNSET_VAR"));
        assert!(!msg.contains("VALIDATOR_TEST_SET_VAR,"));
    }

    #[tokio::test]
    async fn test_blank_value_counts_as_missing() {
        std::env::set_var("VALIDATOR_TEST_BLANK_VAR", "   ");

        let check = EnvironmentConfigCheck::new(vec!["VALIDATOR_TEST_BLANK_VAR".to_string()]);
        let err = check.execute(&probe()).await.unwrap_err();
        assert!(err.to_string().contains("VALIDATOR_TEST_BLANK_VAR"));
    }

    #[tokio::test]
    async fn test_all_present_passes() {
        std::env::set_var("VALIDATOR_TEST_PRESENT_VAR", "value");

        let check = EnvironmentConfigCheck::new(vec!["VALIDATOR_TEST_PRESENT_VAR".to_string()]);
        let outcome = check.execute(&probe()).await.unwrap();
        assert_eq!(outcome.detail["checked"], 1);
    }
}
