//! Check catalog: each module holds one self-contained validation procedure

pub mod cache;
pub mod connectivity;
pub mod environment;
pub mod external;
pub mod frontend;
pub mod health;
pub mod performance;
pub mod rate_limit;
pub mod resources;
pub mod schema;
pub mod security;

pub use cache::CacheEffectivenessCheck;
pub use connectivity::DatabaseConnectivityCheck;
pub use environment::EnvironmentConfigCheck;
pub use external::ExternalApisCheck;
pub use frontend::FrontendHealthCheck;
pub use health::ApiHealthCheck;
pub use performance::ResponseTimeCheck;
pub use rate_limit::RateLimitCheck;
pub use resources::ResourceUsageCheck;
pub use schema::SchemaSanityCheck;
pub use security::SecurityHeadersCheck;

use crate::error::Result;
use crate::probe::ProbeClient;

/// What a successful check hands back: a structured detail payload, plus an
/// optional advisory note for observations that should be surfaced as a
/// warning rather than a pass.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub detail: serde_json::Value,
    pub advisory: Option<String>,
}

impl CheckOutcome {
    pub fn pass(detail: serde_json::Value) -> Self {
        Self {
            detail,
            advisory: None,
        }
    }

    pub fn with_advisory(mut self, note: impl Into<String>) -> Self {
        self.advisory = Some(note.into());
        self
    }
}

/// One named unit of validation logic. Checks are independent: no check
/// reads another's result, and any error a check returns is absorbed by the
/// runner.
#[async_trait::async_trait]
pub trait Check: Send + Sync {
    fn name(&self) -> &str;

    async fn execute(&self, probe: &ProbeClient) -> Result<CheckOutcome>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_outcome_advisory() {
        let outcome = CheckOutcome::pass(json!({"ok": true}));
        assert!(outcome.advisory.is_none());

        let outcome = outcome.with_advisory("throttling not observed");
        assert_eq!(outcome.advisory.as_deref(), Some("throttling not observed"));
    }
}
