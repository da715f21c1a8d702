//! Suite dispatcher: maps a selector to an ordered check list and runs it

use crate::checks::{
    ApiHealthCheck, CacheEffectivenessCheck, Check, DatabaseConnectivityCheck,
    EnvironmentConfigCheck, ExternalApisCheck, FrontendHealthCheck, RateLimitCheck,
    ResourceUsageCheck, ResponseTimeCheck, SchemaSanityCheck, SecurityHeadersCheck,
};
use crate::config::ValidatorConfig;
use crate::error::Result;
use crate::probe::ProbeClient;
use crate::report::ValidationRun;
use crate::runner::CheckRunner;
use crate::suite::Suite;
use std::time::Duration;
use tracing::info;

pub struct Dispatcher {
    config: ValidatorConfig,
    probe: ProbeClient,
}

impl Dispatcher {
    pub fn new(config: ValidatorConfig) -> Result<Self> {
        let probe = ProbeClient::new(
            config.target.base_url.clone(),
            Duration::from_secs(config.thresholds.probe_timeout_secs),
        )?;
        Ok(Self { config, probe })
    }

    /// Builds the ordered check list for a suite. Ordering is fixed per
    /// suite for report readability; no check depends on another's result.
    fn catalog(&self, suite: Suite) -> Vec<Box<dyn Check>> {
        let health_timeout = Duration::from_secs(self.config.thresholds.health_timeout_secs);
        let probe_timeout = Duration::from_secs(self.config.thresholds.probe_timeout_secs);
        let burst_timeout = Duration::from_secs(self.config.thresholds.burst_timeout_secs);

        let api_health = || Box::new(ApiHealthCheck::new(health_timeout)) as Box<dyn Check>;
        let frontend = || {
            self.config.target.frontend_url.as_ref().map(|url| {
                Box::new(FrontendHealthCheck::new(url.clone(), health_timeout)) as Box<dyn Check>
            })
        };
        let connectivity = || Box::new(DatabaseConnectivityCheck) as Box<dyn Check>;
        let schema = || Box::new(SchemaSanityCheck) as Box<dyn Check>;
        let external = || Box::new(ExternalApisCheck::default()) as Box<dyn Check>;
        let security = || Box::new(SecurityHeadersCheck::new(probe_timeout)) as Box<dyn Check>;
        let rate_limit = || {
            Box::new(RateLimitCheck::new(
                self.config.rate_limit.path.clone(),
                self.config.rate_limit.burst_size,
                burst_timeout,
            )) as Box<dyn Check>
        };
        let response_times = || {
            Box::new(ResponseTimeCheck::with_default_endpoints(
                self.config.thresholds.response_time_ms,
                burst_timeout,
            )) as Box<dyn Check>
        };
        let cache = || Box::new(CacheEffectivenessCheck::new("/api/countries")) as Box<dyn Check>;
        let env_config = || {
            Box::new(EnvironmentConfigCheck::new(self.config.required_env.clone()))
                as Box<dyn Check>
        };
        let resources = || Box::new(ResourceUsageCheck) as Box<dyn Check>;

        let mut checks: Vec<Box<dyn Check>> = Vec::new();

        match suite {
            Suite::Health => {
                checks.push(api_health());
                if let Some(check) = frontend() {
                    checks.push(check);
                }
                checks.push(connectivity());
                checks.push(schema());
                checks.push(env_config());
                checks.push(resources());
            }
            Suite::Security => {
                checks.push(security());
                checks.push(rate_limit());
                checks.push(env_config());
            }
            Suite::Performance => {
                checks.push(response_times());
                checks.push(cache());
                checks.push(resources());
            }
            Suite::Full => {
                checks.push(api_health());
                if let Some(check) = frontend() {
                    checks.push(check);
                }
                checks.push(connectivity());
                checks.push(schema());
                checks.push(external());
                checks.push(security());
                checks.push(rate_limit());
                checks.push(response_times());
                checks.push(cache());
                checks.push(env_config());
                checks.push(resources());
            }
        }

        checks
    }

    /// Runs every check in the selected suite strictly in order. There is no
    /// fatal path once the suite starts: an unreachable target fails each
    /// dependent check individually and the run still produces a complete
    /// report.
    pub async fn run_suite(&self, suite: Suite) -> ValidationRun {
        let checks = self.catalog(suite);
        info!(
            "Running suite '{}' ({} checks) against {}",
            suite,
            checks.len(),
            self.probe.base_url()
        );

        let mut run = ValidationRun::new(
            self.config.report.environment_label.clone(),
            suite.to_string(),
        );
        let runner = CheckRunner::new(&self.probe);

        for check in &checks {
            runner.run(check.as_ref(), &mut run).await;
        }

        info!(
            "Suite '{}' complete: {} passed, {} failed, {} warnings",
            suite, run.summary.passed, run.summary.failed, run.summary.warnings
        );

        run
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatcher_with(frontend_url: Option<&str>) -> Dispatcher {
        let mut config = ValidatorConfig::default();
        config.target.frontend_url = frontend_url.map(|s| s.to_string());
        Dispatcher::new(config).unwrap()
    }

    fn names(dispatcher: &Dispatcher, suite: Suite) -> Vec<String> {
        dispatcher
            .catalog(suite)
            .iter()
            .map(|c| c.name().to_string())
            .collect()
    }

    #[test]
    fn test_suite_orders_are_fixed() {
        let dispatcher = dispatcher_with(None);

        assert_eq!(
            names(&dispatcher, Suite::Health),
            vec![
                "api-health",
                "database-connectivity",
                "schema-sanity",
                "environment-config",
                "resource-usage",
            ]
        );

        assert_eq!(
            names(&dispatcher, Suite::Security),
            vec!["security-headers", "rate-limiting", "environment-config"]
        );

        assert_eq!(
            names(&dispatcher, Suite::Performance),
            vec!["response-times", "cache-effectiveness", "resource-usage"]
        );

        assert_eq!(
            names(&dispatcher, Suite::Full),
            vec![
                "api-health",
                "database-connectivity",
                "schema-sanity",
                "external-apis",
                "security-headers",
                "rate-limiting",
                "response-times",
                "cache-effectiveness",
                "environment-config",
                "resource-usage",
            ]
        );
    }

    #[test]
    fn test_frontend_check_included_when_configured() {
        let dispatcher = dispatcher_with(Some("http://localhost:3000"));
        let full = names(&dispatcher, Suite::Full);
        assert_eq!(full[1], "frontend-health");

        let health = names(&dispatcher, Suite::Health);
        assert!(health.contains(&"frontend-health".to_string()));
    }
}
