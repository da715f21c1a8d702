use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorConfig {
    pub target: TargetConfig,
    pub thresholds: ThresholdConfig,
    pub rate_limit: RateLimitProbeConfig,
    pub report: ReportConfig,
    pub required_env: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    pub base_url: String,
    pub frontend_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdConfig {
    pub response_time_ms: u64,
    pub probe_timeout_secs: u64,
    pub health_timeout_secs: u64,
    pub burst_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitProbeConfig {
    pub burst_size: usize,
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub path: String,
    pub environment_label: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            target: TargetConfig::default(),
            thresholds: ThresholdConfig::default(),
            rate_limit: RateLimitProbeConfig::default(),
            report: ReportConfig::default(),
            required_env: vec![
                "DATABASE_URL".to_string(),
                "REDIS_URL".to_string(),
                "JWT_SECRET".to_string(),
            ],
        }
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            frontend_url: None,
        }
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            response_time_ms: 2000,
            probe_timeout_secs: 10,
            health_timeout_secs: 5,
            burst_timeout_secs: 15,
        }
    }
}

impl Default for RateLimitProbeConfig {
    fn default() -> Self {
        Self {
            burst_size: 15,
            path: "/health".to_string(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path: "production-validation-report.json".to_string(),
            environment_label: "production".to_string(),
        }
    }
}

impl ValidatorConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&ValidatorConfig::default())?);

        if std::path::Path::new("validator.toml").exists() {
            builder = builder.add_source(File::with_name("validator"));
        }

        // Nested keys use a double-underscore separator so underscored field
        // names stay addressable, e.g. VALIDATOR_TARGET__BASE_URL,
        // VALIDATOR_REPORT__ENVIRONMENT_LABEL. VALIDATOR_REQUIRED_ENV takes a
        // comma-separated list.
        builder = builder.add_source(
            Environment::with_prefix("VALIDATOR")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("required_env"),
        );

        let config = builder.build()?;
        let validator_config: ValidatorConfig = config.try_deserialize()?;

        validator_config.validate()?;

        Ok(validator_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target.base_url.is_empty() {
            return Err(ConfigError::Message(
                "Target base URL cannot be empty".to_string(),
            ));
        }

        if !self.target.base_url.starts_with("http://")
            && !self.target.base_url.starts_with("https://")
        {
            return Err(ConfigError::Message(
                "Target base URL must start with http:// or https://".to_string(),
            ));
        }

        if self.thresholds.response_time_ms == 0 {
            return Err(ConfigError::Message(
                "Response time budget must be greater than 0".to_string(),
            ));
        }

        if self.thresholds.probe_timeout_secs == 0 {
            return Err(ConfigError::Message(
                "Probe timeout must be greater than 0".to_string(),
            ));
        }

        if self.rate_limit.burst_size < 2 {
            return Err(ConfigError::Message(
                "Rate limit burst size must be at least 2".to_string(),
            ));
        }

        if self.report.path.is_empty() {
            return Err(ConfigError::Message(
                "Report path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
