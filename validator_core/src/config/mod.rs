pub mod settings;

pub use settings::{
    RateLimitProbeConfig, ReportConfig, TargetConfig, ThresholdConfig, ValidatorConfig,
};
