//! Main entry point for the deployment validator binary

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use validator_core::{Dispatcher, ReportGenerator, Suite, ValidatorConfig};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = ValidatorConfig::load()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    let selector = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("VALIDATOR_SUITE").ok())
        .unwrap_or_else(|| "full".to_string());
    let suite = Suite::parse(&selector);

    info!("Configuration loaded successfully");
    info!("Target base URL: {}", config.target.base_url);
    if let Some(frontend) = &config.target.frontend_url {
        info!("Frontend URL: {}", frontend);
    }
    info!("Suite: {} (selector: \"{}\")", suite, selector);
    info!("Environment: {}", config.report.environment_label);

    let generator = ReportGenerator::new(&config.report.path);

    let dispatcher = Dispatcher::new(config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize probe client: {}", e))?;

    let run = dispatcher.run_suite(suite).await;

    generator
        .write(&run)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to write validation report: {}", e))?;

    println!("{}", ReportGenerator::render_console(&run));

    if run.has_failures() {
        info!("Validation finished with {} failed check(s)", run.summary.failed);
        std::process::exit(1);
    }

    info!("Validation finished: all checks passed");
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            let default_level = if cfg!(debug_assertions) {
                "debug"
            } else {
                "info"
            };

            format!("validator_core={},validator_cli={}", default_level, default_level).into()
        });

    let fmt_layer = fmt::layer().with_target(true);

    let is_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    if is_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .init();
    }
}
