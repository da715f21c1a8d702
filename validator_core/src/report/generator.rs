//! Report artifact writer and console summary rendering

use crate::error::Result;
use crate::report::model::{CheckStatus, ValidationRun};
use std::path::{Path, PathBuf};
use tracing::info;

pub struct ReportGenerator {
    path: PathBuf,
}

impl ReportGenerator {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serializes the run to pretty JSON at the configured path.
    pub async fn write(&self, run: &ValidationRun) -> Result<PathBuf> {
        let json = serde_json::to_string_pretty(run)?;
        tokio::fs::write(&self.path, json).await?;
        info!("Validation report written to {}", self.path.display());
        Ok(self.path.clone())
    }

    /// Renders the human-readable summary block printed after a run.
    pub fn render_console(run: &ValidationRun) -> String {
        let mut out = String::new();
        let line = "=".repeat(60);
        let rule = "-".repeat(60);

        out.push_str(&line);
        out.push_str("\n Deployment Validation Report\n");
        out.push_str(&line);
        out.push('\n');
        out.push_str(&format!(" Environment  : {}\n", run.environment));
        out.push_str(&format!(" Suite        : {}\n", run.suite));
        out.push_str(&format!(
            " Started      : {}\n",
            run.started_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format!(" Total checks : {}\n", run.summary.total));
        out.push_str(&format!(" Passed       : {}\n", run.summary.passed));
        out.push_str(&format!(" Failed       : {}\n", run.summary.failed));
        out.push_str(&format!(" Warnings     : {}\n", run.summary.warnings));
        out.push_str(&format!(
            " Success rate : {:.2}%\n",
            run.summary.success_rate()
        ));

        let failed: Vec<_> = run
            .results
            .iter()
            .filter(|r| r.status == CheckStatus::Failed)
            .collect();
        let warned: Vec<_> = run
            .results
            .iter()
            .filter(|r| r.status == CheckStatus::Warning)
            .collect();

        if !failed.is_empty() || !warned.is_empty() {
            out.push_str(&rule);
            out.push('\n');
        }

        for result in failed {
            out.push_str(&format!(
                " FAILED  {}: {}\n",
                result.name,
                result.failure_reason.as_deref().unwrap_or("unknown failure")
            ));
        }

        for result in warned {
            let note = result.advisory.as_deref().unwrap_or("advisory observation");
            out.push_str(&format!(" WARN    {}: {}\n", result.name, note));
        }

        out.push_str(&line);
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::model::CheckResult;
    use serde_json::json;

    fn sample_run() -> ValidationRun {
        let mut run = ValidationRun::new("production", "full");
        run.push(CheckResult::passed("api-health", 42, json!({"status": "healthy"})));
        run.push(CheckResult::failed(
            "security-headers",
            12,
            "missing security headers: content-security-policy",
        ));
        run.push(CheckResult::warning(
            "cache-effectiveness",
            310,
            json!({"cache_working": false}),
            "second call was not faster",
        ));
        run
    }

    #[test]
    fn test_console_summary_contents() {
        let run = sample_run();
        let rendered = ReportGenerator::render_console(&run);

        assert!(rendered.contains("Deployment Validation Report"));
        assert!(rendered.contains("Total checks : 3"));
        assert!(rendered.contains("Passed       : 1"));
        assert!(rendered.contains("Failed       : 1"));
        assert!(rendered.contains("Warnings     : 1"));
        assert!(rendered.contains("Success rate : 33.33%"));
        assert!(rendered
            .contains("FAILED  security-headers: missing security headers: content-security-policy"));
        assert!(rendered.contains("WARN    cache-effectiveness: second call was not faster"));
    }

    #[tokio::test]
    async fn test_write_report_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("production-validation-report.json");
        let generator = ReportGenerator::new(&path);

        let run = sample_run();
        let written = generator.write(&run).await.unwrap();
        assert_eq!(written, path);

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: ValidationRun = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.summary, run.summary);
        assert_eq!(parsed.results.len(), 3);
        assert_eq!(parsed.results[0].name, "api-health");
    }
}
