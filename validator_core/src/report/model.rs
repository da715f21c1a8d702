//! Result data model for one validation run

use serde::{Deserialize, Serialize};

/// Outcome of a single check. `Warning` is reserved for advisory checks
/// (cache effectiveness, rate limiting) whose negative observations must be
/// surfaced without gating the run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Passed,
    Failed,
    Warning,
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckStatus::Passed => write!(f, "passed"),
            CheckStatus::Failed => write!(f, "failed"),
            CheckStatus::Warning => write!(f, "warning"),
        }
    }
}

/// Immutable record of one check invocation. Invariant: `failure_reason` is
/// present iff `status == Failed`; `detail` is present for passed and
/// warning results; `advisory` is present iff `status == Warning` and
/// carries the warning's rationale independently of the detail shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub duration_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisory: Option<String>,
}

impl CheckResult {
    pub fn passed(name: impl Into<String>, duration_ms: u64, detail: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Passed,
            duration_ms,
            detail: Some(detail),
            failure_reason: None,
            advisory: None,
        }
    }

    pub fn warning(
        name: impl Into<String>,
        duration_ms: u64,
        detail: serde_json::Value,
        advisory: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Warning,
            duration_ms,
            detail: Some(detail),
            failure_reason: None,
            advisory: Some(advisory.into()),
        }
    }

    pub fn failed(name: impl Into<String>, duration_ms: u64, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Failed,
            duration_ms,
            detail: None,
            failure_reason: Some(reason.into()),
            advisory: None,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.status == CheckStatus::Failed
    }
}

/// Derived counts; always recomputed from the result sequence so they can
/// never drift from it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub warnings: usize,
}

impl Summary {
    pub fn of(results: &[CheckResult]) -> Self {
        let mut summary = Summary {
            total: results.len(),
            ..Summary::default()
        };

        for result in results {
            match result.status {
                CheckStatus::Passed => summary.passed += 1,
                CheckStatus::Failed => summary.failed += 1,
                CheckStatus::Warning => summary.warnings += 1,
            }
        }

        summary
    }

    /// Passed share of all checks, as a percentage rounded to two decimals.
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let rate = self.passed as f64 / self.total as f64 * 100.0;
        (rate * 100.0).round() / 100.0
    }
}

/// Accumulator for one validation pass. Mutated only by appending results;
/// the summary is recomputed on every append.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationRun {
    #[serde(rename = "timestamp")]
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub environment: String,
    pub suite: String,
    #[serde(rename = "checks")]
    pub results: Vec<CheckResult>,
    pub summary: Summary,
}

impl ValidationRun {
    pub fn new(environment: impl Into<String>, suite: impl Into<String>) -> Self {
        Self {
            started_at: chrono::Utc::now(),
            environment: environment.into(),
            suite: suite.into(),
            results: Vec::new(),
            summary: Summary::default(),
        }
    }

    pub fn push(&mut self, result: CheckResult) {
        self.results.push(result);
        self.summary = Summary::of(&self.results);
    }

    pub fn has_failures(&self) -> bool {
        self.summary.failed > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_check_result_invariant() {
        let passed = CheckResult::passed("api-health", 42, json!({"status": "healthy"}));
        assert_eq!(passed.status, CheckStatus::Passed);
        assert!(passed.detail.is_some());
        assert!(passed.failure_reason.is_none());

        let failed = CheckResult::failed("api-health", 42, "HTTP 503");
        assert_eq!(failed.status, CheckStatus::Failed);
        assert!(failed.detail.is_none());
        assert_eq!(failed.failure_reason.as_deref(), Some("HTTP 503"));

        let warning = CheckResult::warning(
            "cache-effectiveness",
            100,
            json!({"cache_working": false}),
            "second call was not faster",
        );
        assert_eq!(warning.status, CheckStatus::Warning);
        assert!(warning.detail.is_some());
        assert!(warning.failure_reason.is_none());
        assert_eq!(warning.advisory.as_deref(), Some("second call was not faster"));

        assert!(passed.advisory.is_none());
        assert!(failed.advisory.is_none());
    }

    #[test]
    fn test_summary_counts() {
        let results = vec![
            CheckResult::passed("a", 1, json!({})),
            CheckResult::failed("b", 2, "boom"),
            CheckResult::warning("c", 3, json!({}), "observed nothing"),
            CheckResult::passed("d", 4, json!({})),
        ];

        let summary = Summary::of(&results);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.warnings, 1);
        assert_eq!(
            summary.passed + summary.failed + summary.warnings,
            summary.total
        );
    }

    #[test]
    fn test_success_rate_rounding() {
        let summary = Summary {
            total: 3,
            passed: 2,
            failed: 1,
            warnings: 0,
        };
        assert_eq!(summary.success_rate(), 66.67);

        let empty = Summary::default();
        assert_eq!(empty.success_rate(), 0.0);

        let perfect = Summary {
            total: 5,
            passed: 5,
            failed: 0,
            warnings: 0,
        };
        assert_eq!(perfect.success_rate(), 100.0);
    }

    #[test]
    fn test_run_recomputes_summary_on_push() {
        let mut run = ValidationRun::new("production", "full");
        assert_eq!(run.summary.total, 0);
        assert!(!run.has_failures());

        run.push(CheckResult::passed("a", 1, json!({})));
        assert_eq!(run.summary.total, 1);
        assert_eq!(run.summary.passed, 1);

        run.push(CheckResult::failed("b", 2, "boom"));
        assert_eq!(run.summary.total, 2);
        assert_eq!(run.summary.failed, 1);
        assert!(run.has_failures());
        assert_eq!(run.summary.total, run.results.len());
    }

    #[test]
    fn test_run_serialization_round_trip() {
        let mut run = ValidationRun::new("staging", "security");
        run.push(CheckResult::passed(
            "security-headers",
            15,
            json!({"present": ["x-frame-options"]}),
        ));
        run.push(CheckResult::failed("rate-limiting", 20, "burst failed"));

        let serialized = serde_json::to_string(&run).unwrap();
        assert!(serialized.contains("\"timestamp\""));
        assert!(serialized.contains("\"checks\""));

        let deserialized: ValidationRun = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized.environment, run.environment);
        assert_eq!(deserialized.suite, run.suite);
        assert_eq!(deserialized.results.len(), run.results.len());
        assert_eq!(deserialized.summary, run.summary);
    }
}
