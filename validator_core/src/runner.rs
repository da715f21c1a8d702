//! Check runner: total conversion from check execution to `CheckResult`

use crate::checks::Check;
use crate::probe::ProbeClient;
use crate::report::{CheckResult, ValidationRun};
use std::time::Instant;
use tracing::{error, info, warn};

/// Runs checks one at a time against a single probe client, appending each
/// result to the active run. The runner itself never fails: any error a
/// check raises becomes a `Failed` result, so one broken dependency cannot
/// abort the remaining checks.
pub struct CheckRunner<'a> {
    probe: &'a ProbeClient,
}

impl<'a> CheckRunner<'a> {
    pub fn new(probe: &'a ProbeClient) -> Self {
        Self { probe }
    }

    pub async fn run(&self, check: &dyn Check, run: &mut ValidationRun) -> CheckResult {
        let name = check.name().to_string();
        info!("Running check '{}'", name);

        let start = Instant::now();
        let outcome = check.execute(self.probe).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        let result = match outcome {
            Ok(outcome) => match outcome.advisory {
                Some(note) => {
                    warn!("Check '{}' passed with advisory in {}ms: {}", name, duration_ms, note);
                    CheckResult::warning(name, duration_ms, outcome.detail, note)
                }
                None => {
                    info!("Check '{}' passed in {}ms", name, duration_ms);
                    CheckResult::passed(name, duration_ms, outcome.detail)
                }
            },
            Err(e) => {
                error!("Check '{}' failed in {}ms: {}", name, duration_ms, e);
                CheckResult::failed(name, duration_ms, e.to_string())
            }
        };

        run.push(result.clone());
        result
    }
}
