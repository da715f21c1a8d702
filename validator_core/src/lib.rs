//! Core library for validating a live deployment over its HTTP surface.
//!
//! A validation pass runs a suite of independent checks against the target
//! service, records every outcome in a single [`ValidationRun`], writes a
//! JSON report artifact, and renders a console summary. Check failures are
//! isolated: one broken dependency never aborts the remaining checks.

pub mod checks;
pub mod config;
pub mod error;
pub mod probe;
pub mod report;
pub mod runner;
pub mod suite;

pub use checks::{Check, CheckOutcome};
pub use config::ValidatorConfig;
pub use error::{Result, ValidatorError};
pub use probe::{ProbeClient, ProbeOptions, ProbeResponse};
pub use report::{CheckResult, CheckStatus, ReportGenerator, Summary, ValidationRun};
pub use runner::CheckRunner;
pub use suite::{Dispatcher, Suite};
