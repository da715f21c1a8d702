pub mod generator;
pub mod model;

pub use generator::ReportGenerator;
pub use model::{CheckResult, CheckStatus, Summary, ValidationRun};
