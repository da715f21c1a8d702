//! Local resource snapshot check

use crate::checks::{Check, CheckOutcome};
use crate::error::Result;
use crate::probe::ProbeClient;
use serde_json::json;
use sysinfo::System;

/// Records process and system memory/CPU counters. Purely local; never
/// fails. Unavailable counters are reported as such instead of erroring.
pub struct ResourceUsageCheck;

#[async_trait::async_trait]
impl Check for ResourceUsageCheck {
    fn name(&self) -> &str {
        "resource-usage"
    }

    async fn execute(&self, _probe: &ProbeClient) -> Result<CheckOutcome> {
        let mut system = System::new_all();
        system.refresh_all();

        let memory_total = system.total_memory();
        let memory_used = system.used_memory();
        let memory_usage_percent = if memory_total > 0 {
            let pct = memory_used as f64 / memory_total as f64 * 100.0;
            (pct * 100.0).round() / 100.0
        } else {
            0.0
        };

        let process = sysinfo::get_current_pid()
            .ok()
            .and_then(|pid| system.process(pid));

        let process_detail = match process {
            Some(p) => json!({
                "available": true,
                "memory_bytes": p.memory(),
                "virtual_memory_bytes": p.virtual_memory(),
                "cpu_usage_percent": p.cpu_usage(),
            }),
            None => json!({ "available": false }),
        };

        Ok(CheckOutcome::pass(json!({
            "system": {
                "memory_total_bytes": memory_total,
                "memory_used_bytes": memory_used,
                "memory_usage_percent": memory_usage_percent,
                "cpu_count": system.cpus().len(),
            },
            "process": process_detail,
        })))
    }
}
