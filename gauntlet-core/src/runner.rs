use anyhow::Result;
use serde::Serialize;
use std::time::Instant;
use tracing::{info, warn};

use crate::script::{ScriptExecutor, ScriptStatus};
use crate::settings::Settings;
use crate::suite::{build_plan, SuitePlan};

/// What one invocation produced: the suite plan that was assembled and the
/// entry-script statuses that actually decide the exit code.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub plan: SuitePlan,
    pub scripts: Vec<ScriptStatus>,
}

impl RunReport {
    pub fn all_passed(&self) -> bool {
        self.scripts.iter().all(ScriptStatus::success)
    }

    /// 0 when every entry script reported success, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }
}

/// Dispatches one run: banner, plan assembly, then the entry scripts in
/// configured order, one after another.
///
/// A failing script (non-zero exit) is recorded and the remaining scripts
/// still run. A launch error aborts immediately and the remaining scripts
/// never run; there is no isolation between the script executions.
pub async fn run(
    settings: &Settings,
    filters: &[String],
    executor: &dyn ScriptExecutor,
) -> Result<RunReport> {
    eprintln!("Running tests");

    let plan = build_plan(settings, filters)?;
    // Faithful to the system this replaces: the assembled plan is a load
    // request only. Wiring it into execution would be a behavior change.
    warn!(
        modules = plan.len(),
        "Suite plan assembled but not executed; only entry scripts gate the exit code"
    );

    let mut scripts = Vec::new();
    for script in settings.entry_script_paths() {
        let start = Instant::now();
        let status = executor.run(&script).await?;
        info!(
            script = ?status.script,
            code = status.code,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Entry script finished"
        );
        scripts.push(status);
    }

    Ok(RunReport { plan, scripts })
}
