use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::discovery::discover_module_names;
use crate::settings::Settings;

/// The ordered test-loading request: fully-qualified module names ready to
/// hand to a test loader.
///
/// Nothing in this crate executes a plan. Only the configured entry
/// scripts decide the run's exit code; the plan exists so the loading
/// request the original system assembled stays observable (`--list`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuitePlan {
    pub names: Vec<String>,
}

impl SuitePlan {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Builds the suite plan from explicit names or, when none are given, from
/// automatic discovery.
///
/// Explicit names are qualified in the order given; the omit set is not
/// consulted and the filesystem is not touched. Whether a requested module
/// actually exists is the downstream loader's problem.
pub fn build_plan(settings: &Settings, explicit: &[String]) -> Result<SuitePlan> {
    let names = if explicit.is_empty() {
        discover_module_names(
            &settings.tests_dir,
            &settings.module_prefix,
            &settings.module_extension,
            &settings.omit,
        )?
    } else {
        explicit.to_vec()
    };

    Ok(SuitePlan {
        names: names.iter().map(|name| settings.qualify(name)).collect(),
    })
}
