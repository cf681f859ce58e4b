pub mod discovery;
pub mod runner;
pub mod script;
pub mod settings;
pub mod suite;

// Public library API - if you are driving gauntlet as a library, prefer
// these re-exports (everything else is public anyway).
pub use runner::{run, RunReport};
pub use script::{ProcessExecutor, ScriptExecutor, ScriptStatus};
pub use settings::{Settings, SettingsManager};
pub use suite::SuitePlan;
