use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;
use thiserror::Error;
use tokio::process::Command;

/// A launch failure: the harness could not start or await the script. This
/// is distinct from the script running and exiting non-zero, which is an
/// ordinary falsy [`ScriptStatus`].
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Entry script not found: {0:?}")]
    NotFound(PathBuf),

    #[error("Failed to parse interpreter command {0:?}")]
    BadInterpreter(String),

    #[error("Failed to launch {script:?}: {source}")]
    Launch {
        script: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed waiting on {script:?}: {source}")]
    Wait {
        script: PathBuf,
        source: std::io::Error,
    },
}

/// Outcome of running one script as a top-level program.
#[derive(Debug, Clone, Serialize)]
pub struct ScriptStatus {
    pub script: PathBuf,
    pub code: i32,
}

impl ScriptStatus {
    /// Truthy result: the script exited with status 0.
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Executes one script file as a top-level program and reports its status.
/// The runner depends on this seam; tests substitute scripted doubles.
#[async_trait::async_trait]
pub trait ScriptExecutor {
    async fn run(&self, script: &Path) -> Result<ScriptStatus>;
}

/// Runs scripts as child processes under a configured interpreter command.
#[derive(Debug)]
pub struct ProcessExecutor {
    interpreter: Vec<String>,
}

impl ProcessExecutor {
    /// Splits `interpreter` shell-style, e.g. "python3 -B". An empty string
    /// means execute each script file directly.
    pub fn new(interpreter: &str) -> Result<Self, ScriptError> {
        let interpreter = shell_words::split(interpreter)
            .map_err(|_| ScriptError::BadInterpreter(interpreter.to_string()))?;
        Ok(Self { interpreter })
    }
}

#[async_trait::async_trait]
impl ScriptExecutor for ProcessExecutor {
    async fn run(&self, script: &Path) -> Result<ScriptStatus> {
        // Checked before spawn so a missing script fails the same way no
        // matter which interpreter is configured.
        if !script.is_file() {
            return Err(ScriptError::NotFound(script.to_path_buf()).into());
        }

        let mut command = match self.interpreter.split_first() {
            Some((program, args)) => {
                let mut command = Command::new(program);
                command.args(args).arg(script);
                command
            }
            None => Command::new(script),
        };

        // Stdio is inherited: the script owns the process streams while it
        // runs, exactly as if it were the top-level program.
        let mut child = command.spawn().map_err(|source| ScriptError::Launch {
            script: script.to_path_buf(),
            source,
        })?;

        let status = child.wait().await.map_err(|source| ScriptError::Wait {
            script: script.to_path_buf(),
            source,
        })?;

        Ok(ScriptStatus {
            script: script.to_path_buf(),
            // Signal-terminated children have no exit code; count them as
            // failed, not as launch errors.
            code: status.code().unwrap_or(1),
        })
    }
}
