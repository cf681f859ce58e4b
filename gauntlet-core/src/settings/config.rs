use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// Core harness settings.
///
/// Everything the run depends on is explicit here: where test modules live,
/// the naming convention they follow, and which entry scripts gate the exit
/// code. Nothing is picked up from ambient process state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory scanned for test modules; entry scripts resolve against it
    #[serde(default = "default_tests_dir")]
    pub tests_dir: PathBuf,

    /// Namespace prepended to module names when building qualified names
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// File-stem prefix a module must carry to be discovered
    #[serde(default = "default_module_prefix")]
    pub module_prefix: String,

    /// File extension (without the dot) a module candidate must carry
    #[serde(default = "default_module_extension")]
    pub module_extension: String,

    /// Module names excluded from automatic discovery. Explicitly requested
    /// names are never filtered against this set.
    #[serde(default)]
    pub omit: HashSet<String>,

    /// Scripts executed as top-level programs, in order, relative to the
    /// tests directory. These are what decide the exit code.
    #[serde(default = "default_entry_scripts")]
    pub entry_scripts: Vec<PathBuf>,

    /// Command line the entry scripts run under, e.g. "python3" or
    /// "python3 -B". An empty string executes each script file directly.
    #[serde(default = "default_interpreter")]
    pub interpreter: String,
}

fn default_tests_dir() -> PathBuf {
    PathBuf::from("tests")
}

fn default_namespace() -> String {
    "tests".to_string()
}

fn default_module_prefix() -> String {
    "test_".to_string()
}

fn default_module_extension() -> String {
    "py".to_string()
}

fn default_entry_scripts() -> Vec<PathBuf> {
    vec![
        PathBuf::from("test_ast.py"),
        PathBuf::from("test_conc.py"),
        PathBuf::from("tman_conc.py"),
    ]
}

fn default_interpreter() -> String {
    "python3".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tests_dir: default_tests_dir(),
            namespace: default_namespace(),
            module_prefix: default_module_prefix(),
            module_extension: default_module_extension(),
            omit: HashSet::new(),
            entry_scripts: default_entry_scripts(),
            interpreter: default_interpreter(),
        }
    }
}

impl Settings {
    /// Entry scripts joined onto the tests directory, in configured order.
    /// Absolute script paths pass through unchanged.
    pub fn entry_script_paths(&self) -> Vec<PathBuf> {
        self.entry_scripts
            .iter()
            .map(|script| self.tests_dir.join(script))
            .collect()
    }

    /// Fully-qualified name for a module: `namespace.module`. An empty
    /// namespace yields the bare module name.
    pub fn qualify(&self, name: &str) -> String {
        if self.namespace.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.namespace, name)
        }
    }
}
