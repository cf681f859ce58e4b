use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

/// Module stems that can never be discovered: a package's own entry and
/// metadata modules would otherwise match an empty or matching prefix.
const PACKAGE_ENTRY_MODULES: &[&str] = &["__main__", "__init__"];

/// Enumerates test module names in `dir` by naming convention.
///
/// A candidate is a regular file directly under `dir` whose extension is
/// `extension`; its module name is the file stem. A candidate is kept when
/// the stem starts with `prefix` and is not in `omit`. Names come back
/// sorted so the result does not depend on directory iteration order.
///
/// The omit set applies here only; explicitly requested names bypass
/// discovery entirely (see [`crate::suite::build_plan`]).
pub fn discover_module_names(
    dir: &Path,
    prefix: &str,
    extension: &str,
    omit: &HashSet<String>,
) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to scan test directory {dir:?}"))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Failed to read entry in {:?}: {}", dir, e);
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some(extension) {
            continue;
        }

        let stem = match path.file_stem().and_then(|stem| stem.to_str()) {
            Some(stem) => stem,
            None => {
                warn!("Skipping non-UTF-8 file name {:?}", path);
                continue;
            }
        };

        if !stem.starts_with(prefix) {
            continue;
        }
        if PACKAGE_ENTRY_MODULES.contains(&stem) {
            continue;
        }
        if omit.contains(stem) {
            debug!("Omitting module '{}' per configuration", stem);
            continue;
        }

        names.push(stem.to_string());
    }

    names.sort();
    debug!("Discovered {} test modules in {:?}", names.len(), dir);
    Ok(names)
}
