use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use super::loader;

// ---------------------------------------------------------------------------
// Name index: the searchable player directory for one position
// ---------------------------------------------------------------------------

/// Sorted, deduplicated player names plus the slices that failed to parse.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    pub names: Vec<String>,
    /// File stems of sheets that could not be read. Degraded, not fatal.
    pub failed: Vec<String>,
}

/// Build the player directory from the resolved sheet paths.
///
/// Pure in its input list: identical paths produce identical output, which is
/// what makes the per-position memoization in the session context sound. A
/// sheet that fails to parse is recorded and skipped; the build never aborts.
pub fn build_index(paths: &[PathBuf]) -> NameIndex {
    let mut names: BTreeSet<String> = BTreeSet::new();
    let mut failed = Vec::new();

    for path in paths {
        let table = match loader::load_table(path) {
            Ok(table) => table,
            Err(err) => {
                log::warn!("skipping {}: {err}", path.display());
                failed.push(file_stem(path));
                continue;
            }
        };
        for row in &table.rows {
            if let Some(name) = table.identity(row) {
                names.insert(name);
            }
        }
    }

    NameIndex {
        names: names.into_iter().collect(),
        failed,
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string()
}

/// Substring search over the directory. Case-insensitive (Korean names are
/// unaffected, roman-letter queries should not fail on capitalization); an
/// empty or whitespace query matches nothing.
pub fn search(names: &[String], query: &str) -> Vec<String> {
    let wanted = query.trim().to_lowercase();
    if wanted.is_empty() {
        return Vec::new();
    }
    names
        .iter()
        .filter(|name| name.to_lowercase().contains(&wanted))
        .cloned()
        .collect()
}
