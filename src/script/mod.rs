//! Script naming conventions, entry-point candidates, and discovery.

use std::fs;
use std::path::Path;

use anyhow::Result;

pub mod host;

pub use host::ScriptHost;

/// File extension for algorithm scripts.
pub const SCRIPT_EXT: &str = "rhai";

/// Map a selection name to its script file name.
pub fn script_file_name(selection: &str) -> String {
    format!("{}.{}", selection, SCRIPT_EXT)
}

/// Candidate entry-point names for a selection, in probe priority order:
/// the exact name, a `run`-prefixed capitalized variant, an
/// `Algorithm`-suffixed variant, then the generic fallbacks.
pub fn entry_candidates(selection: &str) -> Vec<String> {
    vec![
        selection.to_string(),
        format!("run{}", capitalize(selection)),
        format!("{}Algorithm", selection),
        "main".to_string(),
        "run".to_string(),
        "execute".to_string(),
    ]
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// List the selection names available in a scripts directory: the sorted
/// stems of its `*.rhai` files. A missing directory lists as empty.
pub fn discover(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    if !dir.exists() {
        return Ok(names);
    }
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some(SCRIPT_EXT) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            names.push(stem.to_string());
        }
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_follow_probe_order() {
        assert_eq!(
            entry_candidates("exampleSort"),
            vec![
                "exampleSort",
                "runExampleSort",
                "exampleSortAlgorithm",
                "main",
                "run",
                "execute"
            ]
        );
    }

    #[test]
    fn capitalize_handles_empty_and_non_ascii() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("bubble"), "Bubble");
        assert_eq!(capitalize("éclair"), "Éclair");
    }

    #[test]
    fn file_name_uses_selection_verbatim() {
        assert_eq!(script_file_name("weird name"), "weird name.rhai");
    }
}
