// LogSift - core/discovery.rs
//
// Log file discovery inside one input folder.
//
// The folder tools process the files directly inside a folder (no descent
// into subfolders), filtered by filename globs matched case-insensitively.
// Only directory entries and metadata are read here; file contents are read
// by the app layer.
//
// Per-entry access errors are non-fatal and collected as warnings so one bad
// entry never hides the rest of the folder.

use crate::util::constants;
use crate::util::error::InputError;
use glob::MatchOptions;
use std::path::{Path, PathBuf};

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for a discovery operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryConfig {
    /// Glob patterns (filename-only) that a file must match to be included.
    /// An empty list means "include every file".
    pub include_patterns: Vec<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            include_patterns: constants::DEFAULT_INCLUDE_PATTERNS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

// =============================================================================
// Discovery
// =============================================================================

/// List the log files directly inside `root`, sorted by file name.
///
/// # Non-fatal errors
/// Entries that cannot be accessed are recorded as human-readable strings in
/// the returned warnings vector.
///
/// # Fatal errors
/// `NotFound` when `root` does not exist, `NotADirectory` when it is a file,
/// `Io` for any other failure to inspect it.
pub fn discover_log_files(
    root: &Path,
    config: &DiscoveryConfig,
) -> Result<(Vec<PathBuf>, Vec<String>), InputError> {
    let meta = std::fs::metadata(root).map_err(|e| InputError::from_io(root, e))?;
    if !meta.is_dir() {
        return Err(InputError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    tracing::debug!(
        root = %root.display(),
        include = ?config.include_patterns,
        "Discovery starting"
    );

    let include_pats = compile_patterns(&config.include_patterns);

    let mut files: Vec<PathBuf> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    let walker = walkdir::WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(e) => {
                let path_str = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "<unknown>".to_string());
                let msg = format!("Cannot access '{path_str}': {e}");
                tracing::debug!(warning = %msg, "Discovery warning");
                warnings.push(msg);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let file_name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n,
            None => {
                warnings.push(format!("Skipping '{}': non-UTF-8 filename", path.display()));
                continue;
            }
        };

        if !is_included(file_name, &include_pats) {
            tracing::trace!(file = file_name, "Not matched by include patterns");
            continue;
        }

        files.push(path.to_path_buf());
    }

    tracing::debug!(
        files = files.len(),
        warnings = warnings.len(),
        "Discovery complete"
    );

    Ok((files, warnings))
}

// =============================================================================
// Glob helpers
// =============================================================================

/// Compile glob pattern strings; patterns that fail are logged and skipped.
fn compile_patterns(patterns: &[String]) -> Vec<glob::Pattern> {
    patterns
        .iter()
        .filter_map(|p| match glob::Pattern::new(p) {
            Ok(compiled) => Some(compiled),
            Err(e) => {
                tracing::warn!(pattern = p, error = %e, "Invalid glob pattern, skipping");
                None
            }
        })
        .collect()
}

/// Returns true if `file_name` matches at least one include pattern.
/// An empty include list means "include all" (returns true).
fn is_included(file_name: &str, include_pats: &[glob::Pattern]) -> bool {
    if include_pats.is_empty() {
        return true;
    }
    include_pats
        .iter()
        .any(|p| p.matches_with(file_name, MATCH_OPTIONS))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn make_temp_tree() -> TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path();

        fs::write(root.join("b_app.log"), "13:26:00 x\n").expect("write b_app.log");
        fs::write(root.join("a_device.TXT"), "device\n").expect("write a_device.TXT");
        fs::write(root.join("notes.md"), "ignored\n").expect("write notes.md");
        fs::write(root.join("archive.log.gz"), "binary").expect("write .gz");

        let sub = root.join("nested");
        fs::create_dir(&sub).expect("mkdir nested");
        fs::write(sub.join("deep.log"), "not visited\n").expect("write deep.log");

        dir
    }

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|f| f.file_name().unwrap().to_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_lists_log_and_txt_sorted() {
        let dir = make_temp_tree();
        let (files, warnings) = discover_log_files(dir.path(), &DiscoveryConfig::default()).unwrap();
        assert_eq!(names(&files), vec!["a_device.TXT", "b_app.log"]);
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    }

    #[test]
    fn test_does_not_descend() {
        let dir = make_temp_tree();
        let (files, _) = discover_log_files(dir.path(), &DiscoveryConfig::default()).unwrap();
        assert!(!names(&files).contains(&"deep.log".to_string()));
    }

    #[test]
    fn test_empty_patterns_include_everything() {
        let dir = make_temp_tree();
        let config = DiscoveryConfig {
            include_patterns: Vec::new(),
        };
        let (files, _) = discover_log_files(dir.path(), &config).unwrap();
        assert_eq!(files.len(), 4);
    }

    #[test]
    fn test_root_not_found() {
        let result = discover_log_files(
            Path::new("/nonexistent/path/logsift"),
            &DiscoveryConfig::default(),
        );
        assert!(matches!(result, Err(InputError::NotFound { .. })));
    }

    #[test]
    fn test_root_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("single.log");
        fs::write(&file, "content").unwrap();
        let result = discover_log_files(&file, &DiscoveryConfig::default());
        assert!(matches!(result, Err(InputError::NotADirectory { .. })));
    }
}
