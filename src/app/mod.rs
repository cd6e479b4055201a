// LogSift - app/mod.rs
//
// Application layer: one driver per tool. Drivers read inputs through the
// platform layer, hand text to core, and write results back. They return
// reports instead of printing, so the CLI decides what reaches stdout.
//
// Error policy:
//   - Single-file drivers propagate every failure to the caller.
//   - Folder drivers isolate per-file failures: the file is logged, recorded
//     in the report, and skipped; the remaining files are still processed.

pub mod cpu;
pub mod filter;
pub mod playback;
pub mod split;
pub mod time_window;

use crate::core::discovery::{self, DiscoveryConfig};
use crate::core::model::ResultBatch;
use crate::platform::fs;
use crate::util::error::InputError;
use std::path::{Path, PathBuf};

/// Outcome of a single-file extraction that appends to a result file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionReport<T> {
    /// Records extracted from the input file.
    pub batch: ResultBatch<T>,

    /// Result file the batch was appended to.
    pub output: PathBuf,

    /// False when the batch was empty and nothing was written.
    pub appended: bool,
}

/// A file in a folder run that could not be processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub source: String,
    pub reason: String,
}

/// Outcome of a folder run that rebuilds one result file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderReport {
    /// Number of log files discovered in the folder.
    pub files_found: usize,

    /// Per-file match counts, for every file that was read successfully.
    pub per_file: Vec<(String, usize)>,

    /// Files skipped because they could not be read.
    pub failures: Vec<FileFailure>,

    /// Non-fatal discovery warnings.
    pub warnings: Vec<String>,

    /// Result file, or `None` when the folder held no log files.
    pub output: Option<PathBuf>,
}

impl FolderReport {
    /// Sum of matched lines across all processed files.
    pub fn total_matched(&self) -> usize {
        self.per_file.iter().map(|(_, n)| n).sum()
    }

    /// Number of files read successfully.
    pub fn files_processed(&self) -> usize {
        self.per_file.len()
    }
}

/// Apply `select` to every log file in `folder`, one file at a time.
///
/// Returns one batch per file read successfully (in file-name order) and a
/// report without an output path. Only a missing or unreadable folder is an
/// error.
fn scan_folder<F>(
    folder: &Path,
    config: &DiscoveryConfig,
    mut select: F,
) -> Result<(Vec<ResultBatch<String>>, FolderReport), InputError>
where
    F: FnMut(&str) -> Vec<String>,
{
    let (files, warnings) = discovery::discover_log_files(folder, config)?;
    for warning in &warnings {
        tracing::warn!(warning = %warning, "Discovery warning");
    }
    tracing::info!(folder = %folder.display(), files = files.len(), "Log files found");

    let mut batches = Vec::with_capacity(files.len());
    let mut report = FolderReport {
        files_found: files.len(),
        per_file: Vec::with_capacity(files.len()),
        failures: Vec::new(),
        warnings,
        output: None,
    };

    for path in &files {
        let source = fs::source_name(path);
        let text = match fs::read_log_file(path) {
            Ok(t) => t,
            Err(e) => {
                tracing::warn!(file = %source, error = %e, "File skipped");
                report.failures.push(FileFailure {
                    source,
                    reason: e.to_string(),
                });
                continue;
            }
        };
        let lines = select(&text);
        tracing::debug!(file = %source, matched = lines.len(), "File processed");
        report.per_file.push((source.clone(), lines.len()));
        batches.push(ResultBatch::new(source, lines));
    }

    Ok((batches, report))
}
