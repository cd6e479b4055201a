// LogSift - app/split.rs
//
// `split` tool driver: divide one log file into N chunk files named
// `<prefix>_<n>.log`. Blank lines are dropped; every other line is written
// to exactly one chunk, which the driver verifies after writing.

use crate::core::export;
use crate::core::scanner;
use crate::core::splitter;
use crate::platform::fs;
use crate::util::constants;
use crate::util::error::Result;
use std::path::{Path, PathBuf};

/// Outcome of a split run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitReport {
    /// Non-blank lines in the input.
    pub total_lines: usize,

    /// Target lines per chunk.
    pub lines_per_chunk: usize,

    /// Chunk files written, with their line counts.
    pub written: Vec<(PathBuf, usize)>,

    /// Chunk files not created because no lines were left for them.
    pub skipped: Vec<PathBuf>,
}

impl SplitReport {
    pub fn lines_written(&self) -> usize {
        self.written.iter().map(|(_, n)| n).sum()
    }

    /// True when every non-blank input line was written exactly once.
    pub fn is_reconciled(&self) -> bool {
        self.lines_written() == self.total_lines
    }
}

/// Path of chunk `ordinal` for `prefix`.
pub fn chunk_path(prefix: &Path, ordinal: usize) -> PathBuf {
    let mut name = prefix.as_os_str().to_os_string();
    name.push(format!("_{ordinal}.{}", constants::SPLIT_CHUNK_EXTENSION));
    PathBuf::from(name)
}

/// Split `input` into `parts` chunk files named after `prefix`.
pub fn run(input: &Path, prefix: &Path, parts: usize) -> Result<SplitReport> {
    splitter::validate_parts(parts)?;
    tracing::info!(input = %input.display(), parts, "Splitting log file");

    let text = fs::read_log_file(input)?;
    let lines = scanner::non_blank_lines(&text);
    let plan = splitter::split(&lines, parts)?;

    let mut report = SplitReport {
        total_lines: plan.total_lines,
        lines_per_chunk: plan.lines_per_chunk,
        written: Vec::with_capacity(plan.chunks.len()),
        skipped: plan.skipped.clone().map(|n| chunk_path(prefix, n)).collect(),
    };

    if plan.total_lines == 0 {
        tracing::info!("Input has no non-blank lines; nothing to split");
        return Ok(report);
    }

    for chunk in &plan.chunks {
        let path = chunk_path(prefix, chunk.ordinal);
        fs::write_file(&path, &export::chunk_text(chunk.lines))?;
        tracing::debug!(file = %path.display(), lines = chunk.lines.len(), "Chunk written");
        report.written.push((path, chunk.lines.len()));
    }
    for path in &report.skipped {
        tracing::debug!(file = %path.display(), "Chunk skipped (no content)");
    }

    if report.is_reconciled() {
        tracing::info!(
            chunks = report.written.len(),
            lines = report.total_lines,
            "All lines split"
        );
    } else {
        tracing::warn!(
            written = report.lines_written(),
            total = report.total_lines,
            "Line count mismatch after split"
        );
    }

    Ok(report)
}
