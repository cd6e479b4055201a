// LogSift - core/export.rs
//
// Rendering of result batches into the text written to result files.
// Core layer: writes to any Write trait object or returns a String; the
// platform layer decides where the bytes go.

use crate::core::model::{PlaybackPair, ResultBatch};
use crate::util::constants;
use crate::util::error::OutputError;
use chrono::{DateTime, Local};
use std::io::Write;
use std::path::Path;

/// Delimiter used between the two timestamps of a playback pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairDelimiter {
    Tab,
    Comma,
}

impl PairDelimiter {
    /// Comma for `.csv` outputs, tab for everything else. The extension
    /// check is case-sensitive, so `r.CSV` stays tab-delimited.
    pub fn for_output(path: &Path) -> Self {
        if path.extension().is_some_and(|e| e == "csv") {
            Self::Comma
        } else {
            Self::Tab
        }
    }

    fn byte(self) -> u8 {
        match self {
            Self::Tab => b'\t',
            Self::Comma => b',',
        }
    }
}

/// Header line opening every appended block.
pub fn append_header(now: DateTime<Local>) -> String {
    format!(
        "{} {}",
        constants::APPEND_HEADER_LABEL,
        now.format(constants::HEADER_TIMESTAMP_FORMAT)
    )
}

/// Render an appended block: header, blank line, then one record per line.
///
/// `body_lines` must be non-empty; empty batches are never written.
pub fn append_block<S: AsRef<str>>(header: &str, body_lines: &[S]) -> String {
    let mut out = String::with_capacity(header.len() + 2);
    out.push_str(header);
    out.push_str("\n\n");
    for line in body_lines {
        out.push_str(line.as_ref());
        out.push('\n');
    }
    out
}

/// Write playback pairs as delimited records, one pair per line, no header.
///
/// Fields are written raw, never quoted, even when they contain a quote or
/// the delimiter.
pub fn export_pairs<W: Write>(
    pairs: &[PlaybackPair],
    writer: W,
    delimiter: PairDelimiter,
    export_path: &Path,
) -> Result<usize, OutputError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(delimiter.byte())
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    let mut count = 0;
    for pair in pairs {
        csv_writer
            .write_record([pair.start.as_str(), pair.state.as_str()])
            .map_err(|e| OutputError::Csv {
                path: export_path.to_path_buf(),
                source: e,
            })?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| OutputError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}

/// Render playback pairs into body lines for an appended block.
pub fn pair_lines(
    pairs: &[PlaybackPair],
    delimiter: PairDelimiter,
    export_path: &Path,
) -> Result<Vec<String>, OutputError> {
    let mut buf = Vec::new();
    export_pairs(pairs, &mut buf, delimiter, export_path)?;
    let text = String::from_utf8_lossy(&buf);
    Ok(text.lines().map(str::to_string).collect())
}

/// Render the keyword filter report: one section per file with matches.
pub fn keyword_report<S: AsRef<str>>(batches: &[ResultBatch<S>]) -> String {
    let mut out = String::new();
    for batch in batches.iter().filter(|b| !b.is_empty()) {
        out.push_str(&format!("\n=== from file: {} ===\n", batch.source));
        push_lines(&mut out, &batch.records);
    }
    out
}

/// Render the time window report: a two-line header, then one section per
/// file with matches.
pub fn time_window_report<S: AsRef<str>>(
    target: &str,
    generated_at: DateTime<Local>,
    batches: &[ResultBatch<S>],
) -> String {
    let mut out = format!(
        "=== extracted time: {target} ===\n=== generated at: {} ===\n\n",
        generated_at.format(constants::HEADER_TIMESTAMP_FORMAT)
    );
    for batch in batches.iter().filter(|b| !b.is_empty()) {
        out.push_str(&format!("\n// ===== file: {} ===== //\n", batch.source));
        push_lines(&mut out, &batch.records);
    }
    out
}

/// Render one split chunk: lines joined by `\n`, no trailing newline.
pub fn chunk_text(lines: &[&str]) -> String {
    lines.join("\n")
}

fn push_lines<S: AsRef<str>>(out: &mut String, lines: &[S]) {
    for line in lines {
        out.push_str(line.as_ref());
        out.push('\n');
    }
}
