// LogSift - core/model.rs
//
// Core data model types. Pure data definitions with no I/O.
// These types are the shared vocabulary across all layers.

// =============================================================================
// LogLine
// =============================================================================

/// A single line of a source file, borrowed from the file's text.
///
/// Created transiently by the line scanner and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLine<'a> {
    /// Zero-based ordinal position within the source text.
    pub index: usize,

    /// Line content exactly as split from the source (no trimming).
    pub raw: &'a str,
}

impl<'a> LogLine<'a> {
    pub fn new(index: usize, raw: &'a str) -> Self {
        Self { index, raw }
    }

    /// Line content with surrounding whitespace (including a trailing `\r`) removed.
    pub fn text(&self) -> &'a str {
        self.raw.trim()
    }

    /// True when the line is blank after trimming.
    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }
}

// =============================================================================
// Playback pair
// =============================================================================

/// Timestamps of a playback start event and the state event that resolved it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackPair {
    pub start: String,
    pub state: String,
}

impl PlaybackPair {
    pub fn new(start: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            state: state.into(),
        }
    }
}

// =============================================================================
// Result batch
// =============================================================================

/// All records extracted from one source file in one run.
///
/// Finalised once built; writers only read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultBatch<T> {
    /// Source identifier, normally the input file name.
    pub source: String,

    /// Records in source order.
    pub records: Vec<T>,
}

impl<T> ResultBatch<T> {
    pub fn new(source: impl Into<String>, records: Vec<T>) -> Self {
        Self {
            source: source.into(),
            records,
        }
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
