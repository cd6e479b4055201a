// LogSift - core/playback.rs
//
// Playback startup pairing. Each "enter page" start event is paired with the
// nearest following video-state event, so the two timestamps bound the
// startup latency of one playback attempt.
//
// Rules:
//   - A start line pairs with at most one state line and vice versa; paired
//     indices go into a consumed set and never take part in another pair.
//   - A second start line seen before any state line supersedes the first,
//     which is dropped without output.
//   - Timestamps are read from a fixed column (characters 6..18) of the
//     trimmed line. The column layout comes from the logging harness; the
//     offset is not derived from delimiters.

use crate::core::model::{LogLine, PlaybackPair};
use crate::core::scanner;
use crate::util::constants::{self, TIMESTAMP_COLUMN_END, TIMESTAMP_COLUMN_START};
use crate::util::error::ValidationError;
use crate::util::logging;
use std::collections::HashSet;

/// Markers identifying the two halves of a playback attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackMarkers {
    /// Substring of the line that starts an attempt.
    pub start: String,

    /// Substrings of lines that resolve an attempt (any one suffices).
    pub states: Vec<String>,
}

impl Default for PlaybackMarkers {
    fn default() -> Self {
        Self {
            start: constants::DEFAULT_PLAYBACK_START_MARKER.to_string(),
            states: constants::DEFAULT_PLAYBACK_STATE_MARKERS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

impl PlaybackMarkers {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.start.is_empty() {
            return Err(ValidationError::EmptyMarker {
                field: "playback start marker",
            });
        }
        if self.states.is_empty() || self.states.iter().any(String::is_empty) {
            return Err(ValidationError::EmptyMarker {
                field: "playback state markers",
            });
        }
        Ok(())
    }

    fn is_start(&self, line: &str) -> bool {
        line.contains(self.start.as_str())
    }

    fn is_state(&self, line: &str) -> bool {
        self.states.iter().any(|m| line.contains(m.as_str()))
    }
}

/// Read the fixed timestamp column (characters 6 through 17) from a line.
///
/// Returns `None` for lines shorter than 18 characters. Offsets count
/// characters, not bytes.
pub fn extract_fixed_timestamp(line: &str) -> Option<&str> {
    let mut boundaries = line
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(line.len()));
    let start = boundaries.nth(TIMESTAMP_COLUMN_START)?;
    let end = boundaries.nth(TIMESTAMP_COLUMN_END - TIMESTAMP_COLUMN_START - 1)?;
    Some(&line[start..end])
}

/// Pair start and state events over an indexable sequence of lines.
pub fn correlate(lines: &[LogLine<'_>], markers: &PlaybackMarkers) -> Vec<PlaybackPair> {
    let mut consumed: HashSet<usize> = HashSet::new();
    let mut pairs = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if consumed.contains(&line.index) {
            continue;
        }
        let text = line.text();
        if text.is_empty() || !markers.is_start(text) {
            continue;
        }
        let Some(start_ts) = extract_fixed_timestamp(text) else {
            continue;
        };

        for next in &lines[i + 1..] {
            let next_text = next.text();
            if next_text.is_empty() {
                continue;
            }
            if markers.is_start(next_text) {
                tracing::trace!(
                    start_line = line.index,
                    superseded_by = next.index,
                    line = logging::preview(text),
                    "Unresolved playback start dropped"
                );
                break;
            }
            if markers.is_state(next_text) {
                if let Some(state_ts) = extract_fixed_timestamp(next_text) {
                    pairs.push(PlaybackPair::new(start_ts, state_ts));
                    consumed.insert(line.index);
                    consumed.insert(next.index);
                    break;
                }
            }
        }
    }

    pairs
}

/// Scan `text` and pair its playback events.
pub fn extract_playback_pairs(text: &str, markers: &PlaybackMarkers) -> Vec<PlaybackPair> {
    let lines: Vec<LogLine<'_>> = scanner::scan_lines(text).collect();
    correlate(&lines, markers)
}
