// LogSift - core/time_window.rs
//
// Single-minute time window matching. The `HH:MM` of a line is the first
// "digits:digits:" run; the trailing colon separates `HH:MM:SS[.mmm]` stamps
// from bare `HH:MM` text such as ratios or scores.
//
// Digits and the leading boundary are ASCII-only: a CJK character directly
// before a stamp still counts as a boundary, and fullwidth digits never match.

use crate::core::scanner;
use crate::util::error::ValidationError;
use regex::Regex;
use std::sync::OnceLock;

fn time_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:^|[^0-9A-Za-z_])([0-9]{1,2}:[0-9]{2}):")
            .expect("time_regex: invalid regex")
    })
}

fn target_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[0-9]{1,2}:[0-9]{2}$").expect("target_regex: invalid regex")
    })
}

/// Return the `HH:MM` portion of the first timestamp-shaped run in `line`.
pub fn extract_time(line: &str) -> Option<&str> {
    time_regex()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// A validated target minute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    target: String,
}

impl TimeWindow {
    /// Accepts `H:MM` or `HH:MM`; the comparison later is exact string
    /// equality, so `9:05` and `09:05` are different windows.
    pub fn new(target: &str) -> Result<Self, ValidationError> {
        let target = target.trim();
        if !target_regex().is_match(target) {
            return Err(ValidationError::InvalidTargetTime {
                value: target.to_string(),
            });
        }
        Ok(Self {
            target: target.to_string(),
        })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// True when the line's extracted minute equals the target.
    pub fn matches(&self, line: &str) -> bool {
        extract_time(line) == Some(self.target.as_str())
    }

    /// Target minute without the colon, for use in file names.
    pub fn compact(&self) -> String {
        self.target.replace(':', "")
    }
}

/// Non-blank lines of `text` stamped with the window's minute, untouched.
pub fn lines_in_window<'a>(text: &'a str, window: &TimeWindow) -> Vec<&'a str> {
    scanner::scan_lines(text)
        .filter(|line| !line.is_empty() && window.matches(line.raw))
        .map(|line| line.raw)
        .collect()
}
