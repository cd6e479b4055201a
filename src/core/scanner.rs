// LogSift - core/scanner.rs
//
// Line scanning: the primitive every tool builds on.
// Splits strictly on '\n'; trimming is left to `LogLine::text`.
// Core layer: pure logic, no I/O.

use crate::core::model::LogLine;
use std::str::Split;

/// Lazy, restartable sequence of lines over an in-memory text.
///
/// Clone it before iterating (or call [`scan_lines`] again) to walk the
/// same text a second time.
#[derive(Debug, Clone)]
pub struct LineScanner<'a> {
    parts: Option<Split<'a, char>>,
    next_index: usize,
}

impl<'a> Iterator for LineScanner<'a> {
    type Item = LogLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = self.parts.as_mut()?.next()?;
        let line = LogLine::new(self.next_index, raw);
        self.next_index += 1;
        Some(line)
    }
}

/// Scan `text` into lines.
///
/// Empty or whitespace-only text yields an empty sequence.
pub fn scan_lines(text: &str) -> LineScanner<'_> {
    let parts = if text.trim().is_empty() {
        None
    } else {
        Some(text.split('\n'))
    };
    LineScanner {
        parts,
        next_index: 0,
    }
}

/// Apply `extract` to every non-empty line, in order, collecting the matches.
///
/// When `limit` is `Some(n)`, scanning stops as soon as `n` matches have been
/// collected; later lines are never visited.
pub fn extract_lines<'a, T, F>(text: &'a str, limit: Option<usize>, mut extract: F) -> Vec<T>
where
    F: FnMut(&LogLine<'a>) -> Option<T>,
{
    let mut results = Vec::new();
    if limit == Some(0) {
        return results;
    }
    for line in scan_lines(text) {
        if line.is_empty() {
            continue;
        }
        if let Some(found) = extract(&line) {
            results.push(found);
            if limit.is_some_and(|max| results.len() >= max) {
                tracing::debug!(
                    stopped_at_line = line.index,
                    matches = results.len(),
                    "Match cap reached, scan stopped"
                );
                break;
            }
        }
    }
    results
}

/// Non-blank lines of `text`, keeping each line's original content.
pub fn non_blank_lines(text: &str) -> Vec<&str> {
    scan_lines(text)
        .filter(|line| !line.is_empty())
        .map(|line| line.raw)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_nothing() {
        assert_eq!(scan_lines("").count(), 0);
        assert_eq!(scan_lines("   \n\t \r\n").count(), 0);
    }

    #[test]
    fn test_lines_carry_ordinals() {
        let lines: Vec<_> = scan_lines("a\n\nb\r\n").collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], LogLine::new(0, "a"));
        assert!(lines[1].is_empty());
        assert_eq!(lines[2].index, 2);
        assert_eq!(lines[2].raw, "b\r");
        assert_eq!(lines[2].text(), "b");
    }

    #[test]
    fn test_scanner_is_restartable() {
        let scanner = scan_lines("x\ny");
        let first: Vec<_> = scanner.clone().map(|l| l.raw).collect();
        let second: Vec<_> = scanner.map(|l| l.raw).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_embedded_carriage_return_is_kept() {
        let lines: Vec<_> = scan_lines("a\rb\n").collect();
        assert_eq!(lines[0].text(), "a\rb");
    }

    #[test]
    fn test_extract_stops_at_limit() {
        let mut visited = 0;
        let found = extract_lines("1\n2\n3\n4\n", Some(2), |line| {
            visited += 1;
            Some(line.text().to_string())
        });
        assert_eq!(found, vec!["1", "2"]);
        assert_eq!(visited, 2, "lines after the cap must not be scanned");
    }

    #[test]
    fn test_extract_skips_empty_lines() {
        let found = extract_lines("a\n\n  \nb", None, |line| Some(line.index));
        assert_eq!(found, vec![0, 3]);
    }

    #[test]
    fn test_extract_zero_limit() {
        let found: Vec<usize> = extract_lines("a\nb", Some(0), |line| Some(line.index));
        assert!(found.is_empty());
    }

    #[test]
    fn test_non_blank_lines_keep_original_text() {
        assert_eq!(non_blank_lines(" a \n\n b\n"), vec![" a ", " b"]);
    }
}
