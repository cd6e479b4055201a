// LogSift - core/fields.rs
//
// Whitespace-field extraction used by the CPU tool: the value of interest is
// the field immediately before a marker token such as `{page:index}`.

use crate::core::scanner;
use crate::util::constants;
use crate::util::error::ValidationError;

/// Settings for CPU value extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpuConfig {
    /// Stop after this many values.
    pub max_results: usize,

    /// Prefix of the token that follows the CPU field.
    pub marker: String,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            max_results: constants::DEFAULT_CPU_MAX_RESULTS,
            marker: constants::DEFAULT_CPU_MARKER.to_string(),
        }
    }
}

impl CpuConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=constants::ABSOLUTE_MAX_CPU_RESULTS).contains(&self.max_results) {
            return Err(ValidationError::OutOfRange {
                field: "max results",
                value: self.max_results,
                max: constants::ABSOLUTE_MAX_CPU_RESULTS,
            });
        }
        if self.marker.is_empty() {
            return Err(ValidationError::EmptyMarker { field: "cpu marker" });
        }
        Ok(())
    }
}

/// Return the field preceding the first token that starts with `marker`.
///
/// A marker in first position has nothing before it and yields `None`,
/// as does a line without the marker.
pub fn extract_preceding_field<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let pos = tokens.iter().position(|t| t.starts_with(marker))?;
    if pos == 0 {
        return None;
    }
    Some(tokens[pos - 1])
}

/// Extract up to `config.max_results` CPU values from a whole file.
pub fn extract_cpu_values(text: &str, config: &CpuConfig) -> Vec<String> {
    scanner::extract_lines(text, Some(config.max_results), |line| {
        extract_preceding_field(line.text(), &config.marker).map(str::to_string)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_before_marker() {
        assert_eq!(
            extract_preceding_field("cpu=12 {page:index}", "{page:"),
            Some("cpu=12")
        );
    }

    #[test]
    fn test_marker_in_first_position_yields_none() {
        assert_eq!(extract_preceding_field("{page:index}", "{page:"), None);
    }

    #[test]
    fn test_missing_marker_yields_none() {
        assert_eq!(extract_preceding_field("cpu=12 nothing", "{page:"), None);
    }

    #[test]
    fn test_whitespace_runs_are_collapsed() {
        assert_eq!(
            extract_preceding_field("  ts \t 37.5%   {page:home} x", "{page:"),
            Some("37.5%")
        );
    }

    #[test]
    fn test_first_marker_token_wins() {
        assert_eq!(
            extract_preceding_field("a {page:one} b {page:two}", "{page:"),
            Some("a")
        );
    }

    #[test]
    fn test_extract_respects_cap() {
        let text: String = (0..30)
            .map(|i| format!("12:00 cpu{i} {{page:main}}\n"))
            .collect();
        let values = extract_cpu_values(&text, &CpuConfig::default());
        assert_eq!(values.len(), 20);
        assert_eq!(values[0], "cpu0");
        assert_eq!(values[19], "cpu19");
    }

    #[test]
    fn test_extract_skips_non_matching_lines() {
        let text = "header\n{page:x}\n\n5% {page:y}\r\n";
        let config = CpuConfig {
            max_results: 5,
            ..Default::default()
        };
        assert_eq!(extract_cpu_values(text, &config), vec!["5%"]);
    }

    #[test]
    fn test_empty_marker_rejected() {
        let config = CpuConfig {
            marker: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_max_results_bounds_enforced() {
        let zero = CpuConfig {
            max_results: 0,
            ..Default::default()
        };
        assert!(matches!(
            zero.validate(),
            Err(ValidationError::OutOfRange { value: 0, .. })
        ));

        let huge = CpuConfig {
            max_results: constants::ABSOLUTE_MAX_CPU_RESULTS + 1,
            ..Default::default()
        };
        assert!(huge.validate().is_err());

        let at_limit = CpuConfig {
            max_results: constants::ABSOLUTE_MAX_CPU_RESULTS,
            ..Default::default()
        };
        assert!(at_limit.validate().is_ok());
    }
}
