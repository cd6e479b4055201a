// LogSift - platform/config.rs
//
// Platform config directory resolution and optional config.toml loading
// with startup validation.
//
// The file only overrides built-in defaults; every tool works without it.
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::discovery::DiscoveryConfig;
use crate::core::fields::CpuConfig;
use crate::core::keyword::KeywordSet;
use crate::core::playback::PlaybackMarkers;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for LogSift configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/logsift/ or %APPDATA%\LogSift\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    ///
    /// Runs before logging is initialised, so it reports nothing itself;
    /// callers log the resolved paths afterwards.
    pub fn resolve() -> Self {
        let config_dir = ProjectDirs::from("", "", constants::APP_ID)
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));
        Self { config_dir }
    }

    /// Default location of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    pub cpu: CpuSection,
    pub filter: FilterSection,
    pub playback: PlaybackSection,
    pub split: SplitSection,
    pub discovery: DiscoverySection,
    pub logging: LoggingSection,
}

/// `[cpu]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct CpuSection {
    pub max_results: Option<usize>,
    pub marker: Option<String>,
}

/// `[filter]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct FilterSection {
    pub keywords: Option<Vec<String>>,
}

/// `[playback]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct PlaybackSection {
    pub start_marker: Option<String>,
    pub state_markers: Option<Vec<String>>,
}

/// `[split]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct SplitSection {
    pub parts: Option<usize>,
}

/// `[discovery]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct DiscoverySection {
    /// Include glob patterns, matched case-insensitively against file names.
    pub include_patterns: Option<Vec<String>>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated configuration for every tool.
///
/// All values are validated at load time. Invalid values produce actionable
/// warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    pub cpu: CpuConfig,
    pub keywords: KeywordSet,
    pub playback: PlaybackMarkers,
    pub split_parts: usize,
    pub discovery: DiscoveryConfig,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            cpu: CpuConfig::default(),
            keywords: KeywordSet::default(),
            playback: PlaybackMarkers::default(),
            split_parts: constants::DEFAULT_SPLIT_PARTS,
            discovery: DiscoveryConfig::default(),
            log_level: None,
        }
    }
}

/// Load and validate a config file.
///
/// Returns the validated config and a list of non-fatal warnings. A missing
/// file is not an error when `required` is false (the default location);
/// an explicitly requested file that is missing or unparseable is.
///
/// Called before logging is initialised: everything worth reporting goes
/// into the returned warnings, which the caller logs.
pub fn load_config(path: &Path, required: bool) -> Result<(ToolConfig, Vec<String>), ConfigError> {
    if !required && !path.exists() {
        return Ok((ToolConfig::default(), Vec::new()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let raw: RawConfig = toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(validate(raw))
}

/// Validate each field of a raw config, accumulating all problems.
pub fn validate(raw: RawConfig) -> (ToolConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let mut config = ToolConfig::default();

    // -- CPU: max_results --
    if let Some(max) = raw.cpu.max_results {
        if (1..=constants::ABSOLUTE_MAX_CPU_RESULTS).contains(&max) {
            config.cpu.max_results = max;
        } else {
            warnings.push(out_of_range(
                "cpu.max_results",
                max,
                format!("1-{}", constants::ABSOLUTE_MAX_CPU_RESULTS),
                constants::DEFAULT_CPU_MAX_RESULTS,
            ));
        }
    }

    // -- CPU: marker --
    if let Some(marker) = raw.cpu.marker {
        if marker.is_empty() {
            warnings.push(format!(
                "[cpu] marker must not be empty. Using default ({}).",
                constants::DEFAULT_CPU_MARKER
            ));
        } else {
            config.cpu.marker = marker;
        }
    }

    // -- Filter: keywords --
    if let Some(keywords) = raw.filter.keywords {
        match KeywordSet::new(&keywords) {
            Ok(set) => config.keywords = set,
            Err(e) => warnings.push(format!("[filter] keywords: {e}. Using defaults.")),
        }
    }

    // -- Playback: markers --
    if let Some(start) = raw.playback.start_marker {
        if start.is_empty() {
            warnings.push("[playback] start_marker must not be empty. Using default.".to_string());
        } else {
            config.playback.start = start;
        }
    }
    if let Some(states) = raw.playback.state_markers {
        if states.is_empty() || states.iter().any(String::is_empty) {
            warnings.push(
                "[playback] state_markers must be a non-empty list of non-empty strings. \
                 Using defaults."
                    .to_string(),
            );
        } else {
            config.playback.states = states;
        }
    }

    // -- Split: parts --
    if let Some(parts) = raw.split.parts {
        if (1..=constants::ABSOLUTE_MAX_SPLIT_PARTS).contains(&parts) {
            config.split_parts = parts;
        } else {
            warnings.push(out_of_range(
                "split.parts",
                parts,
                format!("1-{}", constants::ABSOLUTE_MAX_SPLIT_PARTS),
                constants::DEFAULT_SPLIT_PARTS,
            ));
        }
    }

    // -- Discovery: include_patterns --
    if let Some(patterns) = raw.discovery.include_patterns {
        config.discovery.include_patterns = patterns;
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    (config, warnings)
}

fn out_of_range(field: &str, value: usize, expected: String, default: usize) -> String {
    let err = ConfigError::ValueOutOfRange {
        field: field.to_string(),
        value: value.to_string(),
        expected,
    };
    format!("{err}. Using default ({default}).")
}
