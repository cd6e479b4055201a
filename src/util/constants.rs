// LogSift - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.
// Components never read these directly at match time: defaults flow into
// the per-tool config structs, which are passed explicitly.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogSift";

/// Application identifier used for config directories.
pub const APP_ID: &str = "LogSift";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// CPU extraction
// =============================================================================

/// Default cap on the number of CPU values taken from one file.
pub const DEFAULT_CPU_MAX_RESULTS: usize = 20;

/// Hard upper bound on the CPU result cap.
pub const ABSOLUTE_MAX_CPU_RESULTS: usize = 1_000_000;

/// Token prefix that follows the CPU field in a sample line.
pub const DEFAULT_CPU_MARKER: &str = "{page:";

// =============================================================================
// Keyword filter
// =============================================================================

/// Keywords searched for (case-insensitively) by the `filter` tool.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "iqiyi",
    "seek",
    "timeupdate",
    "iqp-progress",
    "event_",
    "touch",
    "mouse",
    "slider",
];

// =============================================================================
// Playback correlation
// =============================================================================

/// Marks the page-enter event that starts a playback attempt.
pub const DEFAULT_PLAYBACK_START_MARKER: &str = r#"h5_call_bm_send_enter_page\",[\"player\"]]"#;

/// Marks the video-state events that end a playback attempt.
pub const DEFAULT_PLAYBACK_STATE_MARKERS: &[&str] = &[
    r#"h5_call_bm_send_video_state\",[\"adstartplay\"]]"#,
    r#"h5_call_bm_send_video_state\",[\"playing\"]]"#,
];

/// First character (zero-based) of the fixed-width timestamp column.
pub const TIMESTAMP_COLUMN_START: usize = 6;

/// One past the last character of the fixed-width timestamp column.
/// Lines shorter than this cannot carry a timestamp.
pub const TIMESTAMP_COLUMN_END: usize = 18;

// =============================================================================
// Splitting
// =============================================================================

/// Default number of chunks produced by the `split` tool.
pub const DEFAULT_SPLIT_PARTS: usize = 3;

/// Hard upper bound on the number of chunks.
pub const ABSOLUTE_MAX_SPLIT_PARTS: usize = 10_000;

/// Extension given to every chunk file.
pub const SPLIT_CHUNK_EXTENSION: &str = "log";

// =============================================================================
// File discovery patterns
// =============================================================================

/// Default include glob patterns for log file discovery (case-insensitive).
pub const DEFAULT_INCLUDE_PATTERNS: &[&str] = &["*.log", "*.txt"];

// =============================================================================
// Output
// =============================================================================

/// Suffix inserted before the extension of derived result file names.
pub const RESULT_FILE_SUFFIX: &str = "result";

/// Label that opens every appended result block.
pub const APPEND_HEADER_LABEL: &str = "append time:";

/// chrono format for append headers and report headers.
pub const HEADER_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Maximum length of a log line included in debug output.
pub const DEBUG_MAX_LINE_PREVIEW: usize = 200;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
