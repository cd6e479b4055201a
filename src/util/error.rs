// LogSift - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Errors are categorised by the side of the pipeline that produced them:
// reading input, writing output, validating arguments, loading config.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all LogSift operations.
#[derive(Debug)]
pub enum LogSiftError {
    /// An input file or folder could not be read.
    Input(InputError),

    /// A result file could not be written.
    Output(OutputError),

    /// An argument was rejected before any file was touched.
    Validation(ValidationError),

    /// Configuration loading failed.
    Config(ConfigError),
}

impl fmt::Display for LogSiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(e) => write!(f, "Input error: {e}"),
            Self::Output(e) => write!(f, "Output error: {e}"),
            Self::Validation(e) => write!(f, "Invalid argument: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for LogSiftError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Input(e) => Some(e),
            Self::Output(e) => Some(e),
            Self::Validation(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Input errors
// ---------------------------------------------------------------------------

/// Errors raised while reading input files or listing input folders.
#[derive(Debug)]
pub enum InputError {
    /// The input path does not exist.
    NotFound { path: PathBuf },

    /// A folder was expected but the path is a file.
    NotADirectory { path: PathBuf },

    /// Any other read failure.
    Io { path: PathBuf, source: io::Error },
}

impl InputError {
    /// Classify an `io::Error` raised while accessing `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => write!(f, "'{}' not found", path.display()),
            Self::NotADirectory { path } => {
                write!(f, "'{}' is not a directory", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "cannot read '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<InputError> for LogSiftError {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}

// ---------------------------------------------------------------------------
// Output errors
// ---------------------------------------------------------------------------

/// Errors raised while writing result files.
#[derive(Debug)]
pub enum OutputError {
    /// I/O error creating directories or writing the file.
    Io { path: PathBuf, source: io::Error },

    /// CSV/TSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot write '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "cannot format records for '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
        }
    }
}

impl From<OutputError> for LogSiftError {
    fn from(e: OutputError) -> Self {
        Self::Output(e)
    }
}

// ---------------------------------------------------------------------------
// Validation errors
// ---------------------------------------------------------------------------

/// Arguments rejected synchronously, before any processing starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The keyword set is empty after discarding blank keywords.
    NoKeywords,

    /// The target minute does not look like `HH:MM`.
    InvalidTargetTime { value: String },

    /// A split was requested into zero chunks.
    ZeroParts,

    /// A marker string is empty, which would match every line.
    EmptyMarker { field: &'static str },

    /// A numeric limit is outside its accepted range.
    OutOfRange {
        field: &'static str,
        value: usize,
        max: usize,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoKeywords => write!(f, "at least one non-blank keyword is required"),
            Self::InvalidTargetTime { value } => {
                write!(f, "target time '{value}' is not in HH:MM form")
            }
            Self::ZeroParts => write!(f, "the number of parts must be at least 1"),
            Self::EmptyMarker { field } => write!(f, "marker '{field}' must not be empty"),
            Self::OutOfRange { field, value, max } => {
                write!(f, "{field} must be between 1 and {max} (got {value})")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for LogSiftError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for LogSiftError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for LogSift results.
pub type Result<T> = std::result::Result<T, LogSiftError>;
