// LogSift - platform/fs.rs
//
// Whole-file reads and writes, and result file naming.
// Reads and writes are blocking and all-or-nothing; there is no partial
// read/write handling and no retry.

use crate::util::constants;
use crate::util::error::{InputError, OutputError};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Read the full content of a log file as a string.
///
/// For files with invalid UTF-8, uses lossy conversion.
pub fn read_log_file(path: &Path) -> Result<String, InputError> {
    let bytes = std::fs::read(path).map_err(|e| InputError::from_io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Append `block` to `path`, creating parent directories as needed.
///
/// When the file already has content the block is preceded by a blank-line
/// separator so consecutive runs stay visually apart.
pub fn append_block(path: &Path, block: &str) -> Result<(), OutputError> {
    let io_err = |source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };
    ensure_parent_dir(path)?;

    let has_content = std::fs::metadata(path).map(|m| m.len() > 0).unwrap_or(false);

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_err)?;
    if has_content {
        file.write_all(b"\n\n").map_err(io_err)?;
    }
    file.write_all(block.as_bytes()).map_err(io_err)?;
    file.flush().map_err(io_err)
}

/// Write `text` to `path`, replacing any previous content.
pub fn write_file(path: &Path, text: &str) -> Result<(), OutputError> {
    ensure_parent_dir(path)?;
    std::fs::write(path, text).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<(), OutputError> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => {
            tracing::debug!(dir = %dir.display(), "Creating output directory");
            std::fs::create_dir_all(dir).map_err(|source| OutputError::Io {
                path: dir.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}

/// Derive a result file name next to `input` by replacing its extension
/// with `-result.txt` (or `-result.csv`).
///
/// Only the final path component is considered, so `logs.v2/app` becomes
/// `logs.v2/app-result.txt`.
pub fn derive_output_name(input: &Path, csv: bool) -> PathBuf {
    derive_with_tag(input, None, csv)
}

/// Like [`derive_output_name`], with `tag` inserted before the suffix:
/// `logs/day1` with tag `filter` becomes `logs/day1-filter-result.txt`.
pub fn derive_tagged_output_name(input: &Path, tag: &str) -> PathBuf {
    derive_with_tag(input, Some(tag), false)
}

fn derive_with_tag(input: &Path, tag: Option<&str>, csv: bool) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = if csv { "csv" } else { "txt" };
    let name = match tag {
        Some(tag) => format!("{stem}-{tag}-{}.{extension}", constants::RESULT_FILE_SUFFIX),
        None => format!("{stem}-{}.{extension}", constants::RESULT_FILE_SUFFIX),
    };
    input.with_file_name(name)
}

/// Input path with its extension removed, used as the default chunk prefix.
pub fn strip_extension(input: &Path) -> PathBuf {
    input.with_extension("")
}

/// Display name of a source file for report headers.
pub fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
