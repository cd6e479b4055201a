// LogSift - app/filter.rs
//
// `filter` tool driver: collect every line containing a keyword from the log
// files of one folder into a single result file, rebuilt on each run.

use crate::app::{scan_folder, FolderReport};
use crate::core::discovery::DiscoveryConfig;
use crate::core::export;
use crate::core::keyword::{self, KeywordSet};
use crate::platform::fs;
use crate::util::error::Result;
use std::path::Path;

/// Filter the log files in `folder` by `keywords`, writing `output`.
///
/// When the folder holds no log files nothing is written and the report's
/// `output` is `None`.
pub fn run(
    folder: &Path,
    output: &Path,
    keywords: &KeywordSet,
    discovery: &DiscoveryConfig,
) -> Result<FolderReport> {
    tracing::info!(
        folder = %folder.display(),
        keywords = ?keywords.keywords(),
        "Filtering logs by keyword"
    );

    let (batches, mut report) = scan_folder(folder, discovery, |text| {
        keyword::filter_lines(text, keywords)
            .into_iter()
            .map(str::to_string)
            .collect()
    })?;

    if report.files_found == 0 {
        tracing::info!("No log files found; nothing written");
        return Ok(report);
    }

    fs::write_file(output, &export::keyword_report(&batches))?;
    tracing::info!(
        output = %output.display(),
        matched = report.total_matched(),
        "Filter results written"
    );
    report.output = Some(output.to_path_buf());
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;

    #[test]
    fn test_sections_only_for_matching_files() {
        let dir = tempfile::tempdir().unwrap();
        let logs = dir.path().join("logs");
        stdfs::create_dir(&logs).unwrap();
        stdfs::write(logs.join("a.log"), "boot\nuser SEEK 10\nidle\n").unwrap();
        stdfs::write(logs.join("b.txt"), "boot\nidle\n").unwrap();
        let output = dir.path().join("out.log");

        let report = run(&logs, &output, &KeywordSet::default(), &DiscoveryConfig::default()).unwrap();
        assert_eq!(report.files_found, 2);
        assert_eq!(report.total_matched(), 1);
        assert_eq!(
            stdfs::read_to_string(&output).unwrap(),
            "\n=== from file: a.log ===\nuser SEEK 10\n"
        );
    }

    #[test]
    fn test_empty_folder_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.log");
        let report = run(dir.path(), &output, &KeywordSet::default(), &DiscoveryConfig::default())
            .unwrap();
        assert_eq!(report.files_found, 0);
        assert!(report.output.is_none());
        assert!(!output.exists());
    }

    #[test]
    fn test_rerun_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let logs = dir.path().join("logs");
        stdfs::create_dir(&logs).unwrap();
        stdfs::write(logs.join("a.log"), "touch start\n").unwrap();
        let output = dir.path().join("out.log");
        let keywords = KeywordSet::default();
        let discovery = DiscoveryConfig::default();

        run(&logs, &output, &keywords, &discovery).unwrap();
        run(&logs, &output, &keywords, &discovery).unwrap();
        let written = stdfs::read_to_string(&output).unwrap();
        assert_eq!(written.matches("=== from file:").count(), 1);
    }
}
