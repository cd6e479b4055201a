// LogSift - app/time_window.rs
//
// `time` tool driver: collect the lines stamped with one `HH:MM` minute from
// the log files of one folder into a single result file, rebuilt each run.

use crate::app::{scan_folder, FolderReport};
use crate::core::discovery::DiscoveryConfig;
use crate::core::export;
use crate::core::time_window::{self, TimeWindow};
use crate::platform::fs;
use crate::util::error::Result;
use chrono::Local;
use std::path::Path;

/// Extract the lines of `window` from the log files in `folder`, writing `output`.
pub fn run(
    folder: &Path,
    output: &Path,
    window: &TimeWindow,
    discovery: &DiscoveryConfig,
) -> Result<FolderReport> {
    tracing::info!(
        folder = %folder.display(),
        target = window.target(),
        "Extracting logs by minute"
    );

    let (batches, mut report) = scan_folder(folder, discovery, |text| {
        time_window::lines_in_window(text, window)
            .into_iter()
            .map(str::to_string)
            .collect()
    })?;

    if report.files_found == 0 {
        tracing::info!("No log files found; nothing written");
        return Ok(report);
    }

    let text = export::time_window_report(window.target(), Local::now(), &batches);
    fs::write_file(output, &text)?;
    tracing::info!(
        output = %output.display(),
        processed = report.files_processed(),
        found = report.files_found,
        matched = report.total_matched(),
        "Time window results written"
    );
    report.output = Some(output.to_path_buf());
    Ok(report)
}
