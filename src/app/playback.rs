// LogSift - app/playback.rs
//
// `playback` tool driver: pair playback start/state events in one log file
// and append the timestamp pairs to a result file. The pair delimiter
// follows the result file: comma for `.csv`, tab otherwise.

use crate::app::ExtractionReport;
use crate::core::export::{self, PairDelimiter};
use crate::core::model::{PlaybackPair, ResultBatch};
use crate::core::playback::{self, PlaybackMarkers};
use crate::platform::fs;
use crate::util::error::Result;
use chrono::Local;
use std::path::Path;

/// Run playback pairing for `input`, appending results to `output`.
pub fn run(
    input: &Path,
    output: &Path,
    markers: &PlaybackMarkers,
) -> Result<ExtractionReport<PlaybackPair>> {
    markers.validate()?;

    tracing::info!(input = %input.display(), "Pairing playback events");

    let text = fs::read_log_file(input)?;
    let pairs = playback::extract_playback_pairs(&text, markers);
    let batch = ResultBatch::new(fs::source_name(input), pairs);

    let appended = if batch.is_empty() {
        tracing::debug!("No playback pairs found; result file left untouched");
        false
    } else {
        let delimiter = PairDelimiter::for_output(output);
        let lines = export::pair_lines(&batch.records, delimiter, output)?;
        let block = export::append_block(&export::append_header(Local::now()), &lines);
        fs::append_block(output, &block)?;
        tracing::info!(
            output = %output.display(),
            count = batch.count(),
            delimiter = ?delimiter,
            "Results appended"
        );
        true
    };

    Ok(ExtractionReport {
        batch,
        output: output.to_path_buf(),
        appended,
    })
}
