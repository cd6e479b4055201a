// LogSift - app/cpu.rs
//
// `cpu` tool driver: extract CPU sample values from one log file and append
// them to a result file under a timestamp header.

use crate::app::ExtractionReport;
use crate::core::export;
use crate::core::fields::{self, CpuConfig};
use crate::core::model::ResultBatch;
use crate::platform::fs;
use crate::util::error::Result;
use chrono::Local;
use std::path::Path;

/// Run the CPU extraction for `input`, appending results to `output`.
pub fn run(input: &Path, output: &Path, config: &CpuConfig) -> Result<ExtractionReport<String>> {
    config.validate()?;

    tracing::info!(
        input = %input.display(),
        max_results = config.max_results,
        marker = %config.marker,
        "Extracting CPU values"
    );

    let text = fs::read_log_file(input)?;
    let values = fields::extract_cpu_values(&text, config);
    let batch = ResultBatch::new(fs::source_name(input), values);

    let appended = if batch.is_empty() {
        tracing::debug!("No CPU values found; result file left untouched");
        false
    } else {
        let block = export::append_block(&export::append_header(Local::now()), &batch.records);
        fs::append_block(output, &block)?;
        tracing::info!(output = %output.display(), count = batch.count(), "Results appended");
        true
    };

    Ok(ExtractionReport {
        batch,
        output: output.to_path_buf(),
        appended,
    })
}
