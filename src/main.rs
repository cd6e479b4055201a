// LogSift - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading (optional config.toml) and logging initialisation
// 3. Dispatch to the tool drivers and printing of their reports
//
// Stdout carries record counts only; diagnostics go to stderr via tracing,
// and failures are reported to stderr as a single line.

use clap::{CommandFactory, Parser, Subcommand};
use logsift::app;
use logsift::core::keyword::KeywordSet;
use logsift::core::time_window::TimeWindow;
use logsift::platform::config::{self, PlatformPaths, ToolConfig};
use logsift::platform::fs;
use logsift::util;
use logsift::util::constants;
use logsift::util::error::LogSiftError;
use std::path::PathBuf;
use std::process::ExitCode;

/// LogSift - post-processing utilities for application log files.
///
/// Each subcommand reads log text, applies one line-oriented transformation,
/// and writes a result file.
#[derive(Parser, Debug)]
#[command(name = "logsift", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug", global = true)]
    debug: bool,

    /// Path to a config.toml overriding the built-in defaults.
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract the CPU field preceding each `{page:` marker.
    Cpu {
        /// Log file to read.
        input: Option<PathBuf>,

        /// Result file to append to (default: <input>-result.txt).
        output: Option<PathBuf>,

        /// Maximum number of values to extract.
        #[arg(
            short = 'n',
            long = "max-results",
            value_parser = clap::value_parser!(u64).range(1..=constants::ABSOLUTE_MAX_CPU_RESULTS as u64)
        )]
        max_results: Option<u64>,

        /// Prefix of the token that follows the CPU field.
        #[arg(short = 'm', long = "marker")]
        marker: Option<String>,
    },

    /// Pair playback start and playback state events (startup latency).
    Playback {
        /// Log file to read.
        input: Option<PathBuf>,

        /// Result file to append to (default: <input>-result.txt).
        output: Option<PathBuf>,

        /// Derive a .csv result name (comma-separated pairs).
        #[arg(long = "csv")]
        csv: bool,
    },

    /// Keep the lines containing any keyword, across a folder of logs.
    Filter {
        /// Folder containing .log/.txt files.
        folder: Option<PathBuf>,

        /// Result file, rebuilt on each run (default: <folder>-filter-result.txt).
        output: Option<PathBuf>,

        /// Keyword to search for, case-insensitive (repeatable).
        #[arg(short = 'k', long = "keyword")]
        keywords: Vec<String>,
    },

    /// Extract the lines stamped with one HH:MM minute, across a folder of logs.
    Time {
        /// Folder containing .log/.txt files.
        folder: Option<PathBuf>,

        /// Target minute, e.g. 13:26.
        target: Option<String>,

        /// Result file, rebuilt on each run (default: <folder>-<HHMM>-result.txt).
        output: Option<PathBuf>,
    },

    /// Split a log file into N near-equal chunks.
    Split {
        /// Log file to split.
        input: Option<PathBuf>,

        /// Number of chunks.
        #[arg(
            short = 'n',
            long = "parts",
            value_parser = clap::value_parser!(u64).range(1..=constants::ABSOLUTE_MAX_SPLIT_PARTS as u64)
        )]
        parts: Option<u64>,

        /// Chunk file prefix (default: input path without its extension).
        #[arg(short = 'p', long = "prefix")]
        prefix: Option<PathBuf>,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::Cpu { .. } => "cpu",
            Self::Playback { .. } => "playback",
            Self::Filter { .. } => "filter",
            Self::Time { .. } => "time",
            Self::Split { .. } => "split",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        print_usage(None);
        return ExitCode::SUCCESS;
    };

    // Config is loaded before logging so its [logging] level can apply.
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PlatformPaths::resolve().config_file());
    let loaded = config::load_config(&config_path, cli.config.is_some());

    let config_level = loaded
        .as_ref()
        .ok()
        .and_then(|(c, _)| c.log_level.clone());
    util::logging::init(cli.debug, config_level.as_deref());

    tracing::debug!(
        version = util::constants::APP_VERSION,
        command = command.name(),
        "LogSift starting"
    );

    let tool_config = match loaded {
        Ok((c, warnings)) => {
            if config_path.exists() {
                tracing::info!(path = %config_path.display(), "Loaded config.toml");
            } else {
                tracing::debug!(
                    path = %config_path.display(),
                    "No config.toml found; using defaults"
                );
            }
            for warning in &warnings {
                tracing::warn!(warning = %warning, "Config warning");
            }
            c
        }
        Err(e) => {
            tracing::error!(error = %e, "Config loading failed");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(command, tool_config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, mut config: ToolConfig) -> Result<(), LogSiftError> {
    let name = command.name();
    match command {
        Command::Cpu {
            input,
            output,
            max_results,
            marker,
        } => {
            let Some(input) = input else {
                print_usage(Some(name));
                return Ok(());
            };
            if let Some(n) = max_results {
                config.cpu.max_results = usize::try_from(n).unwrap_or(usize::MAX);
            }
            if let Some(m) = marker {
                config.cpu.marker = m;
            }
            let output = output.unwrap_or_else(|| fs::derive_output_name(&input, false));
            let report = app::cpu::run(&input, &output, &config.cpu)?;

            println!("Found {} CPU values", report.batch.count());
            if report.appended {
                println!("Results appended to: {}", report.output.display());
            }
        }

        Command::Playback { input, output, csv } => {
            let Some(input) = input else {
                print_usage(Some(name));
                return Ok(());
            };
            let output = output.unwrap_or_else(|| fs::derive_output_name(&input, csv));
            let report = app::playback::run(&input, &output, &config.playback)?;

            println!("Found {} playback time pairs", report.batch.count());
            if report.appended {
                println!("Results appended to: {}", report.output.display());
            }
        }

        Command::Filter {
            folder,
            output,
            keywords,
        } => {
            let Some(folder) = folder else {
                print_usage(Some(name));
                return Ok(());
            };
            let keywords = if keywords.is_empty() {
                config.keywords
            } else {
                KeywordSet::new(&keywords)?
            };
            let output =
                output.unwrap_or_else(|| fs::derive_tagged_output_name(&folder, "filter"));
            let report = app::filter::run(&folder, &output, &keywords, &config.discovery)?;
            print_folder_report(&report, "matching lines");
        }

        Command::Time {
            folder,
            target,
            output,
        } => {
            let (Some(folder), Some(target)) = (folder, target) else {
                print_usage(Some(name));
                return Ok(());
            };
            let window = TimeWindow::new(&target)?;
            let output = output
                .unwrap_or_else(|| fs::derive_tagged_output_name(&folder, &window.compact()));
            let report = app::time_window::run(&folder, &output, &window, &config.discovery)?;
            print_folder_report(&report, &format!("lines at {}", window.target()));
        }

        Command::Split {
            input,
            parts,
            prefix,
        } => {
            let Some(input) = input else {
                print_usage(Some(name));
                return Ok(());
            };
            let parts = match parts {
                Some(n) => usize::try_from(n).unwrap_or(usize::MAX),
                None => config.split_parts,
            };
            let prefix = prefix.unwrap_or_else(|| fs::strip_extension(&input));
            let report = app::split::run(&input, &prefix, parts)?;

            println!("Total lines: {}", report.total_lines);
            if report.total_lines == 0 {
                println!("Input is empty, nothing to split");
                return Ok(());
            }
            println!("Lines per chunk: {}", report.lines_per_chunk);
            for (path, lines) in &report.written {
                println!("Created {} ({lines} lines)", path.display());
            }
            for path in &report.skipped {
                println!("Skipped {} (no content)", path.display());
            }
            println!(
                "Wrote {} lines to {} files (input had {} lines)",
                report.lines_written(),
                report.written.len(),
                report.total_lines
            );
            if report.is_reconciled() {
                println!("All lines split correctly");
            } else {
                println!("Line count mismatch, check the chunk files");
            }
        }
    }
    Ok(())
}

fn print_folder_report(report: &app::FolderReport, what: &str) {
    if report.files_found == 0 {
        println!("No log files found");
        return;
    }
    println!("Found {} log files", report.files_found);
    for (source, count) in &report.per_file {
        println!("  {source}: {count} {what}");
    }
    for failure in &report.failures {
        eprintln!("  {}: skipped ({})", failure.source, failure.reason);
    }
    println!(
        "Processed {}/{} files, {} {what} in total",
        report.files_processed(),
        report.files_found,
        report.total_matched()
    );
    if let Some(ref output) = report.output {
        println!("Results saved to: {}", output.display());
    }
}

/// Print top-level or per-subcommand usage to stdout.
fn print_usage(subcommand: Option<&str>) {
    let mut cmd = Cli::command();
    // Building first gives subcommands their full "logsift <name>" usage line.
    cmd.build();
    let sub = subcommand.and_then(|name| cmd.find_subcommand(name).cloned());
    let result = match sub {
        Some(mut sub) => sub.print_help(),
        None => cmd.print_help(),
    };
    if let Err(e) = result {
        tracing::warn!(error = %e, "Failed to print usage");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_time_subcommand() {
        let cli = Cli::parse_from(["logsift", "time", "logs", "13:26", "out.log"]);
        match cli.command {
            Some(Command::Time { target, .. }) => assert_eq!(target.as_deref(), Some("13:26")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_no_arguments_has_no_command() {
        let cli = Cli::parse_from(["logsift"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_split_rejects_zero_parts() {
        assert!(Cli::try_parse_from(["logsift", "split", "a.log", "--parts", "0"]).is_err());
    }

    #[test]
    fn test_split_parts_capped() {
        let limit = constants::ABSOLUTE_MAX_SPLIT_PARTS.to_string();
        let over = (constants::ABSOLUTE_MAX_SPLIT_PARTS + 1).to_string();
        assert!(Cli::try_parse_from(["logsift", "split", "a.log", "--parts", limit.as_str()]).is_ok());
        assert!(Cli::try_parse_from(["logsift", "split", "a.log", "--parts", over.as_str()]).is_err());
        assert!(
            Cli::try_parse_from(["logsift", "split", "a.log", "--parts", "18446744073709551615"])
                .is_err()
        );
    }

    #[test]
    fn test_cpu_max_results_range() {
        assert!(Cli::try_parse_from(["logsift", "cpu", "a.log", "--max-results", "0"]).is_err());
        let over = (constants::ABSOLUTE_MAX_CPU_RESULTS + 1).to_string();
        assert!(Cli::try_parse_from(["logsift", "cpu", "a.log", "--max-results", over.as_str()]).is_err());
        let cli = Cli::try_parse_from(["logsift", "cpu", "a.log", "-n", "5"]).unwrap();
        match cli.command {
            Some(Command::Cpu { max_results, .. }) => assert_eq!(max_results, Some(5)),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
