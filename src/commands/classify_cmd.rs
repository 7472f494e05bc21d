use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::Utc;
use tracing::{info, warn};

use crate::commands::base_commands::ClassifyArgs;
use crate::commands::report_format::format_bucket_report;
use crate::services::bucket_json::{serialize_report_to_json, to_json_document};
use crate::services::bucket_markdown::render_markdown;
use crate::services::output_file::{ensure_parent_dir, write_output_file};
use crate::services::report_config::ReportConfig;
use crate::services::scenario_json::load_scenario_runs_from_json_file;
use crate::services::summary_builder::build_summaries;

pub fn classify_command(args: ClassifyArgs) -> ExitCode {
    let config = match ReportConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load report config: {e}");
            return ExitCode::FAILURE;
        }
    };

    let runs = match load_scenario_runs_from_json_file(&args.input) {
        Ok(runs) => runs,
        Err(e) => {
            eprintln!("Failed to load scenario runs: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(input = %args.input, scenarios = runs.len(), "classifying scenario runs");

    let batch = build_summaries(&runs, &config.classifier_settings());
    let document = to_json_document(&batch.summaries, &batch.counts, Utc::now());
    let mut json = Vec::new();
    if let Err(e) = serialize_report_to_json(&mut json, &document) {
        eprintln!("Failed to serialize bucket report: {e}");
        return ExitCode::FAILURE;
    }
    let markdown = render_markdown(&config.report_title, &batch.summaries, &batch.counts);

    let markdown_path = args
        .markdown
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(&args.output).with_extension("md"));
    let output_path = Path::new(&args.output);
    if markdown_path == output_path {
        eprintln!(
            "Failed to plan outputs: bucket summary and bucket report both point to {}",
            markdown_path.display()
        );
        return ExitCode::FAILURE;
    }

    for path in [output_path, markdown_path.as_path()] {
        if let Err(e) = ensure_parent_dir(path) {
            eprintln!("Failed to create output directory for {}: {e}", path.display());
            return ExitCode::FAILURE;
        }
    }

    if let Err(e) = write_output_file(output_path, &json) {
        eprintln!("Failed to write bucket report: {e}");
        return ExitCode::FAILURE;
    }
    if let Err(e) = write_output_file(&markdown_path, markdown.as_bytes()) {
        eprintln!("Failed to write bucket summary: {e}");
        if let Err(e) = fs::remove_file(output_path) {
            warn!(path = %output_path.display(), "could not remove bucket report: {e}");
        }
        return ExitCode::FAILURE;
    }

    println!("{}", format_bucket_report(&batch));
    println!("Bucket report written to {}", args.output);
    println!("Bucket summary written to {}", markdown_path.display());
    ExitCode::SUCCESS
}
