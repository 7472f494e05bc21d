use std::path::Path;
use std::process::ExitCode;

use tracing::info;

use crate::commands::base_commands::RenderArgs;
use crate::services::bucket_json::load_report_from_json_file;
use crate::services::bucket_markdown::render_markdown;
use crate::services::output_file::write_output_file;
use crate::services::report_config::ReportConfig;

pub fn render_command(args: RenderArgs) -> ExitCode {
    let config = match ReportConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load report config: {e}");
            return ExitCode::FAILURE;
        }
    };

    let document = match load_report_from_json_file(&args.input) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Failed to load bucket report: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        input = %args.input,
        generated_at = %document.generated_at,
        scenarios = document.summaries.len(),
        "rendering stored bucket report"
    );

    let markdown = render_markdown(
        &config.report_title,
        &document.summaries,
        &document.counts_by_bucket,
    );
    if let Err(e) = write_output_file(Path::new(&args.output), markdown.as_bytes()) {
        eprintln!("Failed to write bucket summary: {e}");
        return ExitCode::FAILURE;
    }

    println!("Bucket summary written to {}", args.output);
    ExitCode::SUCCESS
}
