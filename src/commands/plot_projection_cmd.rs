use std::path::Path;
use std::process::ExitCode;

use tracing::info;

use crate::commands::base_commands::PlotProjectionArgs;
use crate::services::output_file::{ensure_parent_dir, write_output_file};
use crate::services::projection_graph::build_graph_document;
use crate::services::projection_json::load_projection_from_json_file;
use crate::services::projection_plot::write_projection_png;
use crate::services::report_config::ReportConfig;

pub fn plot_projection_command(args: PlotProjectionArgs) -> ExitCode {
    let config = match ReportConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load report config: {e}");
            return ExitCode::FAILURE;
        }
    };

    let projection = match load_projection_from_json_file(&args.input) {
        Ok(projection) => projection,
        Err(e) => {
            eprintln!("Failed to load projection: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        input = %args.input,
        months = projection.monthly_values.len(),
        goals = projection.metadata.goals.len(),
        "rendering projection graph"
    );

    let document = build_graph_document(&projection, &config.graph_options());
    if let Err(e) = write_output_file(Path::new(&args.output), document.as_bytes()) {
        eprintln!("Failed to write projection graph: {e}");
        return ExitCode::FAILURE;
    }
    println!("Projection graph written to {}", args.output);

    if let Some(png) = args.png {
        if let Err(e) = ensure_parent_dir(Path::new(&png)) {
            eprintln!("Failed to create plot directory: {e}");
            return ExitCode::FAILURE;
        }
        if let Err(e) = write_projection_png(&png, &projection, &config.chart_title) {
            eprintln!("Failed to plot projection: {e}");
            return ExitCode::FAILURE;
        }
        println!("Projection plot written to {png}");
    }
    ExitCode::SUCCESS
}
