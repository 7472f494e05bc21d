pub mod bucket_json;
pub mod bucket_markdown;
pub mod classifier;
pub mod currency_format;
pub mod goal_markers;
pub mod output_file;
pub mod projection_graph;
pub mod projection_json;
pub mod projection_plot;
pub mod report_config;
pub mod scenario_json;
pub mod summary_builder;
pub mod time_axis;
