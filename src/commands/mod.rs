pub mod base_commands;
pub mod classify_cmd;
pub mod completions_cmd;
pub mod plot_projection_cmd;
pub mod render_cmd;
pub mod report_format;
