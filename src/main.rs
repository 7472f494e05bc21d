mod commands;
mod domain;
mod logging;
mod services;
#[cfg(test)]
mod test_support;

use std::process::ExitCode;

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::classify_cmd::classify_command;
use crate::commands::completions_cmd::completions_command;
use crate::commands::plot_projection_cmd::plot_projection_command;
use crate::commands::render_cmd::render_command;
use crate::logging::init_logging;
use clap::Parser;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.verbose);
    match args.command {
        Commands::Classify(classify) => classify_command(classify),
        Commands::Render(render) => render_command(render),
        Commands::PlotProjection(plot) => plot_projection_command(plot),
        Commands::Completions { shell } => {
            completions_command(shell);
            ExitCode::SUCCESS
        }
    }
}
