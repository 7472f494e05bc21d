use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify scenario runs into buckets and write JSON and Markdown reports
    Classify(ClassifyArgs),
    /// Re-render the Markdown summary from a bucket report JSON file
    Render(RenderArgs),
    /// Render a net worth projection as an HTML chart document
    PlotProjection(PlotProjectionArgs),
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
pub struct ClassifyArgs {
    /// Scenario runs JSON file
    #[arg(short, long)]
    pub input: String,
    /// Output bucket report JSON file
    #[arg(short, long)]
    pub output: String,
    /// Output Markdown file (defaults to the JSON path with an .md extension)
    #[arg(short, long)]
    pub markdown: Option<String>,
    /// Optional report config YAML
    #[arg(short, long)]
    pub config: Option<String>,
}

#[derive(Args)]
pub struct RenderArgs {
    /// Bucket report JSON file
    #[arg(short, long)]
    pub input: String,
    /// Output Markdown file
    #[arg(short, long)]
    pub output: String,
    /// Optional report config YAML
    #[arg(short, long)]
    pub config: Option<String>,
}

#[derive(Args)]
pub struct PlotProjectionArgs {
    /// Net worth projection JSON file
    #[arg(short, long)]
    pub input: String,
    /// Output HTML file
    #[arg(short, long)]
    pub output: String,
    /// Also write a PNG chart to this path
    #[arg(long)]
    pub png: Option<String>,
    /// Optional report config YAML
    #[arg(short, long)]
    pub config: Option<String>,
}
