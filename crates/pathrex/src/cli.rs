use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pathrex",
    about = "Match paths against a route template and print extracted parameters",
    version
)]
pub struct Cli {
    /// Route template, e.g. "/api/v1/download/:file{.:ext}"
    pub template: String,

    /// Paths to match against the template
    pub paths: Vec<String>,

    /// Read paths from a file, one per line, or "-" for stdin
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Match case-insensitively
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// Print the generated regex and parameter keys before the results
    #[arg(long)]
    pub show_regex: bool,

    /// Print one JSON object per path instead of text
    #[arg(long)]
    pub json: bool,

    /// Match paths sequentially instead of in parallel
    #[arg(short, long)]
    pub sequential: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
