use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(
    author,
    version,
    about = "Combine configured source files into one annotated text file"
)]
pub struct Cli {
    /// Configuration file (YAML or TOML). Searched in the working directory
    /// and ~/.config/file_combiner when omitted.
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Override the root directory all paths are resolved against
    #[arg(long, short = 'r')]
    pub root_dir: Option<String>,

    /// Override the combined output file
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// Override the comment symbol written before each file path (e.g., '//')
    #[arg(long)]
    pub comment_symbol: Option<String>,
}
