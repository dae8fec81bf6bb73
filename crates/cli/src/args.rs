// crates/cli/src/args.rs
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "comment_ripper",
    version,
    about = "Strip comments from files in a folder"
)]
pub struct Args {
    /// Directory to be read
    #[arg(short = 'p', long, value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Include sub-directories
    #[arg(short = 's', long)]
    pub subdir: bool,

    /// Set the language that is going to be analysed
    #[arg(short = 'l', long)]
    pub language: Option<String>,

    /// List all available languages
    #[arg(long)]
    pub list: bool,

    /// Language configuration file
    #[arg(short = 'c', long, default_value = "config.json", value_name = "FILE")]
    pub config: PathBuf,

    /// Abort on the first file that fails instead of skipping it
    #[arg(long)]
    pub strict: bool,
}
