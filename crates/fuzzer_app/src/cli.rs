use std::path::PathBuf;

use clap::Parser;
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "gqlfuzzer")]
#[command(about = "GraphQL Wordlist Fuzzer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// GraphQL endpoint URL
    #[arg(short, long)]
    pub url: Url,

    /// Path to wordlist file
    #[arg(short, long)]
    pub wordlist: PathBuf,

    /// Number of words per request
    #[arg(short, long, default_value_t = 200, allow_negative_numbers = true)]
    pub count: i64,

    /// Output file to save results
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Add custom header to requests (e.g., "Authorization: Bearer token")
    #[arg(short = 'H', long = "header")]
    pub headers: Vec<String>,

    /// Print every dispatched batch and enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Write diagnostic logs to this file instead of the terminal
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Do not print the startup banner
    #[arg(long)]
    pub no_banner: bool,
}
