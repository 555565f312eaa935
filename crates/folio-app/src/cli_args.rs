use std::path::PathBuf;

use clap::Parser;

/// Interactive terminal portfolio.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
pub struct Args {
    /// Path to a TOML content payload. Defaults to the embedded resume.
    #[arg(short, long, value_name = "FILE")]
    pub content: Option<PathBuf>,
}
