//! Command-line types shared between main and library

use std::path::PathBuf;

use clap::Parser;

/// Generate a manifest for a directory of downloadable asset packs
#[derive(Parser, Debug)]
#[command(name = "packsmith")]
#[command(author, version, about = "Asset pack manifest generator", long_about = None)]
pub struct Cli {
    /// Directory containing pack files
    #[arg(long)]
    pub dir: PathBuf,

    /// Output manifest path (default: <dir>/packs_manifest.json)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// File suffix to include
    #[arg(long, default_value = ".pck")]
    pub pattern: String,

    /// Pretty-print JSON with sorted keys
    #[arg(long)]
    pub pretty: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
