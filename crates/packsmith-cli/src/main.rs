//! packsmith: asset pack manifest generator CLI

use clap::Parser;
use packsmith_cli::{Cli, commands};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let report = commands::generate::run(&cli)?;
    println!(
        "Wrote {} with {} entries",
        report.out_path.display(),
        report.entry_count
    );

    Ok(())
}
