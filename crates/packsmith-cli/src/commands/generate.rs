//! Generate command: scan a pack directory and write the manifest

use anyhow::Result;
use packsmith_core::manifest::{Generator, Report};
use tracing::info;

use super::types::Cli;

/// Run the generate command
///
/// # Errors
/// Returns an error if the source directory is invalid, a pack file
/// cannot be read, or the manifest cannot be written.
pub fn run(cli: &Cli) -> Result<Report> {
    info!("Generating manifest for {}", cli.dir.display());

    let mut generator = Generator::new(&cli.dir)
        .with_suffix(cli.pattern.as_str())
        .pretty(cli.pretty);
    if let Some(out) = &cli.out {
        generator = generator.with_output(out);
    }

    let report = generator.run()?;
    info!(
        "✓ Manifest complete: {} entries at {}",
        report.entry_count,
        report.out_path.display()
    );
    Ok(report)
}

#[cfg(test)]
mod tests;
