//! Hashing run orchestration.
//!
//! Pipeline: load config -> (clean output) -> walk from entry -> summary

use crate::{
    config::HashConfig,
    log,
    walk::{FsStorage, Report, walk},
};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use super::Cli;

/// Run one full hashing pass for the parsed command line.
pub fn run(cli: &Cli) -> Result<Report> {
    let config = HashConfig::load(cli.config.as_deref())
        .context("failed to load configuration")?;

    if cli.clean {
        clean_output(&cli.input, &cli.output_dir)?;
    }

    let report = walk(&cli.input, &cli.output_dir, &FsStorage, &config)
        .with_context(|| format!("failed to hash `{}`", cli.input.display()))?;

    log!("done"; "{}", report.summary());
    Ok(report)
}

/// Remove the output directory, refusing when it would delete the input.
fn clean_output(input: &Path, output_dir: &Path) -> Result<()> {
    if !output_dir.exists() {
        return Ok(());
    }

    let output = output_dir
        .canonicalize()
        .with_context(|| format!("failed to resolve `{}`", output_dir.display()))?;
    let input = input.canonicalize().unwrap_or_else(|_| input.to_path_buf());
    if input.starts_with(&output) {
        bail!(
            "refusing to clean `{}`: it contains the input `{}`",
            output_dir.display(),
            input.display()
        );
    }

    fs::remove_dir_all(&output)
        .with_context(|| format!("failed to clean `{}`", output_dir.display()))?;
    log!("clean"; "{}", output_dir.display());
    Ok(())
}
