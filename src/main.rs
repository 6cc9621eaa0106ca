//! hashweb - fingerprint static web assets for long-lived caching.
//!
//! Walks every asset reachable from an entry file, renames each non-HTML
//! asset to `name-<fingerprint>.ext` and rewrites the references to it.

#![allow(dead_code)]

mod asset;
mod cli;
mod config;
mod extract;
mod logger;
mod utils;
mod walk;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    cli::build::run(&cli).map(|_| ())
}
