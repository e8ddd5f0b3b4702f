//! Subcommand implementations

pub mod at;
pub mod check;
pub mod normalize;
pub mod parse;

use anyhow::{Context, Result};
use lrcsync_core::source::{FileSource, LyricSource, ReaderSource};
use std::io;

/// Read LRC text from a file path, or from stdin when `input` is `-`
pub fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        ReaderSource::new(io::stdin().lock())
            .read_text()
            .context("Failed to read lyrics from stdin")
    } else {
        FileSource::new(input)
            .read_text()
            .with_context(|| format!("Failed to read input file: {}", input))
    }
}
