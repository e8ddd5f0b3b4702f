//! Library entry for lrcsync-cli used by integration tests and embedding.

pub mod commands;

// Re-export commands for convenience
pub use commands::*;

/// How `parse` prints cues to stdout
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `[MM:SS.mmm] lyric` row per cue
    #[default]
    Table,
    /// Pretty-printed JSON document
    Json,
}
