//! # lrcsync Core
//!
//! Parsing and time-ordering for the LRC lyrics format.
//!
//! ## Modules
//!
//! - `constants`: Token shapes, tag keys and time limits
//! - `types`: Core types (Timestamp, SongMetaData, ParsedLyrics)
//! - `tokenizer`: Cursor-based line tokenizer
//! - `parser`: Raw text to cue lists, metadata and offset
//! - `sorter`: Tie-preserving time ordering of parallel cue arrays
//! - `writer`: Normalized LRC output
//! - `source`: File and reader sources (requires `std`)

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod constants;
pub mod error;
pub mod parser;
pub mod sorter;
#[cfg(feature = "std")]
pub mod source;
pub mod tokenizer;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::LrcError;
pub use parser::{parse, parse_with_stats, ParseStats};
pub use sorter::{sort_by_time, sort_lyrics};
pub use types::{Cue, ParsedLyrics, SongMetaData, Timestamp};
pub use writer::to_lrc;

/// Result type alias for lrcsync operations
pub type Result<T> = core::result::Result<T, LrcError>;
