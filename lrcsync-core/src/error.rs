//! Error types for lrcsync operations

use alloc::string::String;

/// Errors that can occur while obtaining or parsing LRC text
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LrcError {
    /// The lyric source could not be opened
    #[cfg_attr(feature = "std", error("Lyric source unavailable: {0}"))]
    SourceUnavailable(String),

    /// Reading from an opened source failed
    #[cfg_attr(feature = "std", error("Failed to read lyric source: {0}"))]
    ReadFailure(String),

    /// The text contained no valid cue lines
    #[cfg_attr(feature = "std", error("No lyrics found"))]
    NoLyricsFound,

    /// A standalone timestamp string could not be parsed
    #[cfg_attr(feature = "std", error("Invalid timestamp: {0:?}"))]
    InvalidTimestamp(String),

    /// Parallel cue arrays handed to the sorter differ in length
    #[cfg_attr(
        feature = "std",
        error("Misaligned cue arrays: {millis} times, {lyrics} lyrics, {timestamps} timestamps")
    )]
    MisalignedCues {
        /// Length of the millisecond array
        millis: usize,
        /// Length of the lyric array
        lyrics: usize,
        /// Length of the timestamp array
        timestamps: usize,
    },
}

impl LrcError {
    /// Stable, locale-independent key for this error kind
    ///
    /// Front ends map this to a localized message.
    pub const fn kind(&self) -> &'static str {
        match self {
            LrcError::SourceUnavailable(_) => "source_unavailable",
            LrcError::ReadFailure(_) => "read_failure",
            LrcError::NoLyricsFound => "no_lyrics_found",
            LrcError::InvalidTimestamp(_) => "invalid_timestamp",
            LrcError::MisalignedCues { .. } => "misaligned_cues",
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for LrcError {
    fn from(err: std::io::Error) -> Self {
        LrcError::ReadFailure(err.to_string())
    }
}
