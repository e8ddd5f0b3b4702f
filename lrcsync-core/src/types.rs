//! Core types for parsed LRC lyrics

use crate::constants::{MAX_TOTAL_MILLIS, MILLIS_PER_MINUTE, MILLIS_PER_SECOND};
use crate::error::LrcError;
use crate::tokenizer::scan_timestamp;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// A single lyric cue point
///
/// Seconds are always below 60 and minutes never exceed 99.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Timestamp {
    minutes: u32,
    seconds: u32,
    milliseconds: u32,
}

impl Timestamp {
    /// Create a timestamp from its components
    pub fn new(minutes: u32, seconds: u32, milliseconds: u32) -> Result<Self, LrcError> {
        if minutes > crate::constants::MAX_MINUTES || seconds >= 60 || milliseconds > 999 {
            return Err(LrcError::InvalidTimestamp(format!(
                "{}:{}.{}",
                minutes, seconds, milliseconds
            )));
        }

        Ok(Self {
            minutes,
            seconds,
            milliseconds,
        })
    }

    /// Create a timestamp from a total millisecond value
    ///
    /// Values below zero clamp to `00:00.000`, values past `99:59.999` clamp to it.
    pub fn from_millis(total: i64) -> Self {
        let total = total.clamp(0, MAX_TOTAL_MILLIS);

        Self {
            minutes: (total / MILLIS_PER_MINUTE) as u32,
            seconds: ((total % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND) as u32,
            milliseconds: (total % MILLIS_PER_SECOND) as u32,
        }
    }

    /// Minutes component
    pub const fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Seconds component
    pub const fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Milliseconds component
    pub const fn milliseconds(&self) -> u32 {
        self.milliseconds
    }

    /// Total milliseconds since the start of the track
    pub const fn to_millis(&self) -> i64 {
        self.minutes as i64 * MILLIS_PER_MINUTE
            + self.seconds as i64 * MILLIS_PER_SECOND
            + self.milliseconds as i64
    }

    /// Shift this timestamp by a signed millisecond delta
    pub fn alter_timestamp(&mut self, offset_ms: i64) {
        *self = Self::from_millis(self.to_millis().saturating_add(offset_ms));
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}.{:03}",
            self.minutes, self.seconds, self.milliseconds
        )
    }
}

impl FromStr for Timestamp {
    type Err = LrcError;

    /// Parse `MM:SS.mm[m]` (either separator, brackets optional)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bracketed = if trimmed.starts_with('[') {
            trimmed.to_string()
        } else {
            format!("[{}]", trimmed)
        };

        match scan_timestamp(bracketed.as_bytes()) {
            Some(raw) if raw.width == bracketed.len() => {
                Timestamp::new(raw.minutes, raw.seconds, raw.milliseconds())
            }
            _ => Err(LrcError::InvalidTimestamp(s.to_string())),
        }
    }
}

/// Descriptive song fields carried by `ti`, `ar`, `al` and `au` tags
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SongMetaData {
    /// Song title (`ti`)
    pub song_name: String,

    /// Artist (`ar`)
    pub artist_name: String,

    /// Album (`al`)
    pub album_name: String,

    /// Composer (`au`)
    pub composer_name: String,
}

impl SongMetaData {
    /// Check whether no field has been set
    pub fn is_empty(&self) -> bool {
        self.song_name.is_empty()
            && self.artist_name.is_empty()
            && self.album_name.is_empty()
            && self.composer_name.is_empty()
    }
}

/// Borrowed view of one (timestamp, lyric) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cue<'a> {
    /// When the line starts
    pub timestamp: Timestamp,

    /// The lyric text
    pub lyric: &'a str,
}

/// Result of parsing LRC text
///
/// `lyrics` and `timestamps` are index-aligned and always the same length.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedLyrics {
    /// Lyric text of every cue
    pub lyrics: Vec<String>,

    /// Time of every cue
    pub timestamps: Vec<Timestamp>,

    /// Song metadata
    pub metadata: SongMetaData,

    /// Global offset that was applied, 0 when no directive was present
    pub offset_ms: i64,
}

impl ParsedLyrics {
    /// Number of cues
    pub fn len(&self) -> usize {
        self.lyrics.len()
    }

    /// Check if there are no cues
    pub fn is_empty(&self) -> bool {
        self.lyrics.is_empty()
    }

    /// Iterate over cues in stored order
    pub fn cues(&self) -> impl Iterator<Item = Cue<'_>> + '_ {
        self.timestamps
            .iter()
            .zip(self.lyrics.iter())
            .map(|(timestamp, lyric)| Cue {
                timestamp: *timestamp,
                lyric: lyric.as_str(),
            })
    }

    /// Index of the cue that is active at `ms`
    ///
    /// Assumes the cues are time-ordered. Returns `None` before the first cue.
    pub fn cue_index_at(&self, ms: i64) -> Option<usize> {
        match self.timestamps.partition_point(|t| t.to_millis() <= ms) {
            0 => None,
            pos => Some(pos - 1),
        }
    }

    /// The cue that is active at `ms`
    pub fn cue_at(&self, ms: i64) -> Option<Cue<'_>> {
        self.cue_index_at(ms).map(|i| Cue {
            timestamp: self.timestamps[i],
            lyric: self.lyrics[i].as_str(),
        })
    }
}
