//! LRC text parsing
//!
//! Turns raw LRC text into time-ordered cues plus song metadata. Parsing is
//! best-effort: timestamps with out-of-range seconds, unparsable offsets and
//! unknown tags are skipped rather than reported. Only an input with no cue
//! at all is an error.

use crate::constants::BLANK_LYRIC;
use crate::error::LrcError;
use crate::sorter::sort_lyrics;
use crate::tokenizer::{LineTokenizer, RawTimestamp, TagKind, Token};
use crate::types::{ParsedLyrics, SongMetaData, Timestamp};
use alloc::string::{String, ToString};
use alloc::vec::Vec;

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// Counters collected while parsing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Lines looked at
    pub lines_scanned: usize,

    /// Timestamp tokens matched, valid or not
    pub timestamps_found: usize,

    /// Timestamp tokens dropped because seconds were 60 or more
    pub invalid_timestamps: usize,

    /// Metadata tags (`ti`, `ar`, `al`, `au`) that set a field
    pub tags_applied: usize,

    /// An offset directive was applied
    pub offset_applied: bool,

    /// An offset directive was present but its value could not be read
    pub offset_ignored: bool,

    /// Cues emitted
    pub cues: usize,
}

/// Parse LRC text into time-ordered cues
///
/// Returns [`LrcError::NoLyricsFound`] if the text contains no valid cue.
pub fn parse(raw_text: &str) -> Result<ParsedLyrics, LrcError> {
    parse_with_stats(raw_text).map(|(parsed, _)| parsed)
}

/// Parse LRC text and report what was found along the way
pub fn parse_with_stats(raw_text: &str) -> Result<(ParsedLyrics, ParseStats), LrcError> {
    let mut state = ParseState::default();

    #[cfg(feature = "logging")]
    debug!("Parsing {} bytes of LRC text", raw_text.len());

    for line in raw_text.lines() {
        state.parse_line(line);
    }

    let ParseState {
        lyrics,
        raw_timestamps,
        metadata,
        offset_ms,
        mut stats,
    } = state;

    if lyrics.is_empty() {
        #[cfg(feature = "logging")]
        debug!(
            "No cues in {} lines ({} invalid timestamps)",
            stats.lines_scanned, stats.invalid_timestamps
        );

        return Err(LrcError::NoLyricsFound);
    }

    let timestamps = raw_timestamps
        .iter()
        .map(|raw| {
            let mut ts = Timestamp::from_millis(raw.total_millis());
            if offset_ms != 0 {
                ts.alter_timestamp(offset_ms);
            }
            ts
        })
        .collect();

    stats.cues = lyrics.len();

    let mut parsed = ParsedLyrics {
        lyrics,
        timestamps,
        metadata,
        offset_ms,
    };
    sort_lyrics(&mut parsed)?;

    #[cfg(feature = "logging")]
    debug!(
        "Parsed {} cues from {} lines (offset {} ms)",
        stats.cues, stats.lines_scanned, offset_ms
    );

    Ok((parsed, stats))
}

/// State carried across the lines of one parse call
#[derive(Default)]
struct ParseState {
    lyrics: Vec<String>,
    raw_timestamps: Vec<RawTimestamp>,
    metadata: SongMetaData,
    offset_ms: i64,
    stats: ParseStats,
}

impl ParseState {
    fn parse_line(&mut self, line: &str) {
        self.stats.lines_scanned += 1;

        let mut valid = 0usize;
        let mut text = "";

        for token in LineTokenizer::new(line) {
            match token {
                Token::Timestamp(raw) => {
                    self.stats.timestamps_found += 1;
                    if raw.is_valid() {
                        self.raw_timestamps.push(raw);
                        valid += 1;
                    } else {
                        self.stats.invalid_timestamps += 1;

                        #[cfg(feature = "logging")]
                        warn!(
                            "Skipping timestamp with {} seconds on line {}",
                            raw.seconds, self.stats.lines_scanned
                        );
                    }
                }
                Token::Tag { kind, value, raw } => {
                    // A tag that is not applied is read as lyric text
                    text = raw;
                    self.apply_tag(kind, value);
                }
                Token::Text(rest) => text = rest,
            }
        }

        if valid == 0 {
            return;
        }

        let text = match text.trim() {
            "" => BLANK_LYRIC,
            trimmed => trimmed,
        };

        self.lyrics
            .extend(core::iter::repeat(text.to_string()).take(valid));
    }

    fn apply_tag(&mut self, kind: TagKind, value: &str) {
        let field = match kind {
            TagKind::Title => &mut self.metadata.song_name,
            TagKind::Artist => &mut self.metadata.artist_name,
            TagKind::Album => &mut self.metadata.album_name,
            TagKind::Composer => &mut self.metadata.composer_name,
            TagKind::Offset => {
                self.apply_offset(value);
                return;
            }
        };

        // First occurrence wins
        if field.is_empty() {
            *field = value.trim().to_string();
            if !field.is_empty() {
                self.stats.tags_applied += 1;
            }
        }
    }

    fn apply_offset(&mut self, value: &str) {
        if self.offset_ms != 0 {
            return;
        }

        match value.trim().parse::<i32>() {
            Ok(offset) => {
                self.offset_ms = offset as i64;
                self.stats.offset_applied = offset != 0;
            }
            Err(_e) => {
                self.stats.offset_ignored = true;

                #[cfg(feature = "logging")]
                warn!("Ignoring unreadable offset {:?}: {}", value, _e);
            }
        }
    }
}
