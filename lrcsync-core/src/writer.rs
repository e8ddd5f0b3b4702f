//! Normalized LRC output
//!
//! Writes metadata tags followed by one `[MM:SS.mmm]text` line per cue, in
//! stored order. No `offset` tag is written because parsed timestamps
//! already include the offset.
//!
//! A lyric that would read back as a timestamp or a tag is written after a
//! single space. The parser trims lyric text, so the cue is unchanged on
//! re-parse and the text is never applied as a directive.

use crate::constants::{ALBUM_TAG, ARTIST_TAG, BLANK_LYRIC, COMPOSER_TAG, TITLE_TAG};
use crate::tokenizer::{scan_tag, scan_timestamp};
use crate::types::ParsedLyrics;
use alloc::string::String;
use core::fmt::{self, Write};

/// Write `lyrics` as LRC text into `out`
pub fn write_lrc<W: Write>(out: &mut W, lyrics: &ParsedLyrics) -> fmt::Result {
    let meta = &lyrics.metadata;
    for (key, value) in [
        (TITLE_TAG, &meta.song_name),
        (ARTIST_TAG, &meta.artist_name),
        (ALBUM_TAG, &meta.album_name),
        (COMPOSER_TAG, &meta.composer_name),
    ] {
        if !value.is_empty() {
            writeln!(out, "[{}:{}]", key, value)?;
        }
    }

    for cue in lyrics.cues() {
        let text = if cue.lyric == BLANK_LYRIC { "" } else { cue.lyric };
        let sep = if needs_escape(text) { " " } else { "" };
        writeln!(out, "[{}]{}{}", cue.timestamp, sep, text)?;
    }

    Ok(())
}

fn needs_escape(text: &str) -> bool {
    scan_timestamp(text.as_bytes()).is_some() || scan_tag(text).is_some()
}

/// Render `lyrics` as an LRC document
pub fn to_lrc(lyrics: &ParsedLyrics) -> String {
    let mut out = String::new();
    // Writing into a String never fails
    let _ = write_lrc(&mut out, lyrics);
    out
}
