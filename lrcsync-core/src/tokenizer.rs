//! Cursor-based tokenizer for a single LRC line
//!
//! A line is a run of condensed timestamp tokens followed by either one
//! metadata tag or free lyric text. The cursor advances by the width of each
//! matched timestamp, so 2- and 3-digit fractions mix freely on one line.

use crate::constants::{
    is_time_separator, ALBUM_TAG, ARTIST_TAG, COMPOSER_TAG, LONG_TIMESTAMP_WIDTH,
    MILLIS_PER_MINUTE, MILLIS_PER_SECOND, OFFSET_TAG, SHORT_TIMESTAMP_WIDTH, TAG_CLOSE, TAG_OPEN,
    TITLE_TAG,
};

/// Fields of a timestamp token as written, before range validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawTimestamp {
    /// Two-digit minutes field
    pub minutes: u32,

    /// Two-digit seconds field (may be 60 or more)
    pub seconds: u32,

    /// Fraction field as written
    pub fraction: u32,

    /// Number of fraction digits (2 or 3)
    pub fraction_digits: u8,

    /// Token width in bytes, brackets included
    pub width: usize,
}

impl RawTimestamp {
    /// Fraction scaled to milliseconds; 2-digit fractions are hundredths
    pub const fn milliseconds(&self) -> u32 {
        if self.fraction_digits == 2 {
            self.fraction * 10
        } else {
            self.fraction
        }
    }

    /// Total milliseconds, computed without range checks
    pub const fn total_millis(&self) -> i64 {
        self.minutes as i64 * MILLIS_PER_MINUTE
            + self.seconds as i64 * MILLIS_PER_SECOND
            + self.milliseconds() as i64
    }

    /// Check that seconds are below 60
    pub const fn is_valid(&self) -> bool {
        self.seconds < 60
    }
}

/// Metadata tag kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `[ti:...]`
    Title,
    /// `[ar:...]`
    Artist,
    /// `[al:...]`
    Album,
    /// `[au:...]`
    Composer,
    /// `[offset:...]`
    Offset,
}

impl TagKind {
    /// Look up a tag kind by its key
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            TITLE_TAG => Some(TagKind::Title),
            ARTIST_TAG => Some(TagKind::Artist),
            ALBUM_TAG => Some(TagKind::Album),
            COMPOSER_TAG => Some(TagKind::Composer),
            OFFSET_TAG => Some(TagKind::Offset),
            _ => None,
        }
    }
}

/// One token of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A condensed timestamp token
    Timestamp(RawTimestamp),

    /// A metadata tag spanning the rest of the line
    Tag {
        /// Which tag
        kind: TagKind,
        /// Untrimmed value between `:` and the closing bracket
        value: &'a str,
        /// The whole remaining text, used when the tag is not applied
        raw: &'a str,
    },

    /// Everything after the last timestamp
    Text(&'a str),
}

/// Try to match a condensed timestamp token at the start of `bytes`
///
/// Shape: `[`, 2 digits, sep, 2 digits, sep, 2 or 3 digits, `]`, where sep is
/// `:` or `.`. Returns `None` if the prefix does not match.
pub fn scan_timestamp(bytes: &[u8]) -> Option<RawTimestamp> {
    if bytes.len() < SHORT_TIMESTAMP_WIDTH || bytes[0] != TAG_OPEN {
        return None;
    }

    let minutes = two_digits(bytes[1], bytes[2])?;
    if !is_time_separator(bytes[3]) {
        return None;
    }
    let seconds = two_digits(bytes[4], bytes[5])?;
    if !is_time_separator(bytes[6]) {
        return None;
    }
    let hundredths = two_digits(bytes[7], bytes[8])?;

    if bytes[9] == TAG_CLOSE {
        return Some(RawTimestamp {
            minutes,
            seconds,
            fraction: hundredths,
            fraction_digits: 2,
            width: SHORT_TIMESTAMP_WIDTH,
        });
    }

    let third = digit(bytes[9])?;
    if bytes.get(10) != Some(&TAG_CLOSE) {
        return None;
    }

    Some(RawTimestamp {
        minutes,
        seconds,
        fraction: hundredths * 10 + third,
        fraction_digits: 3,
        width: LONG_TIMESTAMP_WIDTH,
    })
}

/// Try to match `rest` as exactly one `[key:value]` metadata tag
pub fn scan_tag(rest: &str) -> Option<(TagKind, &str)> {
    let inner = rest.strip_prefix('[')?.strip_suffix(']')?;
    let (key, value) = inner.split_once(':')?;
    TagKind::from_key(key).map(|kind| (kind, value))
}

fn digit(b: u8) -> Option<u32> {
    b.is_ascii_digit().then(|| (b - b'0') as u32)
}

fn two_digits(hi: u8, lo: u8) -> Option<u32> {
    Some(digit(hi)? * 10 + digit(lo)?)
}

/// Iterator over the tokens of one line
///
/// Yields any number of `Timestamp` tokens followed by exactly one `Tag` or
/// `Text` token, then ends.
#[derive(Debug, Clone)]
pub struct LineTokenizer<'a> {
    line: &'a str,
    cursor: usize,
    done: bool,
}

impl<'a> LineTokenizer<'a> {
    /// Create a tokenizer over a single line (without its terminator)
    pub fn new(line: &'a str) -> Self {
        Self {
            line,
            cursor: 0,
            done: false,
        }
    }

    /// Byte offset of the next unread character
    pub fn position(&self) -> usize {
        self.cursor
    }
}

impl<'a> Iterator for LineTokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        // Timestamp tokens are pure ASCII, so the cursor stays on a char boundary
        let rest = &self.line[self.cursor..];

        if let Some(raw) = scan_timestamp(rest.as_bytes()) {
            self.cursor += raw.width;
            return Some(Token::Timestamp(raw));
        }

        self.done = true;
        self.cursor = self.line.len();

        match scan_tag(rest) {
            Some((kind, value)) => Some(Token::Tag {
                kind,
                value,
                raw: rest,
            }),
            None => Some(Token::Text(rest)),
        }
    }
}
