//! Constants and limits for the LRC grammar

/// Opening bracket of every tag
pub const TAG_OPEN: u8 = b'[';

/// Closing bracket of every tag
pub const TAG_CLOSE: u8 = b']';

/// Width of a condensed timestamp token with a 2-digit fraction, e.g. `[00:01.00]`
pub const SHORT_TIMESTAMP_WIDTH: usize = 10;

/// Width of a condensed timestamp token with a 3-digit fraction, e.g. `[00:01.000]`
pub const LONG_TIMESTAMP_WIDTH: usize = 11;

/// Song title tag key
pub const TITLE_TAG: &str = "ti";

/// Artist tag key
pub const ARTIST_TAG: &str = "ar";

/// Album tag key
pub const ALBUM_TAG: &str = "al";

/// Composer tag key
pub const COMPOSER_TAG: &str = "au";

/// Global offset tag key
pub const OFFSET_TAG: &str = "offset";

/// Text stored for a cue whose lyric part is blank
pub const BLANK_LYRIC: &str = " ";

/// Milliseconds per second
pub const MILLIS_PER_SECOND: i64 = 1_000;

/// Milliseconds per minute
pub const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;

/// Largest representable minute value (two digits)
pub const MAX_MINUTES: u32 = 99;

/// Largest representable time, `99:59.999`
pub const MAX_TOTAL_MILLIS: i64 = MAX_MINUTES as i64 * MILLIS_PER_MINUTE + 59 * MILLIS_PER_SECOND + 999;

/// Returns true if `b` separates timestamp fields (`:` or `.`)
pub const fn is_time_separator(b: u8) -> bool {
    b == b':' || b == b'.'
}
