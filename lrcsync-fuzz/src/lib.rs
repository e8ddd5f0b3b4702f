//! Fuzzing harness for lrcsync-core
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_parse

use lrcsync_core::{parse, sort_by_time, to_lrc, Timestamp};

/// Parse arbitrary bytes as LRC text; must never panic
pub fn fuzz_parse(data: &[u8]) {
    let text = String::from_utf8_lossy(data);

    if let Ok(parsed) = parse(&text) {
        assert_eq!(parsed.lyrics.len(), parsed.timestamps.len());

        // Normalized output must parse back to the same cues
        let reparsed = parse(&to_lrc(&parsed)).expect("normalized output has cues");
        assert_eq!(reparsed.timestamps, parsed.timestamps);
        assert_eq!(reparsed.lyrics, parsed.lyrics);
        assert_eq!(reparsed.metadata, parsed.metadata);
    }
}

/// Sort millisecond values derived from arbitrary bytes; must never panic
pub fn fuzz_sort(data: &[u8]) {
    let mut millis: Vec<i64> = data.iter().map(|&b| (b % 16) as i64 * 100).collect();
    let mut lyrics: Vec<String> = (0..millis.len()).map(|i| i.to_string()).collect();
    let mut timestamps: Vec<Timestamp> = millis.iter().map(|&ms| Timestamp::from_millis(ms)).collect();

    sort_by_time(&mut millis, &mut lyrics, &mut timestamps).expect("arrays have equal length");

    assert!(millis.windows(2).all(|w| w[0] <= w[1]));
}
