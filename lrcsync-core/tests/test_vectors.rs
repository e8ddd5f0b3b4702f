//! Test vectors for the LRC grammar
//!
//! Each vector pairs an input document with the cues it must produce after
//! sorting, written as `(millis, lyric)`, or `None` when parsing must fail
//! with `NoLyricsFound`.

use lrcsync_core::{parse, LrcError, ParsedLyrics};

struct Vector {
    name: &'static str,
    input: &'static str,
    expected: Option<&'static [(i64, &'static str)]>,
}

const VECTORS: &[Vector] = &[
    Vector {
        name: "01_single_line",
        input: "[00:01.000]Hello",
        expected: Some(&[(1000, "Hello")]),
    },
    Vector {
        name: "02_two_digit_fraction_is_hundredths",
        input: "[00:01.05]a",
        expected: Some(&[(1050, "a")]),
    },
    Vector {
        name: "03_colon_separated_fraction",
        input: "[02:03:40]a",
        expected: Some(&[(123_400, "a")]),
    },
    Vector {
        name: "04_dot_separated_minutes",
        input: "[00.01:000]a",
        expected: Some(&[(1000, "a")]),
    },
    Vector {
        name: "05_condensed_line",
        input: "[00:01.00][00:02.00]Both",
        expected: Some(&[(1000, "Both"), (2000, "Both")]),
    },
    Vector {
        name: "06_condensed_mixed_widths",
        input: "[00:03.000][00:01.00][00:02.500]x",
        expected: Some(&[(1000, "x"), (2500, "x"), (3000, "x")]),
    },
    Vector {
        name: "07_seconds_out_of_range",
        input: "[00:61.00]dropped\n[00:02.00]kept",
        expected: Some(&[(2000, "kept")]),
    },
    Vector {
        name: "08_only_invalid_timestamps",
        input: "[00:60.00]a\n[01:99.99]b",
        expected: None,
    },
    Vector {
        name: "09_blank_lyric",
        input: "[00:01.00]",
        expected: Some(&[(1000, " ")]),
    },
    Vector {
        name: "10_whitespace_trimmed",
        input: "[00:01.00]\t  spaced out \t",
        expected: Some(&[(1000, "spaced out")]),
    },
    Vector {
        name: "11_metadata_only",
        input: "[ti:a]\n[ar:b]\n[al:c]\n[au:d]",
        expected: None,
    },
    Vector {
        name: "12_empty_document",
        input: "",
        expected: None,
    },
    Vector {
        name: "13_plain_text_only",
        input: "no timestamps\nanywhere here",
        expected: None,
    },
    Vector {
        name: "14_positive_offset",
        input: "[offset:500]\n[00:01.00]x",
        expected: Some(&[(1500, "x")]),
    },
    Vector {
        name: "15_negative_offset_clamps",
        input: "[offset:-2000]\n[00:01.00]x\n[00:05.00]y",
        expected: Some(&[(0, "x"), (3000, "y")]),
    },
    Vector {
        name: "16_offset_after_cues_still_applies",
        input: "[00:01.00]x\n[offset:1000]",
        expected: Some(&[(2000, "x")]),
    },
    Vector {
        name: "17_unreadable_offset_ignored",
        input: "[offset:soon]\n[00:01.00]x",
        expected: Some(&[(1000, "x")]),
    },
    Vector {
        name: "18_equal_times_keep_source_order",
        input: "[00:05.00]first\n[00:01.00]early\n[00:05.000]second\n[00:05.00]third",
        expected: Some(&[(1000, "early"), (5000, "first"), (5000, "second"), (5000, "third")]),
    },
    Vector {
        name: "19_offset_collapses_to_zero_keeps_order",
        input: "[offset:-9000]\n[00:03.00]b\n[00:01.00]a\n[00:02.00]c",
        expected: Some(&[(0, "b"), (0, "a"), (0, "c")]),
    },
    Vector {
        name: "20_unknown_tag_is_text",
        input: "[00:01.00][by:someone]",
        expected: Some(&[(1000, "[by:someone]")]),
    },
    Vector {
        name: "21_malformed_timestamp_is_text",
        input: "[00:01.00][0:02.00]rest",
        expected: Some(&[(1000, "[0:02.00]rest")]),
    },
    Vector {
        name: "22_timestamp_not_at_line_start",
        input: "intro [00:01.00]x",
        expected: None,
    },
    Vector {
        name: "23_crlf_line_endings",
        input: "[00:02.00]b\r\n[00:01.00]a\r\n",
        expected: Some(&[(1000, "a"), (2000, "b")]),
    },
    Vector {
        name: "24_max_time",
        input: "[99:59.999]end",
        expected: Some(&[(5_999_999, "end")]),
    },
];

fn cues(parsed: &ParsedLyrics) -> Vec<(i64, &str)> {
    parsed
        .cues()
        .map(|c| (c.timestamp.to_millis(), c.lyric))
        .collect()
}

#[test]
fn test_all_vectors() {
    for vector in VECTORS {
        match (parse(vector.input), vector.expected) {
            (Ok(parsed), Some(expected)) => {
                assert_eq!(cues(&parsed), expected, "vector {}", vector.name);
            }
            (Err(err), None) => {
                assert_eq!(err, LrcError::NoLyricsFound, "vector {}", vector.name);
            }
            (Ok(parsed), None) => {
                panic!("vector {}: expected failure, got {:?}", vector.name, parsed);
            }
            (Err(err), Some(_)) => {
                panic!("vector {}: unexpected error {:?}", vector.name, err);
            }
        }
    }
}

#[test]
fn test_vector_names_are_unique() {
    let mut names: Vec<_> = VECTORS.iter().map(|v| v.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), VECTORS.len());
}
