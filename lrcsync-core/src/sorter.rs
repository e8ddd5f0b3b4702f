//! Time ordering of parallel cue arrays
//!
//! Cues are sorted with a partition-exchange sort over their millisecond
//! values. Cues that share a time keep the order in which they appeared in
//! the source text.

use crate::error::LrcError;
use crate::types::{ParsedLyrics, Timestamp};
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "logging")]
use tracing::debug;

/// Sort three parallel arrays in place by ascending `millis`
///
/// `millis[i]` must be the millisecond value of `timestamps[i]`. All three
/// slices are permuted together. Entries with equal `millis` keep their
/// relative input order.
///
/// Returns [`LrcError::MisalignedCues`] and leaves the slices untouched if
/// they differ in length.
pub fn sort_by_time(
    millis: &mut [i64],
    lyrics: &mut [String],
    timestamps: &mut [Timestamp],
) -> Result<(), LrcError> {
    if millis.len() != lyrics.len() || millis.len() != timestamps.len() {
        return Err(LrcError::MisalignedCues {
            millis: millis.len(),
            lyrics: lyrics.len(),
            timestamps: timestamps.len(),
        });
    }

    if millis.len() < 2 {
        return Ok(());
    }

    // Source position is the secondary key, so no two entries ever compare
    // equal and ties cannot be reordered by an exchange
    let mut order: Vec<usize> = (0..millis.len()).collect();
    let mut arrays = CueArrays {
        millis,
        order: &mut order,
        lyrics,
        timestamps,
    };

    let high = arrays.millis.len() - 1;
    arrays.quick_sort(0, high);
    Ok(())
}

/// Sort the cues of a parse result by time
pub fn sort_lyrics(parsed: &mut ParsedLyrics) -> Result<(), LrcError> {
    let mut millis: Vec<i64> = parsed.timestamps.iter().map(Timestamp::to_millis).collect();

    #[cfg(feature = "logging")]
    debug!("Sorting {} cues by time", millis.len());

    sort_by_time(&mut millis, &mut parsed.lyrics, &mut parsed.timestamps)
}

/// Check that timestamps are in non-decreasing order
pub fn is_time_ordered(timestamps: &[Timestamp]) -> bool {
    timestamps
        .windows(2)
        .all(|pair| pair[0].to_millis() <= pair[1].to_millis())
}

struct CueArrays<'a> {
    millis: &'a mut [i64],
    order: &'a mut [usize],
    lyrics: &'a mut [String],
    timestamps: &'a mut [Timestamp],
}

impl CueArrays<'_> {
    fn key(&self, i: usize) -> (i64, usize) {
        (self.millis[i], self.order[i])
    }

    /// Hoare partition around the middle element
    ///
    /// Only the smaller side is sorted recursively; the larger side is handled
    /// by the loop, so the stack depth stays below log2 of the range length.
    fn quick_sort(&mut self, mut low: usize, mut high: usize) {
        while low < high {
            let (left_end, right_start) = self.partition(low, high);

            let left = left_end.map_or(0, |end| end - low + 1);
            let right = right_start.map_or(0, |start| high - start + 1);

            if left <= right {
                if let Some(end) = left_end.filter(|&end| low < end) {
                    self.quick_sort(low, end);
                }
                match right_start {
                    Some(start) if start < high => low = start,
                    _ => return,
                }
            } else {
                if let Some(start) = right_start.filter(|&start| start < high) {
                    self.quick_sort(start, high);
                }
                match left_end {
                    Some(end) if low < end => high = end,
                    _ => return,
                }
            }
        }
    }

    /// Partition `low..=high`, returning the last index of the left side and
    /// the first index of the right side, or `None` for a side that is empty
    fn partition(&mut self, low: usize, high: usize) -> (Option<usize>, Option<usize>) {
        let pivot = self.key(low + (high - low) / 2);

        // Signed cursors: `j` may step one below `low` when `low == 0`
        let mut i = low as isize;
        let mut j = high as isize;

        while i <= j {
            while self.key(i as usize) < pivot {
                i += 1;
            }
            while self.key(j as usize) > pivot {
                j -= 1;
            }
            if i <= j {
                // Equal keys are never exchanged
                if self.key(i as usize) != self.key(j as usize) {
                    self.swap(i as usize, j as usize);
                }
                i += 1;
                j -= 1;
            }
        }

        let left_end = usize::try_from(j).ok().filter(|&end| end >= low);
        let right_start = usize::try_from(i).ok().filter(|&start| start <= high);
        (left_end, right_start)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.millis.swap(a, b);
        self.order.swap(a, b);
        self.lyrics.swap(a, b);
        self.timestamps.swap(a, b);
    }
}
