use crate::foundation::clock::to_frame;
use crate::foundation::core::Fps;
use crate::timeline::model::Segment;

/// Seconds a word is highlighted ahead of its slot.
pub const WORD_LEAD_SECS: f64 = 0.1;
/// Seconds a word stays highlighted past its slot.
pub const WORD_LAG_SECS: f64 = WORD_LEAD_SECS / 2.0;

/// Frame span in which one word of a caption is highlighted.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct WordTiming {
    /// The word, as split from the caption text.
    pub word: String,
    /// First highlighted frame.
    pub start_frame: i64,
    /// One past the last highlighted frame.
    pub end_frame: i64,
}

impl WordTiming {
    /// Return `true` when `frame` lies in `[start_frame, end_frame)`.
    pub fn contains(&self, frame: i64) -> bool {
        self.start_frame <= frame && frame < self.end_frame
    }
}

/// Split a segment's duration evenly across its whitespace-separated words.
///
/// Each word starts [`WORD_LEAD_SECS`] before its slot and ends [`WORD_LAG_SECS`] after it,
/// clamped to the segment bounds. Empty text yields no words.
pub fn split_word_timings(segment: &Segment, fps: Fps) -> Vec<WordTiming> {
    let words: Vec<&str> = segment.text.split_whitespace().collect();
    if words.is_empty() {
        return Vec::new();
    }

    let start = segment.start_time;
    let end = segment.end_time;
    let slot = (end - start) / words.len() as f64;

    words
        .into_iter()
        .enumerate()
        .map(|(i, word)| {
            let slot_start = start + i as f64 * slot;
            let slot_end = start + (i + 1) as f64 * slot;
            WordTiming {
                word: word.to_owned(),
                start_frame: to_frame((slot_start - WORD_LEAD_SECS).max(start), fps),
                end_frame: to_frame((slot_end + WORD_LAG_SECS).min(end), fps),
            }
        })
        .collect()
}

/// Index of the highlighted word at `frame`: the latest-starting word whose span contains it.
pub fn active_word(words: &[WordTiming], frame: i64) -> Option<usize> {
    words
        .iter()
        .enumerate()
        .filter(|(_, w)| w.contains(frame))
        .max_by_key(|(i, w)| (w.start_frame, *i))
        .map(|(i, _)| i)
}

#[cfg(test)]
#[path = "../../tests/unit/captions/words.rs"]
mod tests;
