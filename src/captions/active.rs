use crate::captions::words::{WordTiming, active_word, split_word_timings};
use crate::foundation::core::Fps;
use crate::timeline::model::Segment;

/// Caption shown at one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CaptionState {
    /// Index of the segment in the scene.
    pub segment: usize,
    /// Caption text.
    pub text: String,
    /// Per-word highlight spans.
    pub words: Vec<WordTiming>,
    /// Highlighted word, if any word spans this frame.
    pub active_word: Option<usize>,
}

/// Segment shown at `frame`.
///
/// Overlapping segments resolve to the one that started most recently; ties go to the later
/// entry.
pub fn active_segment(segments: &[Segment], frame: i64, fps: Fps) -> Option<usize> {
    segments
        .iter()
        .enumerate()
        .filter_map(|(i, seg)| {
            let span = seg.window().frames(fps);
            span.contains(frame).then_some((span.start, i))
        })
        .max()
        .map(|(_, i)| i)
}

/// Caption and karaoke highlight at `frame`.
pub fn caption_at(segments: &[Segment], frame: i64, fps: Fps) -> Option<CaptionState> {
    let index = active_segment(segments, frame, fps)?;
    let seg = &segments[index];
    let words = split_word_timings(seg, fps);
    Some(CaptionState {
        segment: index,
        text: seg.text.clone(),
        active_word: active_word(&words, frame),
        words,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/captions/active.rs"]
mod tests;
