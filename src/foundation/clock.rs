//! Seconds <-> frame conversion.
//!
//! Every component compares time windows against the current frame through these functions, so
//! rounding happens in exactly one place.

use crate::foundation::core::{FrameIndex, Fps};

/// Convert seconds to a frame index: `round(seconds * fps)`.
///
/// No clamping is applied; negative inputs produce negative frames.
pub fn to_frame(seconds: f64, fps: Fps) -> i64 {
    (seconds * fps.as_f64()).round() as i64
}

/// Convert a (possibly negative) frame to seconds: `frame / fps`.
pub fn to_seconds(frame: i64, fps: Fps) -> f64 {
    frame as f64 / fps.as_f64()
}

/// Seconds of an absolute frame index.
pub fn frame_time(frame: FrameIndex, fps: Fps) -> f64 {
    to_seconds(frame.0 as i64, fps)
}

/// Half-open time window `[start, end)` in seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimeWindow {
    /// Window start in seconds.
    pub start: f64,
    /// Window end in seconds (exclusive).
    pub end: f64,
}

/// Half-open frame span `[start, end)`; may start before frame 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameSpan {
    /// First frame of the span.
    pub start: i64,
    /// One past the last frame.
    pub end: i64,
}

impl FrameSpan {
    /// Number of frames in the span.
    pub fn len(self) -> i64 {
        (self.end - self.start).max(0)
    }

    /// Return `true` when the span has no frames.
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Return `true` when `frame` lies in `[start, end)`.
    pub fn contains(self, frame: i64) -> bool {
        self.start <= frame && frame < self.end
    }
}

impl TimeWindow {
    /// Build a window from raw bounds.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Window length in seconds.
    pub fn duration(self) -> f64 {
        self.end - self.start
    }

    /// Frame span covered by this window at `fps`.
    pub fn frames(self, fps: Fps) -> FrameSpan {
        FrameSpan {
            start: to_frame(self.start, fps),
            end: to_frame(self.end, fps),
        }
    }

    /// Return `true` when `frame` falls inside this window once both are in frame space.
    pub fn contains_frame(self, frame: i64, fps: Fps) -> bool {
        self.frames(fps).contains(frame)
    }

    /// Return `true` when this window intersects the closed range `[lo, hi]` (seconds).
    pub fn intersects(self, lo: f64, hi: f64) -> bool {
        self.start <= hi && self.end >= lo
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/clock.rs"]
mod tests;
