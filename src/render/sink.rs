use std::io::Write;

use crate::audio::manifest::AudioManifest;
use crate::eval::state::FrameState;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{FramecastError, FramecastResult};

/// Configuration handed to a [`FrameSink`] before the first frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SinkConfig {
    /// Output canvas.
    pub canvas: Canvas,
    /// Output frame rate.
    pub fps: Fps,
    /// Audio schedule for the muxer.
    pub audio: AudioManifest,
}

/// Consumer of evaluated frames in timeline order.
///
/// Ordering contract: `push_frame` is called with strictly increasing frame indices.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> FramecastResult<()>;
    /// Push one frame.
    fn push_frame(&mut self, state: FrameState) -> FramecastResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> FramecastResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<FrameState>,
    finished: bool,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Frames in the order they were pushed.
    pub fn frames(&self) -> &[FrameState] {
        &self.frames
    }

    /// Take the captured frames.
    pub fn into_frames(self) -> Vec<FrameState> {
        self.frames
    }

    /// Whether `end` has been called since the last `begin`.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> FramecastResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, state: FrameState) -> FramecastResult<()> {
        self.frames.push(state);
        Ok(())
    }

    fn end(&mut self) -> FramecastResult<()> {
        self.finished = true;
        Ok(())
    }
}

/// Writes the config as the first line, then one JSON object per frame.
pub struct JsonLinesSink<W: Write + Send> {
    out: W,
}

impl<W: Write + Send> JsonLinesSink<W> {
    /// Wrap a writer. Callers writing to files should pass a `BufWriter`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line<T: serde::Serialize>(&mut self, value: &T) -> FramecastResult<()> {
        serde_json::to_writer(&mut self.out, value)
            .map_err(|e| FramecastError::serde(format!("encode frame line: {e}")))?;
        self.out.write_all(b"\n").map_err(io_err)
    }
}

impl<W: Write + Send> FrameSink for JsonLinesSink<W> {
    fn begin(&mut self, cfg: SinkConfig) -> FramecastResult<()> {
        self.write_line(&cfg)
    }

    fn push_frame(&mut self, state: FrameState) -> FramecastResult<()> {
        self.write_line(&state)
    }

    fn end(&mut self) -> FramecastResult<()> {
        self.out.flush().map_err(io_err)
    }
}

fn io_err(e: std::io::Error) -> FramecastError {
    FramecastError::Other(anyhow::Error::new(e).context("write frame sink"))
}

#[cfg(test)]
#[path = "../../tests/unit/render/sink.rs"]
mod tests;
