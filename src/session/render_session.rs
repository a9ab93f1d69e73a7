use crate::eval::evaluator::Evaluator;
use crate::eval::state::FrameState;
use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::FramecastResult;
use crate::render::pipeline::{RenderStats, RenderThreading, render_frame_set, render_range};
use crate::render::pool::WorkerPool;
use crate::render::sink::FrameSink;
use crate::timeline::scene::Scene;

/// Options controlling [`RenderSession`] batch rendering.
#[derive(Clone, Debug, Default)]
pub struct RenderSessionOpts {
    /// Threading and chunking for range renders.
    pub threading: RenderThreading,
}

/// One rendering job: a validated scene plus the workers that evaluate it.
///
/// With `threading.parallel` set, the worker pool is acquired in [`RenderSession::new`] and lives
/// until [`RenderSession::release`] or drop.
#[derive(Debug)]
pub struct RenderSession {
    scene: Scene,
    opts: RenderSessionOpts,
    pool: Option<WorkerPool>,
}

impl RenderSession {
    /// Start a session.
    pub fn new(scene: Scene, opts: RenderSessionOpts) -> FramecastResult<Self> {
        let pool = if opts.threading.parallel {
            Some(WorkerPool::acquire(opts.threading.threads)?)
        } else {
            None
        };
        tracing::debug!(
            duration = scene.duration_frames(),
            parallel = opts.threading.parallel,
            "render session started"
        );
        Ok(Self { scene, opts, pool })
    }

    /// Scene being rendered.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Session options.
    pub fn opts(&self) -> &RenderSessionOpts {
        &self.opts
    }

    /// Whether a worker pool is held.
    pub fn has_pool(&self) -> bool {
        self.pool.is_some()
    }

    /// Evaluate a single frame.
    pub fn eval_frame(&self, frame: FrameIndex) -> FramecastResult<FrameState> {
        Evaluator::eval_frame(&self.scene, frame)
    }

    /// Stream a frame range into `sink`.
    pub fn render_range(
        &self,
        range: FrameRange,
        sink: &mut dyn FrameSink,
    ) -> FramecastResult<RenderStats> {
        render_range(
            &self.scene,
            range,
            sink,
            &self.opts.threading,
            self.pool.as_ref(),
        )
    }

    /// Stream the whole scene into `sink`.
    pub fn render_all(&self, sink: &mut dyn FrameSink) -> FramecastResult<RenderStats> {
        let range = FrameRange::new(FrameIndex(0), FrameIndex(self.scene.duration_frames()))?;
        self.render_range(range, sink)
    }

    /// Stream an arbitrary frame subset into `sink`.
    pub fn render_frame_set(
        &self,
        frames: &[FrameIndex],
        sink: &mut dyn FrameSink,
    ) -> FramecastResult<RenderStats> {
        render_frame_set(
            &self.scene,
            frames,
            sink,
            &self.opts.threading,
            self.pool.as_ref(),
        )
    }

    /// End the session, joining any workers, and hand back the scene.
    pub fn release(mut self) -> Scene {
        if let Some(pool) = self.pool.take() {
            pool.release();
        }
        self.scene
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/render_session.rs"]
mod tests;
