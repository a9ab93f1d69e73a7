use std::collections::HashMap;
use std::sync::mpsc;

use rayon::prelude::*;

use crate::eval::evaluator::Evaluator;
use crate::eval::state::FrameState;
use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{FramecastError, FramecastResult};
use crate::render::fingerprint::{FrameFingerprint, RunDigest, fingerprint_state};
use crate::render::pool::WorkerPool;
use crate::render::sink::{FrameSink, SinkConfig};
use crate::timeline::scene::Scene;

/// Sequential/parallel evaluation settings for batch rendering.
#[derive(Clone, Debug)]
pub struct RenderThreading {
    /// Evaluate frames on a worker pool.
    pub parallel: bool,
    /// Frames scheduled per batch (0 is treated as 1).
    pub chunk_size: usize,
    /// Worker thread count. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

/// Batch render statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct RenderStats {
    /// Frames delivered to the sink.
    pub frames_total: u64,
    /// Digest of every delivered frame's content fingerprint, in delivery order.
    pub digest: FrameFingerprint,
}

/// Evaluate `[range.start, range.end)` sequentially into memory.
pub fn render_frames(scene: &Scene, range: FrameRange) -> FramecastResult<Vec<FrameState>> {
    check_range(scene, range)?;
    range
        .iter()
        .map(|f| Evaluator::eval_frame(scene, f))
        .collect()
}

/// Evaluate a frame range and stream it into `sink`.
///
/// The sink sees frames in strictly increasing index order even when workers finish out of order.
/// With `threading.parallel` set and no `pool`, a pool is acquired for the duration of the call.
#[tracing::instrument(skip(scene, sink, pool))]
pub fn render_range(
    scene: &Scene,
    range: FrameRange,
    sink: &mut dyn FrameSink,
    threading: &RenderThreading,
    pool: Option<&WorkerPool>,
) -> FramecastResult<RenderStats> {
    check_range(scene, range)?;
    stream(scene, range.iter().collect(), sink, threading, pool)
}

/// Evaluate an arbitrary subset of frames and stream it into `sink`.
///
/// Frames are deduplicated and delivered in increasing order.
#[tracing::instrument(skip(scene, frames, sink, pool), fields(frames = frames.len()))]
pub fn render_frame_set(
    scene: &Scene,
    frames: &[FrameIndex],
    sink: &mut dyn FrameSink,
    threading: &RenderThreading,
    pool: Option<&WorkerPool>,
) -> FramecastResult<RenderStats> {
    if frames.is_empty() {
        return Err(FramecastError::validation("frame set must be non-empty"));
    }
    if let Some(f) = frames.iter().find(|f| f.0 >= scene.duration_frames()) {
        return Err(FramecastError::validation(format!(
            "frame {} is outside the scene duration ({})",
            f.0,
            scene.duration_frames()
        )));
    }
    let mut sorted = frames.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    stream(scene, sorted, sink, threading, pool)
}

fn check_range(scene: &Scene, range: FrameRange) -> FramecastResult<()> {
    if range.is_empty() {
        return Err(FramecastError::validation("render range must be non-empty"));
    }
    if range.end.0 > scene.duration_frames() {
        return Err(FramecastError::validation(
            "render range must be within scene duration",
        ));
    }
    Ok(())
}

#[derive(Debug)]
struct FrameMsg {
    slot: usize,
    state: FrameState,
}

enum Halt {
    SinkGone,
    Failed(FramecastError),
}

fn stream(
    scene: &Scene,
    frames: Vec<FrameIndex>,
    sink: &mut dyn FrameSink,
    threading: &RenderThreading,
    pool: Option<&WorkerPool>,
) -> FramecastResult<RenderStats> {
    let owned_pool = match (threading.parallel, pool) {
        (true, None) => Some(WorkerPool::acquire(threading.threads)?),
        _ => None,
    };
    let pool = if threading.parallel {
        pool.or(owned_pool.as_ref())
    } else {
        None
    };

    let cfg = SinkConfig {
        canvas: scene.canvas(),
        fps: scene.fps(),
        audio: scene.audio().clone(),
    };
    let chunk_size = normalized_chunk_size(threading.chunk_size);
    let total = frames.len();

    std::thread::scope(|scope| -> FramecastResult<RenderStats> {
        let (tx, rx) = mpsc::sync_channel::<FrameMsg>(chunk_size);
        let sink_ref: &mut dyn FrameSink = sink;

        let writer = scope.spawn(move || -> FramecastResult<Option<RenderStats>> {
            sink_ref.begin(cfg)?;

            let mut delivered = 0u64;
            let mut digest = RunDigest::new();
            let mut next = 0usize;
            let mut pending = HashMap::<usize, FrameState>::new();
            while next < total {
                let Some(state) = pending.remove(&next) else {
                    let Ok(msg) = rx.recv() else {
                        return Ok(None);
                    };
                    pending.insert(msg.slot, msg.state);
                    continue;
                };
                digest.push(state.frame, fingerprint_state(&state));
                sink_ref.push_frame(state)?;
                delivered += 1;
                next += 1;
            }

            sink_ref.end()?;
            Ok(Some(RenderStats {
                frames_total: delivered,
                digest: digest.finish(),
            }))
        });

        let produced = produce(scene, &frames, chunk_size, pool, &tx);
        drop(tx);
        let written = writer
            .join()
            .map_err(|_| FramecastError::evaluation("frame sink thread panicked"))?;

        match (produced, written) {
            (Err(Halt::Failed(e)), _) => Err(e),
            (_, Err(e)) => Err(e),
            (_, Ok(Some(stats))) => Ok(stats),
            (_, Ok(None)) => Err(FramecastError::evaluation(
                "frame producer stopped before the last frame",
            )),
        }
    })
}

fn produce(
    scene: &Scene,
    frames: &[FrameIndex],
    chunk_size: usize,
    pool: Option<&WorkerPool>,
    tx: &mpsc::SyncSender<FrameMsg>,
) -> Result<(), Halt> {
    for (chunk_idx, chunk) in frames.chunks(chunk_size).enumerate() {
        let base = chunk_idx * chunk_size;
        tracing::debug!(
            chunk = chunk_idx,
            first = chunk[0].0,
            len = chunk.len(),
            parallel = pool.is_some(),
            "scheduling chunk"
        );
        match pool {
            Some(pool) => pool.install(|| {
                chunk.par_iter().enumerate().try_for_each_with(
                    tx.clone(),
                    |tx, (i, &f)| -> Result<(), Halt> { eval_and_send(scene, base + i, f, tx) },
                )
            })?,
            None => {
                for (i, &f) in chunk.iter().enumerate() {
                    eval_and_send(scene, base + i, f, tx)?;
                }
            }
        }
    }
    Ok(())
}

fn eval_and_send(
    scene: &Scene,
    slot: usize,
    frame: FrameIndex,
    tx: &mpsc::SyncSender<FrameMsg>,
) -> Result<(), Halt> {
    let state = Evaluator::eval_frame(scene, frame).map_err(Halt::Failed)?;
    tx.send(FrameMsg { slot, state })
        .map_err(|_| Halt::SinkGone)
}

fn normalized_chunk_size(chunk_size: usize) -> usize {
    chunk_size.max(1)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
