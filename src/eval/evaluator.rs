use crate::captions::active::caption_at;
use crate::classify::outro::is_outro;
use crate::classify::topic::{classify_at, topic_from_label};
use crate::effects::overlay::overlays_at;
use crate::effects::ripple::ripples_at;
use crate::effects::symbol::symbol_at;
use crate::eval::state::{BackgroundState, FrameState};
use crate::foundation::clock::frame_time;
use crate::foundation::color::Rgba8;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{FramecastError, FramecastResult};
use crate::procedural::palette::{COSMIC_BLACK, DEEP_PURPLE, gradient_position};
use crate::timeline::scene::Scene;
use crate::zoom::scheduler::zoom_at;

/// Stateless evaluator from scene timeline to frame state.
///
/// Every call is independent: the result depends only on `(scene, frame)`, so frames can be
/// evaluated in any order and on any thread.
pub struct Evaluator;

impl Evaluator {
    #[tracing::instrument(skip(scene))]
    /// Evaluate one frame.
    pub fn eval_frame(scene: &Scene, frame: FrameIndex) -> FramecastResult<FrameState> {
        if frame.0 >= scene.duration_frames() {
            return Err(FramecastError::evaluation(format!(
                "frame {} is out of bounds (duration {})",
                frame.0,
                scene.duration_frames()
            )));
        }

        let def = scene.def();
        let fps = def.fps;
        let f = i64::try_from(frame.0)
            .map_err(|_| FramecastError::evaluation("frame index overflows i64"))?;
        let time = frame_time(frame, fps);

        let caption = caption_at(&def.segments, f, fps);
        let explicit_topic = caption
            .as_ref()
            .and_then(|c| def.segments[c.segment].topic.as_deref())
            .and_then(topic_from_label);
        let topic = explicit_topic.or_else(|| classify_at(&def.segments, time));
        let symbol = symbol_at(topic.as_ref(), def.symbol, f, fps, scene.assets())?;

        Ok(FrameState {
            frame,
            time,
            background: eval_background(scene, f)?,
            zoom: zoom_at(&def.zoom_points, f, fps),
            caption,
            topic,
            symbol,
            outro: is_outro(&def.segments, time, &def.brand),
            overlays: overlays_at(&def.overlays, f, fps),
            ripples: ripples_at(&def.tap_points, f, fps),
            audio: scene.audio().state_at(frame.0),
        })
    }
}

fn eval_background(scene: &Scene, frame: i64) -> FramecastResult<BackgroundState> {
    let bg = &scene.def().background;
    let (stars, meteors) = match scene.starfield() {
        Some(field) => (field.sample_stars(frame)?, field.sample_meteors(frame)?),
        None => (Vec::new(), Vec::new()),
    };
    Ok(BackgroundState {
        gradient: bg.gradient_colors.unwrap_or([COSMIC_BLACK, DEEP_PURPLE]),
        gradient_position: gradient_position(frame),
        tint: bg.tint.unwrap_or(Rgba8::WHITE),
        stars,
        meteors,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
