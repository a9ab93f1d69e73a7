//! Scale/anchor transform for zoom windows.
//!
//! Each window springs in over [`ZOOM_IN_SECS`], holds the target scale, then eases out over
//! [`ZOOM_OUT_SECS`] so the last frame of the window is back at scale 1.

use crate::animation::ease::Ease;
use crate::animation::spring::{SpringConfig, spring};
use crate::foundation::clock::to_frame;
use crate::foundation::core::{Affine, Canvas, Fps, Point};
use crate::timeline::model::ZoomPoint;

/// Length of the spring-in phase.
pub const ZOOM_IN_SECS: f64 = 0.28;
/// Length of the ease-out phase.
pub const ZOOM_OUT_SECS: f64 = 0.32;

/// Spring used for the zoom-in phase.
pub const ZOOM_SPRING: SpringConfig = SpringConfig {
    damping: 18.0,
    stiffness: 200.0,
    mass: 0.6,
};

/// Zoom state of one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ZoomTransform {
    /// Uniform scale (1 = no zoom).
    pub scale: f64,
    /// Fixed point of the scale, in percent of the canvas.
    pub anchor: Point,
    /// Index of the active zoom window.
    pub zoom_index: Option<usize>,
}

impl ZoomTransform {
    /// No zoom, centred anchor.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        anchor: Point::new(50.0, 50.0),
        zoom_index: None,
    };

    /// Return `true` when this transform changes nothing.
    pub fn is_identity(&self) -> bool {
        self.scale == 1.0
    }

    /// Pixel-space matrix scaling about the anchor.
    pub fn to_affine(&self, canvas: Canvas) -> Affine {
        let anchor = canvas.pct_to_px(self.anchor.to_vec2()).to_vec2();
        Affine::translate(anchor) * Affine::scale(self.scale) * Affine::translate(-anchor)
    }
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Zoom transform at `frame`; identity outside every window.
pub fn zoom_at(zoom_points: &[ZoomPoint], frame: i64, fps: Fps) -> ZoomTransform {
    let Some((index, zp, span)) = zoom_points.iter().enumerate().find_map(|(i, zp)| {
        let span = zp.window().frames(fps);
        span.contains(frame).then_some((i, zp, span))
    }) else {
        return ZoomTransform::IDENTITY;
    };

    let local = frame - span.start;
    let last = span.len() - 1;
    let in_frames = to_frame(ZOOM_IN_SECS, fps).max(1);
    let out_frames = to_frame(ZOOM_OUT_SECS, fps).max(1);

    let in_factor = if local < in_frames {
        spring(local as f64, fps, ZOOM_SPRING, 0.0, 1.0)
    } else {
        1.0
    };

    let out_start = last - out_frames;
    let out_factor = if local > out_start {
        let p = (local - out_start) as f64 / out_frames as f64;
        1.0 - Ease::OutCubic.apply(p)
    } else {
        1.0
    };

    ZoomTransform {
        scale: 1.0 + (zp.scale - 1.0) * in_factor * out_factor,
        anchor: Point::new(zp.anchor_x * 100.0, zp.anchor_y * 100.0),
        zoom_index: Some(index),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/zoom/scheduler.rs"]
mod tests;
