use crate::animation::ease::Ease;
use crate::animation::interpolate::{InterpolateOpts, interpolate};
use crate::foundation::clock::to_frame;
use crate::foundation::color::Rgba8;
use crate::foundation::core::{Fps, Point};
use crate::timeline::model::TapPoint;

/// Lifetime of one ripple.
pub const RIPPLE_SECS: f64 = 0.55;
/// Progress below which the inner dot is drawn.
pub const INNER_DOT_UNTIL: f64 = 0.35;

/// Tap ripple sampled at one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RippleState {
    /// Index of the tap in the scene.
    pub tap: usize,
    /// Centre in percent of the canvas.
    pub center: Point,
    /// Normalized progress through the ripple, `0..=1`.
    pub progress: f64,
    /// Ring radius relative to the base radius (0.2 to 1.6).
    pub radius_scale: f64,
    /// Ring opacity (0.55 to 0).
    pub opacity: f64,
    /// Ring colour.
    pub color: Rgba8,
    /// Whether the solid inner dot is visible.
    pub inner_dot: bool,
}

/// Every ripple alive at `frame`, in tap order. Taps never interact.
pub fn ripples_at(taps: &[TapPoint], frame: i64, fps: Fps) -> Vec<RippleState> {
    let len = to_frame(RIPPLE_SECS, fps).max(1);
    taps.iter()
        .enumerate()
        .filter_map(|(i, tap)| {
            let local = frame - to_frame(tap.time, fps);
            if !(0..len).contains(&local) {
                return None;
            }
            let progress = if len > 1 {
                local as f64 / (len - 1) as f64
            } else {
                1.0
            };
            Some(RippleState {
                tap: i,
                center: Point::new(tap.x * 100.0, tap.y * 100.0),
                progress,
                radius_scale: interpolate(
                    progress,
                    [0.0, 1.0],
                    [0.2, 1.6],
                    InterpolateOpts::clamped(Ease::OutCubic),
                ),
                opacity: interpolate(
                    progress,
                    [0.0, 1.0],
                    [0.55, 0.0],
                    InterpolateOpts::default(),
                ),
                color: tap.color.unwrap_or(Rgba8::WHITE),
                inner_dot: progress < INNER_DOT_UNTIL,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/effects/ripple.rs"]
mod tests;
