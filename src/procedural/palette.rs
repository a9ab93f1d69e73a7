//! Slow colour cycling and drift shared by the background and the symbol overlay.

use crate::animation::ease::Ease;
use crate::animation::interpolate::{Extrapolate, InterpolateOpts, interpolate, interpolate_piecewise};
use crate::foundation::color::Rgba8;
use crate::foundation::core::Fps;
use crate::foundation::error::FramecastResult;
use crate::foundation::math::wrap_i64;

/// Aurora palette, cycled in order.
pub const AURORA: [Rgba8; 6] = [
    Rgba8::rgb(0x3d, 0xed, 0x97),
    Rgba8::rgb(0x00, 0xe5, 0xcc),
    Rgba8::rgb(0x4d, 0xa6, 0xff),
    Rgba8::rgb(0x84, 0x58, 0xd8),
    Rgba8::rgb(0xc7, 0x7d, 0xff),
    Rgba8::rgb(0xee, 0x78, 0x9e),
];

/// Seconds for one full pass through [`AURORA`].
pub const AURORA_PERIOD_SECS: u32 = 30;
/// Seconds for one pulse cycle.
pub const PULSE_PERIOD_SECS: u32 = 12;

/// Default dark end of the background gradient.
pub const COSMIC_BLACK: Rgba8 = Rgba8::rgb(0x0a, 0x0a, 0x1a);
/// Default light end of the background gradient.
pub const DEEP_PURPLE: Rgba8 = Rgba8::rgb(0x2d, 0x1b, 0x4e);

fn period_frames(secs: u32, fps: Fps) -> i64 {
    ((f64::from(secs) * fps.as_f64()).round() as i64).max(1)
}

/// Aurora colour at `frame`, blending neighbours with a sine in-out curve.
pub fn aurora_color(frame: i64, fps: Fps) -> Rgba8 {
    let period = period_frames(AURORA_PERIOD_SECS, fps);
    let position = (wrap_i64(frame, period) * AURORA.len() as i64) as f64 / period as f64;
    let index = (position.floor() as usize) % AURORA.len();
    let next = (index + 1) % AURORA.len();
    let blend = Ease::InOutSine.apply(position - position.floor());
    AURORA[index].lerp(AURORA[next], blend)
}

/// Gentle pulse scale in `[0.98, 1.02]` with a 12 second period.
pub fn pulse_scale(frame: i64, fps: Fps) -> FramecastResult<f64> {
    let period = period_frames(PULSE_PERIOD_SECS, fps);
    let progress = wrap_i64(frame, period) as f64 / period as f64;
    interpolate_piecewise(
        progress,
        &[0.0, 0.5, 1.0],
        &[0.98, 1.02, 0.98],
        InterpolateOpts::clamped(Ease::InOutSine),
    )
}

/// Radial gradient centre in percent; drifts from 50 % to 55 % over the first 900 frames and keeps
/// going.
pub fn gradient_position(frame: i64) -> f64 {
    interpolate(
        frame as f64,
        [0.0, 900.0],
        [50.0, 55.0],
        InterpolateOpts {
            left: Extrapolate::Clamp,
            right: Extrapolate::Extend,
            easing: Ease::Linear,
        },
    )
}

#[cfg(test)]
#[path = "../../tests/unit/procedural/palette.rs"]
mod tests;
