//! Seeded starfield and shooting-star schedule.
//!
//! The layout is derived only from `(seed, index)` plus `(duration, fps)`, so it is built once per
//! scene and sampled per frame.

use crate::animation::interpolate::{InterpolateOpts, interpolate_piecewise};
use crate::foundation::color::Rgba8;
use crate::foundation::core::{Fps, Point};
use crate::foundation::error::FramecastResult;
use crate::foundation::math::wrap_i64;
use crate::procedural::prng::SeedHash;

/// Number of twinkling stars in a field.
pub const STAR_COUNT: u32 = 60;

const STAR_STRIDE: u32 = 5;
const METEOR_STRIDE: u32 = 9;

/// Head/tail colours of a meteor, keyed by its colour index.
pub const METEOR_COLORS: [(Rgba8, Rgba8); 7] = [
    (rgba(0xff, 0xf4, 0xe0, 255), rgba(255, 200, 120, 102)),
    (rgba(0xe8, 0xf4, 0xff, 255), rgba(180, 210, 255, 102)),
    (rgba(0xff, 0xe8, 0xd0, 255), rgba(255, 180, 100, 89)),
    (rgba(0xf0, 0xe8, 0xff, 255), rgba(200, 170, 255, 89)),
    (rgba(0xff, 0xe0, 0xd8, 255), rgba(255, 160, 130, 89)),
    (rgba(0xff, 0xff, 0xff, 255), rgba(255, 255, 255, 102)),
    (rgba(0xff, 0xff, 0xff, 255), rgba(255, 255, 255, 89)),
];

const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Rgba8 {
    Rgba8 { r, g, b, a }
}

/// Static description of one star.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarSeed {
    /// Horizontal position in percent of canvas width.
    pub x_pct: f64,
    /// Vertical position in percent of canvas height.
    pub y_pct: f64,
    /// Size in pixels before twinkle scaling (2..4).
    pub base_size: f64,
    /// Twinkle phase offset in frames (0..99).
    pub delay: i64,
    /// Twinkle frequency in Hz (0.08..0.2).
    pub twinkle_speed: f64,
    /// Twinkle cycle length in frames, aligned so the cycle loops over the video.
    pub cycle_len: i64,
}

/// Static description of one shooting star.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Meteor {
    /// Entry position in percent.
    pub start: Point,
    /// Travel direction in degrees (0 = right, 90 = down).
    pub angle_deg: f64,
    /// Travel distance per frame in percent.
    pub speed: f64,
    /// Stroke width in pixels.
    pub thickness: f64,
    /// Trail length multiplier (0.6..1.4).
    pub trail_mult: f64,
    /// Index into [`METEOR_COLORS`].
    pub color_index: usize,
    /// First frame of the streak.
    pub start_frame: i64,
    /// Streak length in frames (>= 1).
    pub duration: i64,
}

/// Twinkling star sampled at one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct StarState {
    /// Position in percent.
    pub pos: Point,
    /// Rendered size in pixels.
    pub size: f64,
    /// Opacity in `[0.3, 0.8]`.
    pub opacity: f64,
    /// Soft glow radius when the star is bright.
    pub glow: Option<f64>,
}

/// Shooting star sampled at one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct MeteorState {
    /// Leading point in percent.
    pub head: Point,
    /// Trailing point in percent.
    pub tail: Point,
    /// Stroke width in pixels.
    pub thickness: f64,
    /// Brightness envelope in `[0, 1]`.
    pub intensity: f64,
    /// Head glow radius when the streak is near peak brightness.
    pub head_glow: Option<f64>,
    /// Head colour.
    pub head_color: Rgba8,
    /// Trail colour.
    pub tail_color: Rgba8,
}

/// Seeded layout shared by every frame of a scene.
#[derive(Clone, Debug, PartialEq)]
pub struct Starfield {
    stars: Vec<StarSeed>,
    meteors: Vec<Meteor>,
}

impl Starfield {
    /// Build the layout for a video of `duration_frames` frames.
    pub fn generate(seed: &str, duration_frames: u64, fps: Fps) -> Self {
        let hash = SeedHash::new(seed);
        let duration = i64::try_from(duration_frames).unwrap_or(i64::MAX).max(1);

        let stars = (0..STAR_COUNT)
            .map(|i| {
                let r = |k: u32| hash.at(i * STAR_STRIDE + k);
                let twinkle_speed = 0.08 + r(4) * 0.12;
                let base_cycle = ((30.0 / twinkle_speed).floor() as i64).max(1);
                let cycles = ((duration as f64 / base_cycle as f64).round() as i64).max(1);
                StarSeed {
                    x_pct: r(0) * 100.0,
                    y_pct: r(1) * 100.0,
                    base_size: 2.0 + r(2) * 2.0,
                    delay: (r(3) * 100.0).floor() as i64,
                    twinkle_speed,
                    cycle_len: (duration / cycles).max(1),
                }
            })
            .collect();

        Self {
            stars,
            meteors: schedule_meteors(hash, duration as f64 / fps.as_f64(), fps),
        }
    }

    /// Star layout.
    pub fn stars(&self) -> &[StarSeed] {
        &self.stars
    }

    /// Shooting-star schedule in start order.
    pub fn meteors(&self) -> &[Meteor] {
        &self.meteors
    }

    /// Twinkle state of every star at `frame`.
    pub fn sample_stars(&self, frame: i64) -> FramecastResult<Vec<StarState>> {
        let opts = InterpolateOpts::default();
        self.stars
            .iter()
            .map(|star| {
                let cycle = wrap_i64(frame + star.delay, star.cycle_len) as f64
                    / star.cycle_len as f64;
                let opacity = interpolate_piecewise(cycle, &[0.0, 0.5, 1.0], &[0.3, 0.8, 0.3], opts)?;
                let scale = interpolate_piecewise(cycle, &[0.0, 0.5, 1.0], &[0.8, 1.2, 0.8], opts)?;
                let size = star.base_size * scale;
                Ok(StarState {
                    pos: Point::new(star.x_pct, star.y_pct),
                    size,
                    opacity,
                    glow: (opacity > 0.5).then_some(size * 2.0),
                })
            })
            .collect()
    }

    /// Shooting stars visible at `frame`.
    pub fn sample_meteors(&self, frame: i64) -> FramecastResult<Vec<MeteorState>> {
        let mut out = Vec::new();
        for meteor in &self.meteors {
            let local = frame - meteor.start_frame;
            if local < 0 || local > meteor.duration {
                continue;
            }
            out.push(meteor.sample(local)?);
        }
        Ok(out)
    }
}

impl Meteor {
    fn sample(&self, local: i64) -> FramecastResult<MeteorState> {
        let opts = InterpolateOpts::default();
        let progress = local as f64 / self.duration as f64;
        let (sin, cos) = self.angle_deg.to_radians().sin_cos();

        let distance = progress * self.speed * self.duration as f64;
        let head = Point::new(self.start.x + distance * cos, self.start.y + distance * sin);

        let base_trail = 6.0 + self.trail_mult * 4.0;
        let trail = interpolate_piecewise(
            progress,
            &[0.0, 0.2, 0.8, 1.0],
            &[base_trail * 0.3, base_trail, base_trail, base_trail * 0.3],
            opts,
        )?;
        let intensity = interpolate_piecewise(
            progress,
            &[0.0, 0.15, 0.5, 0.75, 1.0],
            &[0.3, 0.7, 1.0, 0.9, 0.0],
            opts,
        )?;

        let (head_color, tail_color) = METEOR_COLORS[self.color_index % METEOR_COLORS.len()];
        Ok(MeteorState {
            head,
            tail: Point::new(head.x - trail * cos, head.y - trail * sin),
            thickness: self.thickness,
            intensity,
            head_glow: (intensity > 0.5).then_some(self.thickness * 0.8 + intensity * 1.2),
            head_color,
            tail_color,
        })
    }
}

fn schedule_meteors(hash: SeedHash, duration_secs: f64, fps: Fps) -> Vec<Meteor> {
    let fps = fps.as_f64();
    let mut out = Vec::new();
    let mut t = 1.0 + hash.at(1);
    let mut i: u32 = 0;

    while t < duration_secs - 1.0 {
        let r = |k: u32| hash.at(i * METEOR_STRIDE + k);

        let (x, y, angle) = match (r(1) * 3.0).floor() as u32 {
            // Top edge, heading down-right or down-left.
            0 => {
                let angle = if r(4) > 0.5 {
                    25.0 + r(5) * 40.0
                } else {
                    115.0 + r(5) * 40.0
                };
                (5.0 + r(2) * 90.0, -2.0 + r(3) * 15.0, angle)
            }
            // Left edge.
            1 => (-2.0 + r(2) * 10.0, 10.0 + r(3) * 50.0, -15.0 + r(5) * 50.0),
            // Right edge.
            _ => (92.0 + r(2) * 10.0, 5.0 + r(3) * 40.0, 145.0 + r(5) * 30.0),
        };

        let thickness = 0.8 + r(6) * 1.8;
        let trail_mult = 0.6 + r(7) * 0.8;
        // Thick meteors travel faster and burn out sooner.
        let tn = (thickness - 0.8) / 1.8;
        let base_speed = 2.0 + tn * 2.5;
        let base_duration = 0.2 + (1.0 - tn) * 0.35;

        out.push(Meteor {
            start: Point::new(x, y),
            angle_deg: angle,
            speed: base_speed + r(8) * 0.5,
            thickness,
            trail_mult,
            color_index: (r(0) * METEOR_COLORS.len() as f64).floor() as usize,
            start_frame: (t * fps).floor() as i64,
            duration: (((base_duration + r(9) * 0.1) * fps).floor() as i64).max(1),
        });

        t += 3.0 + r(10) * 3.0;
        i += 1;
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/procedural/starfield.rs"]
mod tests;
