use crate::eval::state::FrameState;
use crate::foundation::color::Rgba8;
use crate::foundation::core::{FrameIndex, Point};
use xxhash_rust::xxh3::Xxh3;

const XXH3_SEED: u64 = 0x6c1f_3a9e_52d7_b804;

/// Stable fingerprint of what a frame looks and sounds like.
///
/// The frame index and time are excluded, so two frames with identical content share a
/// fingerprint and a rasterizer can reuse the earlier pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FrameFingerprint {
    /// High 64 bits of the digest.
    pub hi: u64,
    /// Low 64 bits of the digest.
    pub lo: u64,
}

/// Fingerprint the visible and audible content of `state`.
pub fn fingerprint_state(state: &FrameState) -> FrameFingerprint {
    let mut h = StableHasher::new();

    let bg = &state.background;
    for c in bg.gradient {
        h.write_color(c);
    }
    h.write_f64(bg.gradient_position);
    h.write_color(bg.tint);
    h.write_u32(bg.stars.len() as u32);
    for s in &bg.stars {
        h.write_point(s.pos);
        h.write_f64(s.size);
        h.write_f64(s.opacity);
        h.write_opt_f64(s.glow);
    }
    h.write_u32(bg.meteors.len() as u32);
    for m in &bg.meteors {
        h.write_point(m.head);
        h.write_point(m.tail);
        h.write_f64(m.thickness);
        h.write_f64(m.intensity);
        h.write_opt_f64(m.head_glow);
        h.write_color(m.head_color);
        h.write_color(m.tail_color);
    }

    h.write_f64(state.zoom.scale);
    h.write_point(state.zoom.anchor);

    match &state.caption {
        Some(c) => {
            h.write_u8(1);
            h.write_str(&c.text);
            h.write_u64(c.active_word.map_or(u64::MAX, |w| w as u64));
        }
        None => h.write_u8(0),
    }

    match &state.symbol {
        Some(s) => {
            h.write_u8(1);
            h.write_str(state.topic.as_ref().map_or("", |t| t.label.as_str()));
            h.write_u32(s.items.len() as u32);
            h.write_f64(s.opacity);
            h.write_f64(s.scale);
            h.write_color(s.color);
        }
        None => h.write_u8(0),
    }

    h.write_bool(state.outro);

    h.write_u32(state.overlays.len() as u32);
    for o in &state.overlays {
        h.write_str(&o.text);
        h.write_u8(o.style as u8);
        h.write_f64(o.opacity);
    }

    h.write_u32(state.ripples.len() as u32);
    for r in &state.ripples {
        h.write_point(r.center);
        h.write_f64(r.radius_scale);
        h.write_f64(r.opacity);
        h.write_color(r.color);
        h.write_bool(r.inner_dot);
    }

    h.write_u32(state.audio.len() as u32);
    for a in &state.audio {
        h.write_bool(a.audible);
        h.write_f64(a.gain);
    }

    h.finish()
}

/// Order-sensitive digest of a whole render, frame index included.
pub(crate) struct RunDigest {
    h: StableHasher,
}

impl RunDigest {
    pub(crate) fn new() -> Self {
        Self {
            h: StableHasher::new(),
        }
    }

    pub(crate) fn push(&mut self, frame: FrameIndex, fp: FrameFingerprint) {
        self.h.write_u64(frame.0);
        self.h.write_u64(fp.hi);
        self.h.write_u64(fp.lo);
    }

    pub(crate) fn finish(self) -> FrameFingerprint {
        self.h.finish()
    }
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_opt_f64(&mut self, v: Option<f64>) {
        match v {
            Some(v) => {
                self.write_u8(1);
                self.write_f64(v);
            }
            None => self.write_u8(0),
        }
    }

    fn write_str(&mut self, s: &str) {
        self.write_u32(s.len() as u32);
        self.write_bytes(s.as_bytes());
    }

    fn write_point(&mut self, p: Point) {
        self.write_f64(p.x);
        self.write_f64(p.y);
    }

    fn write_color(&mut self, c: Rgba8) {
        self.write_bytes(&[c.r, c.g, c.b, c.a]);
    }

    fn finish(self) -> FrameFingerprint {
        let v = self.inner.digest128();
        FrameFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/fingerprint.rs"]
mod tests;
