use crate::animation::interpolate::{InterpolateOpts, interpolate};
use crate::foundation::clock::to_frame;
use crate::foundation::core::{Fps, Point};
use crate::timeline::model::{Overlay, OverlayStyle};

/// Fade length at both ends of an overlay.
pub const OVERLAY_FADE_SECS: f64 = 0.2;

/// Horizontal text alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    /// Centred on the anchor.
    Center,
    /// Right edge on the anchor.
    End,
}

/// Fixed layout of an [`OverlayStyle`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct OverlayLayout {
    /// Font size in pixels.
    pub font_px: u32,
    /// Horizontal alignment.
    pub align: TextAlign,
    /// Anchor position as fractions of the canvas.
    pub anchor: Point,
    /// Drawn on a filled box.
    pub boxed: bool,
}

impl OverlayStyle {
    /// Layout preset for this style.
    pub fn layout(self) -> OverlayLayout {
        let (font_px, align, x, y, boxed) = match self {
            Self::Hook => (64, TextAlign::Center, 0.5, 0.16, false),
            Self::Cta => (56, TextAlign::Center, 0.5, 0.78, false),
            Self::Stamp => (38, TextAlign::End, 0.95, 0.05, true),
            Self::Chapter => (44, TextAlign::Center, 0.5, 0.69, false),
        };
        OverlayLayout {
            font_px,
            align,
            anchor: Point::new(x, y),
            boxed,
        }
    }
}

/// Text overlay sampled at one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct OverlayState {
    /// Index of the overlay in the scene.
    pub overlay: usize,
    /// Displayed text.
    pub text: String,
    /// Style preset.
    pub style: OverlayStyle,
    /// Resolved layout.
    pub layout: OverlayLayout,
    /// Fade opacity in `[0, 1]`.
    pub opacity: f64,
}

/// Every overlay visible at `frame`, in scene order.
pub fn overlays_at(overlays: &[Overlay], frame: i64, fps: Fps) -> Vec<OverlayState> {
    let fade = to_frame(OVERLAY_FADE_SECS, fps).max(1) as f64;
    overlays
        .iter()
        .enumerate()
        .filter_map(|(i, ov)| {
            let span = ov.window().frames(fps);
            if !span.contains(frame) {
                return None;
            }
            // Edge frames count as one fade step so even one-frame overlays show.
            let from_start = (frame - span.start + 1) as f64;
            let to_end = (span.end - frame) as f64;
            let opts = InterpolateOpts::default();
            let opacity = interpolate(from_start, [0.0, fade], [0.0, 1.0], opts)
                .min(interpolate(to_end, [0.0, fade], [0.0, 1.0], opts));
            Some(OverlayState {
                overlay: i,
                text: ov.text.clone(),
                style: ov.style,
                layout: ov.style.layout(),
                opacity,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/effects/overlay.rs"]
mod tests;
