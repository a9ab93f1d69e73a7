use crate::audio::manifest::AudioTrackState;
use crate::captions::active::CaptionState;
use crate::classify::topic::Topic;
use crate::effects::overlay::OverlayState;
use crate::effects::ripple::RippleState;
use crate::effects::symbol::SymbolState;
use crate::foundation::color::Rgba8;
use crate::foundation::core::FrameIndex;
use crate::procedural::starfield::{MeteorState, StarState};
use crate::zoom::scheduler::ZoomTransform;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Complete visual and audio description of one frame.
pub struct FrameState {
    /// Evaluated frame index.
    pub frame: FrameIndex,
    /// Frame time in seconds.
    pub time: f64,
    /// Procedural background.
    pub background: BackgroundState,
    /// Zoom/pan transform applied to the content layer.
    pub zoom: ZoomTransform,
    /// Caption with karaoke highlight.
    pub caption: Option<CaptionState>,
    /// Topic currently being discussed.
    pub topic: Option<Topic>,
    /// Topic symbol overlay.
    pub symbol: Option<SymbolState>,
    /// Call-to-action state.
    pub outro: bool,
    /// Visible text overlays in scene order.
    pub overlays: Vec<OverlayState>,
    /// Live tap ripples in scene order.
    pub ripples: Vec<RippleState>,
    /// Audio track states, voice first.
    pub audio: Vec<AudioTrackState>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Background layer of one frame.
pub struct BackgroundState {
    /// Radial gradient `[dark, mid]`.
    pub gradient: [Rgba8; 2],
    /// Gradient centre on both axes, in percent.
    pub gradient_position: f64,
    /// Star colour.
    pub tint: Rgba8,
    /// Twinkling stars (empty without a starfield).
    pub stars: Vec<StarState>,
    /// Visible shooting stars.
    pub meteors: Vec<MeteorState>,
}
