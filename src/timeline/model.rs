use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::clock::TimeWindow;
use crate::foundation::color::Rgba8;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{FramecastError, FramecastResult};

/// JSON boundary object for one video.
///
/// Parsed from upstream content-generation output, validated once, then turned into an immutable
/// [`Scene`](crate::Scene).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDef {
    /// Frame rate.
    pub fps: Fps,
    /// Output size in pixels.
    pub canvas: Canvas,
    /// Length of the video in frames.
    pub duration: u64,
    /// Seed for procedural background variation.
    #[serde(default = "default_seed")]
    pub seed: String,
    /// Brand name, used by the outro detector (`"visit <brand>"`).
    #[serde(default = "default_brand")]
    pub brand: String,
    /// Caption segments.
    #[serde(default)]
    pub segments: Vec<Segment>,
    /// Zoom windows; must not overlap.
    #[serde(default)]
    pub zoom_points: Vec<ZoomPoint>,
    /// Tap ripples.
    #[serde(default)]
    pub tap_points: Vec<TapPoint>,
    /// Text overlays.
    #[serde(default)]
    pub overlays: Vec<Overlay>,
    /// Procedural background.
    #[serde(default)]
    pub background: Background,
    /// Voice and music tracks.
    #[serde(default)]
    pub audio: AudioTracks,
    /// Topic symbol overlay.
    #[serde(default)]
    pub symbol: SymbolSettings,
}

fn default_seed() -> String {
    "default".to_owned()
}

fn default_brand() -> String {
    "lunary".to_owned()
}

impl SceneDef {
    /// Minimal scene with defaults for everything but the timing basics.
    pub fn new(fps: Fps, canvas: Canvas, duration: u64) -> Self {
        Self {
            fps,
            canvas,
            duration,
            seed: default_seed(),
            brand: default_brand(),
            segments: Vec::new(),
            zoom_points: Vec::new(),
            tap_points: Vec::new(),
            overlays: Vec::new(),
            background: Background::default(),
            audio: AudioTracks::default(),
            symbol: SymbolSettings::default(),
        }
    }

    /// Parse a scene from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FramecastResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FramecastError::serde(format!("parse scene JSON: {e}")))
    }

    /// Parse a scene from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FramecastResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FramecastError::validation(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check every timeline invariant, reporting all violations at once.
    pub fn validate(&self) -> FramecastResult<()> {
        crate::timeline::validate::validate_scene(self)
            .map_err(|e| FramecastError::validation(format!("scene validation failed: {e}")))
    }
}

/// Time-bounded unit of captioned speech.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Spoken text.
    pub text: String,
    /// Start in seconds.
    pub start_time: f64,
    /// End in seconds (exclusive).
    pub end_time: f64,
    /// Topic label that overrides the classifier while this caption is shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

impl Segment {
    /// Segment without an explicit topic.
    pub fn new(text: impl Into<String>, start_time: f64, end_time: f64) -> Self {
        Self {
            text: text.into(),
            start_time,
            end_time,
            topic: None,
        }
    }

    /// Time span covered by this segment.
    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.start_time, self.end_time)
    }
}

/// Zoom window: spring in, hold, ease out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomPoint {
    /// Start in seconds.
    pub start_time: f64,
    /// End in seconds (exclusive).
    pub end_time: f64,
    /// Target scale (>= 1).
    pub scale: f64,
    /// Horizontal anchor in `[0, 1]`.
    #[serde(default = "half")]
    pub anchor_x: f64,
    /// Vertical anchor in `[0, 1]`.
    #[serde(default = "half")]
    pub anchor_y: f64,
}

fn half() -> f64 {
    0.5
}

impl ZoomPoint {
    /// Time span covered by this window.
    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.start_time, self.end_time)
    }
}

/// Touch indicator at a normalized canvas position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TapPoint {
    /// Moment of the tap in seconds.
    pub time: f64,
    /// Horizontal position in `[0, 1]`.
    pub x: f64,
    /// Vertical position in `[0, 1]`.
    pub y: f64,
    /// Ripple colour; white when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgba8>,
}

/// Styled text shown for a time window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overlay {
    /// Displayed text.
    pub text: String,
    /// Start in seconds.
    pub start_time: f64,
    /// End in seconds (exclusive).
    pub end_time: f64,
    /// Layout preset.
    pub style: OverlayStyle,
}

impl Overlay {
    /// Time span covered by this overlay.
    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.start_time, self.end_time)
    }
}

/// Layout preset for an [`Overlay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayStyle {
    /// Large opening line near the top.
    Hook,
    /// Call to action near the bottom.
    Cta,
    /// Small boxed label in the top-right corner.
    Stamp,
    /// Section title below centre.
    Chapter,
}

/// Procedural background settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Background {
    /// Draw the animated layer.
    #[serde(default)]
    pub show_stars: bool,
    /// Which animated layer to draw.
    #[serde(default)]
    pub animation: BackgroundAnimation,
    /// Gradient `[dark, mid]` override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient_colors: Option<[Rgba8; 2]>,
    /// Star tint; white when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tint: Option<Rgba8>,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            show_stars: false,
            animation: BackgroundAnimation::Starfield,
            gradient_colors: None,
            tint: None,
        }
    }
}

/// Animated background layer kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundAnimation {
    /// Twinkling stars and shooting stars.
    #[default]
    Starfield,
    /// Gradient only.
    None,
}

/// Audio tracks handed to the external muxer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioTracks {
    /// Narration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<AudioTrack>,
    /// Background music.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music: Option<AudioTrack>,
}

/// One externally rendered audio file placed on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioTrack {
    /// Relative path into the asset root.
    pub source: String,
    /// Offset on the timeline in seconds.
    #[serde(default)]
    pub start_time: f64,
    /// Playback length in seconds; runs to the end of the video when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Linear gain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

/// Topic symbol overlay settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SymbolSettings {
    /// Show the overlay when a topic is detected.
    #[serde(default = "yes")]
    pub enabled: bool,
    /// Peak opacity in `[0, 1]`.
    #[serde(default = "default_symbol_opacity")]
    pub opacity: f64,
}

fn yes() -> bool {
    true
}

fn default_symbol_opacity() -> f64 {
    0.25
}

impl Default for SymbolSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            opacity: default_symbol_opacity(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/model.rs"]
mod tests;
