use crate::assets::table::AssetTable;
use crate::foundation::color::Rgba8;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{FramecastError, FramecastResult};
use crate::timeline::model::{
    AudioTrack, Background, Overlay, OverlayStyle, SceneDef, Segment, SymbolSettings, TapPoint,
    ZoomPoint,
};
use crate::timeline::scene::Scene;

/// Builder for [`Scene`].
pub struct SceneBuilder {
    def: SceneDef,
    assets: AssetTable,
}

impl SceneBuilder {
    /// Start a scene with the given timing basics.
    pub fn new(fps: Fps, canvas: Canvas, duration: u64) -> Self {
        Self {
            def: SceneDef::new(fps, canvas, duration),
            assets: AssetTable::empty(),
        }
    }

    /// Set the procedural seed.
    pub fn seed(mut self, seed: impl Into<String>) -> Self {
        self.def.seed = seed.into();
        self
    }

    /// Set the brand used by the outro detector.
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.def.brand = brand.into();
        self
    }

    /// Append a caption segment.
    pub fn segment(mut self, text: impl Into<String>, start: f64, end: f64) -> Self {
        self.def.segments.push(Segment::new(text, start, end));
        self
    }

    /// Append a caption segment with an explicit topic.
    pub fn segment_with_topic(
        mut self,
        text: impl Into<String>,
        start: f64,
        end: f64,
        topic: impl Into<String>,
    ) -> Self {
        self.def.segments.push(Segment {
            topic: Some(topic.into()),
            ..Segment::new(text, start, end)
        });
        self
    }

    /// Append a zoom window anchored at `(anchor_x, anchor_y)` in `[0, 1]`.
    pub fn zoom(mut self, start: f64, end: f64, scale: f64, anchor_x: f64, anchor_y: f64) -> Self {
        self.def.zoom_points.push(ZoomPoint {
            start_time: start,
            end_time: end,
            scale,
            anchor_x,
            anchor_y,
        });
        self
    }

    /// Append a tap ripple.
    pub fn tap(mut self, time: f64, x: f64, y: f64, color: Option<Rgba8>) -> Self {
        self.def.tap_points.push(TapPoint { time, x, y, color });
        self
    }

    /// Append a text overlay.
    pub fn overlay(
        mut self,
        style: OverlayStyle,
        text: impl Into<String>,
        start: f64,
        end: f64,
    ) -> Self {
        self.def.overlays.push(Overlay {
            text: text.into(),
            start_time: start,
            end_time: end,
            style,
        });
        self
    }

    /// Replace the background settings.
    pub fn background(mut self, background: Background) -> Self {
        self.def.background = background;
        self
    }

    /// Set the narration track; fails if one is already set.
    pub fn voice(mut self, track: AudioTrack) -> FramecastResult<Self> {
        if self.def.audio.voice.is_some() {
            return Err(FramecastError::validation("voice track already set"));
        }
        self.def.audio.voice = Some(track);
        Ok(self)
    }

    /// Set the music track; fails if one is already set.
    pub fn music(mut self, track: AudioTrack) -> FramecastResult<Self> {
        if self.def.audio.music.is_some() {
            return Err(FramecastError::validation("music track already set"));
        }
        self.def.audio.music = Some(track);
        Ok(self)
    }

    /// Replace the symbol overlay settings.
    pub fn symbol(mut self, symbol: SymbolSettings) -> Self {
        self.def.symbol = symbol;
        self
    }

    /// Use `assets` for asset resolution.
    pub fn assets(mut self, assets: AssetTable) -> Self {
        self.assets = assets;
        self
    }

    /// Validated definition without building a scene.
    pub fn build_def(self) -> FramecastResult<SceneDef> {
        self.def.validate()?;
        Ok(self.def)
    }

    /// Build and validate the final [`Scene`].
    pub fn build(self) -> FramecastResult<Scene> {
        Scene::new(self.def, self.assets)
    }
}

/// Audio track at `start_time` with default length and volume.
pub fn audio_track(source: impl Into<String>, start_time: f64) -> AudioTrack {
    AudioTrack {
        source: source.into(),
        start_time,
        duration: None,
        volume: None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/dsl.rs"]
mod tests;
