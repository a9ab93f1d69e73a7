use crate::assets::table::AssetTable;
use crate::audio::manifest::AudioManifest;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::FramecastResult;
use crate::procedural::starfield::Starfield;
use crate::timeline::model::{BackgroundAnimation, SceneDef};

/// Validated, immutable scene for one rendering job.
///
/// Holds the scene definition, the asset table every worker resolves against, and read-only data
/// derived once from the definition (starfield layout, audio schedule). Nothing here changes after
/// construction, so a `&Scene` can be shared across threads.
#[derive(Clone, Debug)]
pub struct Scene {
    def: SceneDef,
    assets: AssetTable,
    starfield: Option<Starfield>,
    audio: AudioManifest,
}

impl Scene {
    /// Validate `def` and derive the per-job data.
    pub fn new(def: SceneDef, assets: AssetTable) -> FramecastResult<Self> {
        def.validate()?;

        let starfield = (def.background.show_stars
            && def.background.animation == BackgroundAnimation::Starfield)
            .then(|| Starfield::generate(&def.seed, def.duration, def.fps));
        let audio = AudioManifest::build(&def)?;

        tracing::debug!(
            duration = def.duration,
            segments = def.segments.len(),
            zoom_points = def.zoom_points.len(),
            assets = assets.len(),
            "scene constructed"
        );

        Ok(Self {
            def,
            assets,
            starfield,
            audio,
        })
    }

    /// Source definition.
    pub fn def(&self) -> &SceneDef {
        &self.def
    }

    /// Frame rate.
    pub fn fps(&self) -> Fps {
        self.def.fps
    }

    /// Output size.
    pub fn canvas(&self) -> Canvas {
        self.def.canvas
    }

    /// Length in frames.
    pub fn duration_frames(&self) -> u64 {
        self.def.duration
    }

    /// Static asset table.
    pub fn assets(&self) -> &AssetTable {
        &self.assets
    }

    /// Seeded starfield layout, when the background draws one.
    pub fn starfield(&self) -> Option<&Starfield> {
        self.starfield.as_ref()
    }

    /// Audio handoff plan.
    pub fn audio(&self) -> &AudioManifest {
        &self.audio
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/scene.rs"]
mod tests;
