use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::assets::table::AssetTable;
use crate::eval::evaluator::Evaluator;
use crate::eval::state::FrameState;
use crate::foundation::core::{Canvas, Fps, FrameIndex};
use crate::foundation::error::{FramecastError, FramecastResult};
use crate::timeline::model::SceneDef;
use crate::timeline::scene::Scene;

/// A named, renderable composition.
///
/// `default_props` is a JSON object holding any [`SceneDef`] fields except `fps`, `canvas` and
/// `duration`, which always come from this struct.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompositionSpec {
    /// Registry key.
    pub id: String,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Frame rate.
    pub fps: Fps,
    /// Length in frames.
    pub duration_in_frames: u64,
    /// Scene fields used when a request does not override them.
    #[serde(default = "empty_object")]
    pub default_props: Value,
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

/// Composition id plus the canonical JSON of its merged props.
type PreparedKey = (String, String);

/// Compositions by id, sharing one asset table.
///
/// Scenes are prepared once per `(id, props)` and reused by every later frame request.
#[derive(Debug, Default)]
pub struct CompositionRegistry {
    specs: BTreeMap<String, CompositionSpec>,
    assets: AssetTable,
    prepared: Mutex<HashMap<PreparedKey, Arc<Scene>>>,
}

impl CompositionRegistry {
    /// Empty registry resolving assets against `assets`.
    pub fn new(assets: AssetTable) -> Self {
        Self {
            specs: BTreeMap::new(),
            assets,
            prepared: Mutex::new(HashMap::new()),
        }
    }

    /// Add a composition; ids must be unique.
    pub fn register(&mut self, spec: CompositionSpec) -> FramecastResult<()> {
        if spec.id.trim().is_empty() {
            return Err(FramecastError::validation("composition id must be non-empty"));
        }
        if spec.width == 0 || spec.height == 0 {
            return Err(FramecastError::validation(format!(
                "composition '{}': width/height must be > 0",
                spec.id
            )));
        }
        if spec.duration_in_frames == 0 {
            return Err(FramecastError::validation(format!(
                "composition '{}': duration_in_frames must be > 0",
                spec.id
            )));
        }
        Fps::new(spec.fps.num, spec.fps.den)?;
        if !spec.default_props.is_object() {
            return Err(FramecastError::validation(format!(
                "composition '{}': default_props must be a JSON object",
                spec.id
            )));
        }
        if self.specs.contains_key(&spec.id) {
            return Err(FramecastError::validation(format!(
                "composition '{}' is already registered",
                spec.id
            )));
        }
        tracing::debug!(id = %spec.id, "composition registered");
        self.specs.insert(spec.id.clone(), spec);
        Ok(())
    }

    /// Look up a composition.
    pub fn get(&self, id: &str) -> Option<&CompositionSpec> {
        self.specs.get(id)
    }

    /// Registered ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.specs.keys().map(String::as_str)
    }

    /// Number of registered compositions.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Return `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Build a fresh scene for `id` with `props` shallow-merged over the defaults.
    ///
    /// `props` may be `null` (defaults only) or an object; each top-level key replaces the default
    /// wholesale.
    pub fn scene(&self, id: &str, props: &Value) -> FramecastResult<Scene> {
        let spec = self.spec(id)?;
        let merged = merge_props(&spec.default_props, props)?;
        Scene::new(scene_def(spec, merged)?, self.assets.clone())
    }

    /// Scene for `id` with `props`, validated and derived on first use only.
    pub fn prepare(&self, id: &str, props: &Value) -> FramecastResult<Arc<Scene>> {
        let spec = self.spec(id)?;
        let merged = merge_props(&spec.default_props, props)?;
        let key = (
            id.to_owned(),
            serde_json::to_string(&merged).map_err(|e| FramecastError::serde(e.to_string()))?,
        );
        if let Some(scene) = self.lock_prepared().get(&key) {
            return Ok(Arc::clone(scene));
        }

        let scene = Arc::new(Scene::new(scene_def(spec, merged)?, self.assets.clone())?);
        tracing::debug!(id, "composition scene prepared");
        Ok(Arc::clone(self.lock_prepared().entry(key).or_insert(scene)))
    }

    /// Number of prepared scenes held.
    pub fn prepared_len(&self) -> usize {
        self.lock_prepared().len()
    }

    /// Drop every prepared scene.
    pub fn clear_prepared(&self) {
        self.lock_prepared().clear();
    }

    /// Evaluate one frame of `id` with `props` against its prepared scene.
    #[tracing::instrument(skip(self, props))]
    pub fn render(&self, id: &str, frame: FrameIndex, props: &Value) -> FramecastResult<FrameState> {
        let scene = self.prepare(id, props)?;
        Evaluator::eval_frame(&scene, frame)
    }

    fn spec(&self, id: &str) -> FramecastResult<&CompositionSpec> {
        self.get(id)
            .ok_or_else(|| FramecastError::validation(format!("unknown composition '{id}'")))
    }

    // Entries are only ever inserted whole, so a poisoned map is still consistent.
    fn lock_prepared(&self) -> std::sync::MutexGuard<'_, HashMap<PreparedKey, Arc<Scene>>> {
        self.prepared.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Shallow merge: top-level keys of `props` replace those of `defaults`.
pub fn merge_props(defaults: &Value, props: &Value) -> FramecastResult<Map<String, Value>> {
    let mut out = match defaults {
        Value::Object(m) => m.clone(),
        _ => {
            return Err(FramecastError::validation(
                "default_props must be a JSON object",
            ));
        }
    };
    match props {
        Value::Null => {}
        Value::Object(m) => {
            for (k, v) in m {
                out.insert(k.clone(), v.clone());
            }
        }
        _ => return Err(FramecastError::validation("props must be a JSON object")),
    }
    Ok(out)
}

fn scene_def(spec: &CompositionSpec, mut props: Map<String, Value>) -> FramecastResult<SceneDef> {
    let canvas = Canvas {
        width: spec.width,
        height: spec.height,
    };
    let fixed = [
        ("fps", serde_json::to_value(spec.fps)),
        ("canvas", serde_json::to_value(canvas)),
        ("duration", serde_json::to_value(spec.duration_in_frames)),
    ];
    for (key, value) in fixed {
        let value = value.map_err(|e| FramecastError::serde(e.to_string()))?;
        props.insert(key.to_owned(), value);
    }
    serde_json::from_value(Value::Object(props)).map_err(|e| {
        FramecastError::serde(format!("composition '{}': invalid props: {e}", spec.id))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/registry/composition.rs"]
mod tests;
