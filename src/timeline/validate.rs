use std::fmt;

use crate::assets::table::normalize_rel_path;
use crate::timeline::model::{AudioTrack, SceneDef};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PathElem {
    Field(&'static str),
    Index(usize),
}

/// One violated invariant, located by a JSON-style path.
#[derive(Debug, Clone)]
pub(crate) struct SceneError {
    pub(crate) path: Vec<PathElem>,
    pub(crate) message: String,
}

impl SceneError {
    fn at(path: &[PathElem], message: impl Into<String>) -> Self {
        Self {
            path: path.to_vec(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return write!(f, "{}", self.message);
        }
        write!(f, "{}: {}", format_path(&self.path), self.message)
    }
}

fn format_path(path: &[PathElem]) -> String {
    let mut s = String::from("$");
    for p in path {
        match *p {
            PathElem::Field(name) => {
                s.push('.');
                s.push_str(name);
            }
            PathElem::Index(i) => {
                s.push('[');
                s.push_str(&i.to_string());
                s.push(']');
            }
        }
    }
    s
}

/// Every invariant violation found in one scene.
#[derive(Debug, Clone)]
pub(crate) struct SceneErrors {
    pub(crate) errors: Vec<SceneError>,
}

impl fmt::Display for SceneErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SceneErrors {}

/// Check every timeline invariant of `def`, collecting all violations.
pub(crate) fn validate_scene(def: &SceneDef) -> Result<(), SceneErrors> {
    let mut errors = Vec::new();

    if def.fps.num == 0 || def.fps.den == 0 {
        errors.push(SceneError::at(
            &[PathElem::Field("fps")],
            "fps num and den must be > 0",
        ));
    }
    if def.canvas.width == 0 || def.canvas.height == 0 {
        errors.push(SceneError::at(
            &[PathElem::Field("canvas")],
            "canvas width and height must be > 0",
        ));
    }
    if def.duration == 0 {
        errors.push(SceneError::at(
            &[PathElem::Field("duration")],
            "duration must be > 0 frames",
        ));
    }

    for (i, seg) in def.segments.iter().enumerate() {
        let path = [PathElem::Field("segments"), PathElem::Index(i)];
        check_window(&path, seg.start_time, seg.end_time, &mut errors);
    }

    validate_zoom_points(def, &mut errors);

    for (i, tap) in def.tap_points.iter().enumerate() {
        let path = [PathElem::Field("tap_points"), PathElem::Index(i)];
        if !tap.time.is_finite() {
            errors.push(SceneError::at(&path, "time must be finite"));
        }
        check_unit(&path, "x", tap.x, &mut errors);
        check_unit(&path, "y", tap.y, &mut errors);
    }

    for (i, overlay) in def.overlays.iter().enumerate() {
        let path = [PathElem::Field("overlays"), PathElem::Index(i)];
        check_window(&path, overlay.start_time, overlay.end_time, &mut errors);
    }

    if let Some(voice) = &def.audio.voice {
        validate_track(&[PathElem::Field("audio"), PathElem::Field("voice")], voice, &mut errors);
    }
    if let Some(music) = &def.audio.music {
        validate_track(&[PathElem::Field("audio"), PathElem::Field("music")], music, &mut errors);
    }

    check_unit(
        &[PathElem::Field("symbol")],
        "opacity",
        def.symbol.opacity,
        &mut errors,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SceneErrors { errors })
    }
}

fn check_window(path: &[PathElem], start: f64, end: f64, errors: &mut Vec<SceneError>) {
    if !start.is_finite() || !end.is_finite() {
        errors.push(SceneError::at(path, "start_time and end_time must be finite"));
    } else if start >= end {
        errors.push(SceneError::at(
            path,
            format!("start_time ({start}) must be < end_time ({end})"),
        ));
    }
}

fn check_unit(path: &[PathElem], name: &str, v: f64, errors: &mut Vec<SceneError>) {
    if !(0.0..=1.0).contains(&v) {
        errors.push(SceneError::at(path, format!("{name} must be in [0, 1], got {v}")));
    }
}

fn validate_zoom_points(def: &SceneDef, errors: &mut Vec<SceneError>) {
    for (i, zp) in def.zoom_points.iter().enumerate() {
        let path = [PathElem::Field("zoom_points"), PathElem::Index(i)];
        check_window(&path, zp.start_time, zp.end_time, errors);
        if !zp.scale.is_finite() || zp.scale < 1.0 {
            errors.push(SceneError::at(
                &path,
                format!("scale must be finite and >= 1, got {}", zp.scale),
            ));
        }
        check_unit(&path, "anchor_x", zp.anchor_x, errors);
        check_unit(&path, "anchor_y", zp.anchor_y, errors);
    }

    // Ambiguous precedence between windows is a caller error.
    for (j, b) in def.zoom_points.iter().enumerate() {
        for (i, a) in def.zoom_points[..j].iter().enumerate() {
            if a.start_time < b.end_time && b.start_time < a.end_time {
                errors.push(SceneError::at(
                    &[PathElem::Field("zoom_points"), PathElem::Index(j)],
                    format!(
                        "window [{}, {}) overlaps zoom_points[{i}] [{}, {})",
                        b.start_time, b.end_time, a.start_time, a.end_time
                    ),
                ));
            }
        }
    }
}

fn validate_track(path: &[PathElem], track: &AudioTrack, errors: &mut Vec<SceneError>) {
    if let Err(e) = normalize_rel_path(&track.source) {
        errors.push(SceneError::at(path, format!("source: {e}")));
    }
    if !track.start_time.is_finite() || track.start_time < 0.0 {
        errors.push(SceneError::at(path, "start_time must be finite and >= 0"));
    }
    if let Some(d) = track.duration
        && !(d.is_finite() && d > 0.0)
    {
        errors.push(SceneError::at(path, "duration must be finite and > 0"));
    }
    if let Some(v) = track.volume
        && !(v.is_finite() && v >= 0.0)
    {
        errors.push(SceneError::at(path, "volume must be finite and >= 0"));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/validate.rs"]
mod tests;
