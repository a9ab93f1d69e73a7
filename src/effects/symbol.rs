//! Large translucent symbols for the current topic.

use smallvec::SmallVec;

use crate::animation::ease::Ease;
use crate::animation::interpolate::{InterpolateOpts, interpolate};
use crate::assets::table::{AssetRef, AssetTable};
use crate::classify::symbols::{Mark, Marks, extract_marks};
use crate::classify::topic::{Topic, TopicKind};
use crate::foundation::color::Rgba8;
use crate::foundation::core::Fps;
use crate::foundation::error::FramecastResult;
use crate::procedural::palette::{aurora_color, pulse_scale};
use crate::timeline::model::SymbolSettings;

/// Font providing the planet and sign glyphs.
pub const SYMBOL_FONT: &str = "fonts/Astronomicon.ttf";
/// Frames over which the overlay fades in at the start of the video.
pub const SYMBOL_FADE_FRAMES: f64 = 30.0;

/// One drawn symbol.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SymbolItem {
    /// Glyph from [`SYMBOL_FONT`].
    Glyph {
        /// Font character.
        ch: char,
        /// Resolved font asset.
        font: AssetRef,
        /// Font size in pixels.
        size_px: u32,
    },
    /// Unicode symbol (elements, modalities, tarot suits) in the system font.
    Unicode {
        /// Character.
        ch: char,
        /// Font size in pixels.
        size_px: u32,
    },
    /// Numerology number in a light monospace face.
    Number {
        /// Value.
        value: u32,
        /// Font size in pixels.
        size_px: u32,
    },
    /// Image asset (moon phases).
    Icon {
        /// Resolved icon asset.
        asset: AssetRef,
        /// Edge length in pixels.
        size_px: u32,
    },
}

/// How the items are arranged around the canvas centre.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolLayout {
    /// One centred item.
    Single,
    /// Two or three items in a row.
    Row,
    /// Four or more items wrapped two per row.
    Grid,
}

impl SymbolLayout {
    fn for_count(count: usize) -> Self {
        match count {
            0 | 1 => Self::Single,
            2 | 3 => Self::Row,
            _ => Self::Grid,
        }
    }

    /// Gap between items in pixels.
    pub fn gap_px(self) -> u32 {
        match self {
            Self::Single => 0,
            Self::Row => 20,
            Self::Grid => 10,
        }
    }

    fn scaled(self, base: u32, row: f64, grid: f64) -> u32 {
        match self {
            Self::Single => base,
            Self::Row => (f64::from(base) * row).round() as u32,
            Self::Grid => (f64::from(base) * grid).round() as u32,
        }
    }
}

/// Symbol overlay sampled at one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SymbolState {
    /// Symbols in drawing order.
    pub items: SmallVec<[SymbolItem; 4]>,
    /// Arrangement of `items`.
    pub layout: SymbolLayout,
    /// Gap between items in pixels.
    pub gap_px: u32,
    /// Opacity after fade-in.
    pub opacity: f64,
    /// Pulse scale.
    pub scale: f64,
    /// Aurora tint.
    pub color: Rgba8,
}

fn marks(topic: &Topic) -> Marks {
    let mut out = Marks::new();
    match topic.kind {
        TopicKind::PlanetEntersSign | TopicKind::Aspect | TopicKind::Planet | TopicKind::Sign => {
            out.extend(topic.planets.iter().map(|p| Mark::Glyph(p.glyph())));
            out.extend(topic.sign.map(|s| Mark::Glyph(s.glyph())));
        }
        TopicKind::MoonPhase => {
            out.extend(topic.phase.map(|p| Mark::Icon(p.icon_path())));
            out.extend(topic.sign.map(|s| Mark::Glyph(s.glyph())));
        }
        TopicKind::Custom => out = extract_marks(&topic.label),
    }
    out
}

/// Symbol overlay for `topic` at `frame`.
///
/// Every referenced asset must be in `assets`; a missing one is an error for this frame.
pub fn symbol_at(
    topic: Option<&Topic>,
    settings: SymbolSettings,
    frame: i64,
    fps: Fps,
    assets: &AssetTable,
) -> FramecastResult<Option<SymbolState>> {
    if !settings.enabled {
        return Ok(None);
    }
    let Some(topic) = topic else {
        return Ok(None);
    };
    let marks = marks(topic);
    if marks.is_empty() {
        return Ok(None);
    }

    let layout = SymbolLayout::for_count(marks.len());
    let text_px = layout.scaled(600, 0.5, 0.35);
    let number_px = layout.scaled(400, 0.5, 0.35);
    let icon_px = layout.scaled(400, 0.6, 0.4);
    let mut items = SmallVec::new();
    for mark in marks {
        items.push(match mark {
            Mark::Glyph(ch) => SymbolItem::Glyph {
                ch,
                font: assets.resolve(SYMBOL_FONT)?,
                size_px: text_px,
            },
            Mark::Unicode(ch) => SymbolItem::Unicode {
                ch,
                size_px: text_px,
            },
            Mark::Number(value) => SymbolItem::Number {
                value,
                size_px: number_px,
            },
            Mark::Icon(path) => SymbolItem::Icon {
                asset: assets.resolve(path)?,
                size_px: icon_px,
            },
        });
    }

    let fade_in = interpolate(
        frame as f64,
        [0.0, SYMBOL_FADE_FRAMES],
        [0.0, 1.0],
        InterpolateOpts::clamped(Ease::InOutCubic),
    );

    Ok(Some(SymbolState {
        items,
        layout,
        gap_px: layout.gap_px(),
        opacity: settings.opacity * fade_in,
        scale: pulse_scale(frame, fps)?,
        color: aurora_color(frame, fps),
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/effects/symbol.rs"]
mod tests;
