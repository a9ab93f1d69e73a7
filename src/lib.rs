//! framecast is a frame-deterministic composition engine for short-form marketing video.
//!
//! A [`Scene`] holds the timeline (captions, zoom windows, overlays, tap ripples, procedural
//! background, audio tracks). [`Evaluator::eval_frame`] turns any frame index into a complete
//! [`FrameState`] without looking at any other frame, so frames can be evaluated out of order and
//! on many workers:
//!
//! - Parse and validate a [`SceneDef`] (or build one with [`SceneBuilder`])
//! - Create a [`RenderSession`]
//! - Evaluate single frames or stream a range into a [`FrameSink`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod assets;
pub(crate) mod audio;
pub(crate) mod captions;
pub(crate) mod classify;
pub(crate) mod effects;
pub(crate) mod eval;
pub(crate) mod procedural;
pub(crate) mod registry;
pub(crate) mod render;
pub(crate) mod session;
pub(crate) mod timeline;
pub(crate) mod zoom;

pub use crate::foundation::clock::{FrameSpan, TimeWindow, frame_time, to_frame, to_seconds};
pub use crate::foundation::color::Rgba8;
pub use crate::foundation::core::{Affine, Canvas, Fps, FrameIndex, FrameRange, Point, Vec2};
pub use crate::foundation::error::{FramecastError, FramecastResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::interpolate::{
    Extrapolate, InterpolateOpts, interpolate, interpolate_piecewise,
};
pub use crate::animation::spring::{SpringConfig, spring};

pub use crate::procedural::palette::{
    AURORA, AURORA_PERIOD_SECS, COSMIC_BLACK, DEEP_PURPLE, PULSE_PERIOD_SECS, aurora_color,
    gradient_position, pulse_scale,
};
pub use crate::procedural::prng::{SeedHash, prng, seed_numeric, seeded_random};
pub use crate::procedural::starfield::{
    METEOR_COLORS, Meteor, MeteorState, STAR_COUNT, StarSeed, StarState, Starfield,
};

pub use crate::timeline::dsl::{SceneBuilder, audio_track};
pub use crate::timeline::model::{
    AudioTrack, AudioTracks, Background, BackgroundAnimation, Overlay, OverlayStyle, SceneDef,
    Segment, SymbolSettings, TapPoint, ZoomPoint,
};
pub use crate::timeline::scene::Scene;

pub use crate::assets::table::{AssetRef, AssetTable, normalize_rel_path};

pub use crate::captions::active::{CaptionState, active_segment, caption_at};
pub use crate::captions::words::{
    WORD_LAG_SECS, WORD_LEAD_SECS, WordTiming, active_word, split_word_timings,
};

pub use crate::classify::outro::{OUTRO_CUES, OUTRO_LOOKBACK_SECS, OutroCue, is_outro};
pub use crate::classify::symbols::{
    ASCENDANT_GLYPH, MAX_FOCUS_SIGNS, MAX_RANKED_SIGNS, Mark, Marks, TAROT_SUITS, TOPIC_PHRASES,
    extract_marks, names_symbol_subject,
};
pub use crate::classify::topic::{
    RULES, TOPIC_CONTEXT_SECS, Topic, TopicKind, classify_at, classify_text, topic_from_label,
};
pub use crate::classify::vocab::{ASPECTS, MoonPhase, Planet, Sign, aspect_from_word, tokenize};

pub use crate::zoom::scheduler::{
    ZOOM_IN_SECS, ZOOM_OUT_SECS, ZOOM_SPRING, ZoomTransform, zoom_at,
};

pub use crate::effects::overlay::{
    OVERLAY_FADE_SECS, OverlayLayout, OverlayState, TextAlign, overlays_at,
};
pub use crate::effects::ripple::{INNER_DOT_UNTIL, RIPPLE_SECS, RippleState, ripples_at};
pub use crate::effects::symbol::{
    SYMBOL_FADE_FRAMES, SYMBOL_FONT, SymbolItem, SymbolLayout, SymbolState, symbol_at,
};

pub use crate::audio::manifest::{
    AudioManifest, AudioTrackState, MIX_SAMPLE_RATE, MUSIC_FADE_IN_SECS, MUSIC_VOLUME,
    ScheduledTrack, TrackRole, frame_to_sample,
};

pub use crate::eval::evaluator::Evaluator;
pub use crate::eval::state::{BackgroundState, FrameState};

pub use crate::render::fingerprint::{FrameFingerprint, fingerprint_state};
pub use crate::render::pipeline::{
    RenderStats, RenderThreading, render_frame_set, render_frames, render_range,
};
pub use crate::render::pool::WorkerPool;
pub use crate::render::sink::{FrameSink, InMemorySink, JsonLinesSink, SinkConfig};

pub use crate::registry::composition::{CompositionRegistry, CompositionSpec, merge_props};
pub use crate::session::render_session::{RenderSession, RenderSessionOpts};
