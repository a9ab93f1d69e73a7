use crate::assets::table::normalize_rel_path;
use crate::foundation::clock::to_frame;
use crate::foundation::core::Fps;
use crate::foundation::error::FramecastResult;
use crate::timeline::model::{AudioTrack, SceneDef};

/// Sample rate the external muxer mixes at.
pub const MIX_SAMPLE_RATE: u32 = 48_000;
/// Default music gain relative to the voice.
pub const MUSIC_VOLUME: f64 = 0.15;
/// Music fade-in length.
pub const MUSIC_FADE_IN_SECS: f64 = 0.5;

/// Which track a scheduled entry is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackRole {
    /// Narration.
    Voice,
    /// Background music.
    Music,
}

/// One audio file placed on the timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ScheduledTrack {
    /// Track role.
    pub role: TrackRole,
    /// Normalized relative source path.
    pub source: String,
    /// First audible frame.
    pub start_frame: u64,
    /// One past the last audible frame (clamped to the video).
    pub end_frame: u64,
    /// `start_frame` in samples at [`MIX_SAMPLE_RATE`].
    pub start_sample: u64,
    /// `end_frame` in samples at [`MIX_SAMPLE_RATE`].
    pub end_sample: u64,
    /// Steady-state linear gain.
    pub volume: f64,
    /// Frames of linear fade-in from silence.
    pub fade_in_frames: u64,
}

impl ScheduledTrack {
    /// Gain at `frame`; `None` when the track is silent there.
    pub fn gain_at(&self, frame: u64) -> Option<f64> {
        if frame < self.start_frame || frame >= self.end_frame {
            return None;
        }
        let local = (frame - self.start_frame) as f64;
        let ramp = if self.fade_in_frames == 0 {
            1.0
        } else {
            (local / self.fade_in_frames as f64).min(1.0)
        };
        Some(self.volume * ramp)
    }
}

/// Audio track state at one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct AudioTrackState {
    /// Track role.
    pub role: TrackRole,
    /// Whether the track plays at this frame.
    pub audible: bool,
    /// Linear gain at this frame (0 when silent).
    pub gain: f64,
}

/// Audio handoff plan for the external muxer, built once per job.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AudioManifest {
    /// Mix sample rate.
    pub sample_rate: u32,
    /// Total samples in the video.
    pub total_samples: u64,
    /// Voice first, then music.
    pub tracks: Vec<ScheduledTrack>,
}

impl AudioManifest {
    /// Schedule the scene's voice and music tracks.
    pub fn build(def: &SceneDef) -> FramecastResult<Self> {
        let mut tracks = Vec::new();
        if let Some(voice) = &def.audio.voice {
            tracks.push(schedule(def, voice, TrackRole::Voice, 1.0, 0.0)?);
        }
        if let Some(music) = &def.audio.music {
            tracks.push(schedule(
                def,
                music,
                TrackRole::Music,
                MUSIC_VOLUME,
                MUSIC_FADE_IN_SECS,
            )?);
        }
        Ok(Self {
            sample_rate: MIX_SAMPLE_RATE,
            total_samples: frame_to_sample(def.duration, def.fps, MIX_SAMPLE_RATE),
            tracks,
        })
    }

    /// Per-track state at `frame`.
    pub fn state_at(&self, frame: u64) -> Vec<AudioTrackState> {
        self.tracks
            .iter()
            .map(|t| {
                let gain = t.gain_at(frame);
                AudioTrackState {
                    role: t.role,
                    audible: gain.is_some(),
                    gain: gain.unwrap_or(0.0),
                }
            })
            .collect()
    }
}

fn schedule(
    def: &SceneDef,
    track: &AudioTrack,
    role: TrackRole,
    default_volume: f64,
    fade_in_secs: f64,
) -> FramecastResult<ScheduledTrack> {
    let clamp = |f: i64| u64::try_from(f.max(0)).unwrap_or(0).min(def.duration);
    let start_frame = clamp(to_frame(track.start_time, def.fps));
    let end_frame = match track.duration {
        Some(d) => clamp(to_frame(track.start_time + d, def.fps)),
        None => def.duration,
    }
    .max(start_frame);

    Ok(ScheduledTrack {
        role,
        source: normalize_rel_path(&track.source)?,
        start_frame,
        end_frame,
        start_sample: frame_to_sample(start_frame, def.fps, MIX_SAMPLE_RATE),
        end_sample: frame_to_sample(end_frame, def.fps, MIX_SAMPLE_RATE),
        volume: track.volume.unwrap_or(default_volume),
        fade_in_frames: u64::try_from(to_frame(fade_in_secs, def.fps)).unwrap_or(0),
    })
}

/// Convert a frame count to samples, rounding to nearest.
pub fn frame_to_sample(frames: u64, fps: Fps, sample_rate: u32) -> u64 {
    let num = u128::from(frames) * u128::from(sample_rate) * u128::from(fps.den);
    let den = u128::from(fps.num.max(1));
    ((num + (den / 2)) / den) as u64
}

#[cfg(test)]
#[path = "../../tests/unit/audio/manifest.rs"]
mod tests;
