use crate::classify::topic::context_text;
use crate::classify::vocab::tokenize;
use crate::timeline::model::Segment;

/// Seconds of caption history scanned for a call to action.
pub const OUTRO_LOOKBACK_SECS: f64 = 2.0;

/// One call-to-action cue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutroCue {
    /// Fixed phrase, matched on whole words.
    Phrase(&'static str),
    /// `"visit <brand>"` for the scene's brand.
    VisitBrand,
}

/// Cues that switch a frame into the call-to-action state.
pub const OUTRO_CUES: [OutroCue; 6] = [
    OutroCue::Phrase("subscribe"),
    OutroCue::Phrase("follow for more"),
    OutroCue::Phrase("learn more"),
    OutroCue::Phrase("link in bio"),
    OutroCue::Phrase("save this"),
    OutroCue::VisitBrand,
];

impl OutroCue {
    fn matches(self, padded: &str, brand: &str) -> bool {
        let phrase = match self {
            Self::Phrase(p) => p.to_owned(),
            Self::VisitBrand => {
                let brand = tokenize(brand).join(" ");
                if brand.is_empty() {
                    return false;
                }
                format!("visit {brand}")
            }
        };
        padded.contains(&format!(" {phrase} "))
    }
}

/// Return `true` when any cue was spoken in `[time - 2 s, time]`.
pub fn is_outro(segments: &[Segment], time: f64, brand: &str) -> bool {
    let text = context_text(segments, time - OUTRO_LOOKBACK_SECS, time);
    let padded = format!(" {} ", tokenize(&text).join(" "));
    OUTRO_CUES.iter().any(|cue| cue.matches(&padded, brand))
}

#[cfg(test)]
#[path = "../../tests/unit/classify/outro.rs"]
mod tests;
