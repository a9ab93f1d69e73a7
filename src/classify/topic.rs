//! "What is being discussed right now", derived from nearby caption text.
//!
//! Rules live in [`RULES`] and are tried in order; the first rule that matches wins and later
//! rules are never consulted. Within a rule, the most recently spoken match is used.

use serde::Serialize;
use smallvec::SmallVec;

use crate::classify::symbols::names_symbol_subject;
use crate::classify::vocab::{MoonPhase, Planet, Sign, aspect_from_word, tokenize};
use crate::timeline::model::Segment;

/// Seconds of caption context on each side of the current time.
pub const TOPIC_CONTEXT_SECS: f64 = 5.0;

/// Which rule produced a [`Topic`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicKind {
    /// `"<planet> enters <sign>"`.
    PlanetEntersSign,
    /// `"<planet> <aspect> <planet>"`.
    Aspect,
    /// Moon phase, optionally `"... in <sign>"`.
    MoonPhase,
    /// A planet on its own.
    Planet,
    /// A zodiac sign on its own.
    Sign,
    /// Label supplied by the segment rather than derived.
    Custom,
}

/// Classified topic.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Topic {
    /// Rule that matched.
    pub kind: TopicKind,
    /// Short normalized label, e.g. `"saturn enters aries"`.
    pub label: String,
    /// Planets involved, in spoken order.
    pub planets: SmallVec<[Planet; 2]>,
    /// Sign involved, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign: Option<Sign>,
    /// Lunar phase, for [`TopicKind::MoonPhase`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<MoonPhase>,
}

impl Topic {
    fn new(kind: TopicKind, label: String) -> Self {
        Self {
            kind,
            label,
            planets: SmallVec::new(),
            sign: None,
            phase: None,
        }
    }
}

/// Classification rules, highest priority first.
pub const RULES: [TopicKind; 5] = [
    TopicKind::PlanetEntersSign,
    TopicKind::Aspect,
    TopicKind::MoonPhase,
    TopicKind::Planet,
    TopicKind::Sign,
];

impl TopicKind {
    /// Latest match of this rule in `words`.
    fn match_latest(self, words: &[String]) -> Option<Topic> {
        (0..words.len())
            .rev()
            .find_map(|i| self.match_at(&words[i..]))
    }

    /// Match anchored at the first word of `w`.
    fn match_at(self, w: &[String]) -> Option<Topic> {
        let word = |i: usize| w.get(i).map(String::as_str);
        match self {
            Self::PlanetEntersSign => {
                let planet = Planet::from_word(word(0)?)?;
                (word(1)? == "enters").then_some(())?;
                let sign = Sign::from_word(word(2)?)?;
                let mut t = Topic::new(
                    self,
                    format!("{} enters {}", planet.name(), sign.name()),
                );
                t.planets.push(planet);
                t.sign = Some(sign);
                Some(t)
            }
            Self::Aspect => {
                let a = Planet::from_word(word(0)?)?;
                let aspect = aspect_from_word(word(1)?)?;
                let b = Planet::from_word(word(2)?)?;
                let mut t = Topic::new(self, format!("{} {aspect} {}", a.name(), b.name()));
                t.planets.extend([a, b]);
                Some(t)
            }
            Self::MoonPhase => {
                let phase = MoonPhase::from_words(word(0)?, word(1)?)?;
                let [first, second] = phase.words();
                let sign = (word(2) == Some("in"))
                    .then(|| word(3).and_then(Sign::from_word))
                    .flatten();
                let label = match sign {
                    Some(sign) => format!("{first} {second} in {}", sign.name()),
                    None => format!("{first} {second}"),
                };
                let mut t = Topic::new(self, label);
                t.phase = Some(phase);
                t.sign = sign;
                Some(t)
            }
            Self::Planet => {
                let planet = Planet::from_word(word(0)?)?;
                let mut t = Topic::new(self, planet.name().to_owned());
                t.planets.push(planet);
                Some(t)
            }
            Self::Sign => {
                let sign = Sign::from_word(word(0)?)?;
                let mut t = Topic::new(self, sign.name().to_owned());
                t.sign = Some(sign);
                Some(t)
            }
            Self::Custom => None,
        }
    }
}

/// Classify free text. `None` means no topic.
pub fn classify_text(text: &str) -> Option<Topic> {
    let words = tokenize(text);
    RULES.iter().find_map(|rule| rule.match_latest(&words))
}

/// Topic at `time` seconds from segments intersecting `[time - 5 s, time + 5 s]`.
pub fn classify_at(segments: &[Segment], time: f64) -> Option<Topic> {
    let text = context_text(
        segments,
        time - TOPIC_CONTEXT_SECS,
        time + TOPIC_CONTEXT_SECS,
    );
    classify_text(&text)
}

/// Explicit segment topic.
///
/// Labels naming a symbol subject the rules do not cover (elements, rising signs, rankings,
/// planetary phrases) stay custom; others are classified when they name something we know and
/// kept verbatim otherwise.
pub fn topic_from_label(label: &str) -> Option<Topic> {
    let label = label.trim().to_lowercase();
    if label.is_empty() {
        return None;
    }
    if names_symbol_subject(&label) {
        return Some(Topic::new(TopicKind::Custom, label));
    }
    Some(classify_text(&label).unwrap_or_else(|| Topic::new(TopicKind::Custom, label)))
}

/// Lower-cased texts of segments intersecting `[lo, hi]`, in start order, joined by spaces.
pub(crate) fn context_text(segments: &[Segment], lo: f64, hi: f64) -> String {
    let mut hits: Vec<&Segment> = segments
        .iter()
        .filter(|s| s.window().intersects(lo, hi))
        .collect();
    hits.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));
    hits.iter()
        .map(|s| s.text.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "../../tests/unit/classify/topic.rs"]
mod tests;
