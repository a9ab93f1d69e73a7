//! Symbols named by a free-form topic label.
//!
//! Checked in order: [`TOPIC_PHRASES`], ranked signs of a tier list, planets, a few signs,
//! numerology numbers, moon phases, tarot suits. The first step that yields anything wins.

use std::sync::OnceLock;

use regex::Regex;
use smallvec::SmallVec;

use crate::classify::vocab::{MoonPhase, Planet, Sign};

/// Astronomicon glyph for the ascendant.
pub const ASCENDANT_GLYPH: char = 'a';
/// Most signs drawn for a ranking.
pub const MAX_RANKED_SIGNS: usize = 4;
/// Most signs that still read as the focus of a label rather than a list.
pub const MAX_FOCUS_SIGNS: usize = 3;

const FIRE: char = '\u{1F702}';
const EARTH: char = '\u{1F703}';
const AIR: char = '\u{1F701}';
const WATER: char = '\u{1F704}';
const CARDINAL: char = '\u{1F70D}';
const FIXED: char = '\u{1F714}';
const MUTABLE: char = '\u{1F715}';

/// One symbol to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    /// Astronomicon font glyph.
    Glyph(char),
    /// Unicode symbol drawn with the system font.
    Unicode(char),
    /// Numerology number.
    Number(u32),
    /// Icon asset, relative to the asset root.
    Icon(&'static str),
}

/// Marks of one label, in drawing order.
pub type Marks = SmallVec<[Mark; 4]>;

const fn icon(phase: MoonPhase) -> Mark {
    Mark::Icon(phase.icon_path())
}

const fn planet(p: Planet) -> Mark {
    Mark::Glyph(p.glyph())
}

const FIRE_TRIANGLE: &[Mark] = &[
    Mark::Glyph(Sign::Aries.glyph()),
    Mark::Glyph(Sign::Leo.glyph()),
    Mark::Glyph(Sign::Sagittarius.glyph()),
];
const SUN_THEN_RISING: &[Mark] = &[planet(Planet::Sun), Mark::Glyph(ASCENDANT_GLYPH)];
const RISING_THEN_SUN: &[Mark] = &[Mark::Glyph(ASCENDANT_GLYPH), planet(Planet::Sun)];

/// Phrases naming the subject of a video, highest priority first.
///
/// Matched as substrings of the lower-cased label, so longer phrases precede their prefixes.
pub const TOPIC_PHRASES: &[(&str, &[Mark])] = &[
    ("full moon in", &[icon(MoonPhase::FullMoon)]),
    ("new moon in", &[icon(MoonPhase::NewMoon)]),
    ("full moon", &[icon(MoonPhase::FullMoon)]),
    ("new moon", &[icon(MoonPhase::NewMoon)]),
    ("waxing crescent", &[icon(MoonPhase::WaxingCrescent)]),
    ("first quarter", &[icon(MoonPhase::FirstQuarter)]),
    ("waxing gibbous", &[icon(MoonPhase::WaxingGibbous)]),
    ("waning gibbous", &[icon(MoonPhase::WaningGibbous)]),
    ("last quarter", &[icon(MoonPhase::LastQuarter)]),
    ("waning crescent", &[icon(MoonPhase::WaningCrescent)]),
    ("ranking signs", FIRE_TRIANGLE),
    ("ranking the signs", FIRE_TRIANGLE),
    ("rank the signs", FIRE_TRIANGLE),
    ("tier list", FIRE_TRIANGLE),
    ("sun signs vs rising", SUN_THEN_RISING),
    ("sun sign vs rising", SUN_THEN_RISING),
    ("rising signs vs sun", RISING_THEN_SUN),
    ("rising sign vs sun", RISING_THEN_SUN),
    ("sun sign", &[planet(Planet::Sun)]),
    ("rising sign", &[Mark::Glyph(ASCENDANT_GLYPH)]),
    ("ascendant", &[Mark::Glyph(ASCENDANT_GLYPH)]),
    ("cardinal sign", &[Mark::Unicode(CARDINAL)]),
    ("cardinal energy", &[Mark::Unicode(CARDINAL)]),
    ("fixed sign", &[Mark::Unicode(FIXED)]),
    ("fixed energy", &[Mark::Unicode(FIXED)]),
    ("mutable sign", &[Mark::Unicode(MUTABLE)]),
    ("mutable energy", &[Mark::Unicode(MUTABLE)]),
    ("fire sign", &[Mark::Unicode(FIRE)]),
    ("fire element", &[Mark::Unicode(FIRE)]),
    ("earth sign", &[Mark::Unicode(EARTH)]),
    ("earth element", &[Mark::Unicode(EARTH)]),
    ("air sign", &[Mark::Unicode(AIR)]),
    ("air element", &[Mark::Unicode(AIR)]),
    ("water sign", &[Mark::Unicode(WATER)]),
    ("water element", &[Mark::Unicode(WATER)]),
    ("solar return", &[planet(Planet::Sun)]),
    ("moon sign", &[planet(Planet::Moon)]),
    ("lunar", &[planet(Planet::Moon)]),
    ("mercury retrograde", &[planet(Planet::Mercury)]),
    ("mercury return", &[planet(Planet::Mercury)]),
    ("venus retrograde", &[planet(Planet::Venus)]),
    ("venus return", &[planet(Planet::Venus)]),
    ("mars retrograde", &[planet(Planet::Mars)]),
    ("mars return", &[planet(Planet::Mars)]),
    ("jupiter transit", &[planet(Planet::Jupiter)]),
    ("jupiter return", &[planet(Planet::Jupiter)]),
    ("saturn return", &[planet(Planet::Saturn)]),
    ("saturn transit", &[planet(Planet::Saturn)]),
];

/// Tarot suits and their elemental symbols.
pub const TAROT_SUITS: [(&str, char); 4] = [
    ("wands", FIRE),
    ("cups", WATER),
    ("swords", AIR),
    ("pentacles", EARTH),
];

fn tier_regexes() -> &'static [Regex; 2] {
    static TIERS: OnceLock<[Regex; 2]> = OnceLock::new();
    TIERS.get_or_init(|| {
        [
            Regex::new(r"(?i)s tier[:\s]+([^.]+)").expect("s tier regex should compile"),
            Regex::new(r"(?i)a tier[:\s]+([^.]+)").expect("a tier regex should compile"),
        ]
    })
}

fn numerology_regex() -> &'static Regex {
    static NUMEROLOGY: OnceLock<Regex> = OnceLock::new();
    NUMEROLOGY.get_or_init(|| {
        Regex::new(r"(?i)(?:life path|angel number|master number)\s+(\d+)")
            .expect("numerology regex should compile")
    })
}

/// Marks of the first [`TOPIC_PHRASES`] entry contained in `lower`.
fn phrase_marks(lower: &str) -> Option<&'static [Mark]> {
    TOPIC_PHRASES
        .iter()
        .find(|(phrase, _)| lower.contains(phrase))
        .map(|(_, marks)| *marks)
}

/// Signs listed in the S and A tiers of a ranking, in zodiac order.
fn ranked_signs(lower: &str) -> Marks {
    if !(lower.contains("tier") || lower.contains("ranking")) {
        return Marks::new();
    }
    let top: Vec<&str> = tier_regexes()
        .iter()
        .filter_map(|re| re.captures(lower))
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect();
    let top = top.join(" ");
    Sign::ALL
        .into_iter()
        .filter(|s| top.contains(s.name()))
        .take(MAX_RANKED_SIGNS)
        .map(|s| Mark::Glyph(s.glyph()))
        .collect()
}

/// Return `true` when `label` names a subject drawn from the phrase table or a ranking rather
/// than from the topic classifier. Moon phases are left to the classifier.
pub fn names_symbol_subject(label: &str) -> bool {
    let lower = label.to_lowercase();
    let phrase = phrase_marks(&lower)
        .is_some_and(|marks| !marks.iter().any(|m| matches!(m, Mark::Icon(_))));
    phrase || !ranked_signs(&lower).is_empty()
}

/// Marks for `label`; empty when nothing is recognised.
pub fn extract_marks(label: &str) -> Marks {
    let lower = label.to_lowercase();

    if let Some(marks) = phrase_marks(&lower) {
        return marks.iter().copied().collect();
    }

    let ranked = ranked_signs(&lower);
    if !ranked.is_empty() {
        return ranked;
    }

    let planets: Marks = Planet::ALL
        .into_iter()
        .filter(|p| lower.contains(p.name()))
        .map(|p| Mark::Glyph(p.glyph()))
        .collect();
    if !planets.is_empty() {
        return planets;
    }

    let signs: Marks = Sign::ALL
        .into_iter()
        .filter(|s| lower.contains(s.name()))
        .map(|s| Mark::Glyph(s.glyph()))
        .collect();
    if (1..=MAX_FOCUS_SIGNS).contains(&signs.len()) {
        return signs;
    }

    if let Some(n) = numerology_regex()
        .captures(&lower)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
    {
        return Marks::from_iter([Mark::Number(n)]);
    }

    if let Some(phase) = MoonPhase::ALL
        .into_iter()
        .find(|p| lower.contains(&p.words().join(" ")))
    {
        return Marks::from_iter([icon(phase)]);
    }

    TAROT_SUITS
        .iter()
        .find(|(suit, _)| lower.contains(suit))
        .map(|(_, ch)| Marks::from_iter([Mark::Unicode(*ch)]))
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "../../tests/unit/classify/symbols.rs"]
mod tests;
