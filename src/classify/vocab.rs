//! Astrology vocabulary recognised by the classifier and drawn by the symbol overlay.

use serde::Serialize;

/// Lower-cased alphanumeric words of `text`, in order.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Classical planets plus the luminaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Planet {
    /// Every planet, in traditional order.
    pub const ALL: [Planet; 10] = [
        Planet::Sun,
        Planet::Moon,
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
        Planet::Pluto,
    ];

    /// Lower-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Mercury => "mercury",
            Self::Venus => "venus",
            Self::Mars => "mars",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
            Self::Uranus => "uranus",
            Self::Neptune => "neptune",
            Self::Pluto => "pluto",
        }
    }

    /// Astronomicon font glyph.
    pub const fn glyph(self) -> char {
        match self {
            Self::Sun => 'Q',
            Self::Moon => 'R',
            Self::Mercury => 'S',
            Self::Venus => 'T',
            Self::Mars => 'U',
            Self::Jupiter => 'V',
            Self::Saturn => 'W',
            Self::Uranus => 'X',
            Self::Neptune => 'Y',
            Self::Pluto => 'Z',
        }
    }

    /// Planet named by a single lower-case word.
    pub fn from_word(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == word)
    }
}

/// Zodiac signs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Sign {
    /// Every sign, in zodiac order.
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    /// Lower-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Aries => "aries",
            Self::Taurus => "taurus",
            Self::Gemini => "gemini",
            Self::Cancer => "cancer",
            Self::Leo => "leo",
            Self::Virgo => "virgo",
            Self::Libra => "libra",
            Self::Scorpio => "scorpio",
            Self::Sagittarius => "sagittarius",
            Self::Capricorn => "capricorn",
            Self::Aquarius => "aquarius",
            Self::Pisces => "pisces",
        }
    }

    /// Astronomicon font glyph (`A` for aries through `L` for pisces).
    pub const fn glyph(self) -> char {
        (b'A' + self as u8) as char
    }

    /// Sign named by a single lower-case word.
    pub fn from_word(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == word)
    }
}

/// Two-word lunar phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    /// Every phase, in lunation order.
    pub const ALL: [MoonPhase; 8] = [
        MoonPhase::NewMoon,
        MoonPhase::WaxingCrescent,
        MoonPhase::FirstQuarter,
        MoonPhase::WaxingGibbous,
        MoonPhase::FullMoon,
        MoonPhase::WaningGibbous,
        MoonPhase::LastQuarter,
        MoonPhase::WaningCrescent,
    ];

    /// The two words naming the phase.
    pub fn words(self) -> [&'static str; 2] {
        match self {
            Self::NewMoon => ["new", "moon"],
            Self::WaxingCrescent => ["waxing", "crescent"],
            Self::FirstQuarter => ["first", "quarter"],
            Self::WaxingGibbous => ["waxing", "gibbous"],
            Self::FullMoon => ["full", "moon"],
            Self::WaningGibbous => ["waning", "gibbous"],
            Self::LastQuarter => ["last", "quarter"],
            Self::WaningCrescent => ["waning", "crescent"],
        }
    }

    /// Phase named by two consecutive lower-case words.
    pub fn from_words(first: &str, second: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.words() == [first, second])
    }

    /// Icon asset, relative to the asset root.
    pub const fn icon_path(self) -> &'static str {
        match self {
            Self::NewMoon => "icons/moon-phases/new-moon.svg",
            Self::WaxingCrescent => "icons/moon-phases/waxing-cresent-moon.svg",
            Self::FirstQuarter => "icons/moon-phases/first-quarter.svg",
            Self::WaxingGibbous => "icons/moon-phases/waxing-gibbous-moon.svg",
            Self::FullMoon => "icons/moon-phases/full-moon.svg",
            Self::WaningGibbous => "icons/moon-phases/waning-gibbous-moon.svg",
            Self::LastQuarter => "icons/moon-phases/last-quarter.svg",
            Self::WaningCrescent => "icons/moon-phases/waning-cresent-moon.svg",
        }
    }
}

/// Aspect words as `(spoken form, canonical singular)`.
pub const ASPECTS: &[(&str, &str)] = &[
    ("conjunct", "conjunct"),
    ("conjuncts", "conjunct"),
    ("conjunction", "conjunction"),
    ("conjunctions", "conjunction"),
    ("opposite", "opposite"),
    ("opposes", "opposite"),
    ("opposition", "opposition"),
    ("oppositions", "opposition"),
    ("square", "square"),
    ("squares", "square"),
    ("trine", "trine"),
    ("trines", "trine"),
    ("sextile", "sextile"),
    ("sextiles", "sextile"),
    ("quincunx", "quincunx"),
    ("quincunxes", "quincunx"),
];

/// Canonical singular form of an aspect word.
pub fn aspect_from_word(word: &str) -> Option<&'static str> {
    ASPECTS
        .iter()
        .find(|(form, _)| *form == word)
        .map(|(_, canonical)| *canonical)
}

#[cfg(test)]
#[path = "../../tests/unit/classify/vocab.rs"]
mod tests;
