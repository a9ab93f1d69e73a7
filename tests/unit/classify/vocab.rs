use super::*;

#[test]
fn tokenize_strips_punctuation() {
    assert_eq!(
        tokenize("Saturn enters ARIES, this week!"),
        vec!["saturn", "enters", "aries", "this", "week"]
    );
    assert!(tokenize("  ...  ").is_empty());
}

#[test]
fn glyph_tables() {
    assert_eq!(Sign::Aries.glyph(), 'A');
    assert_eq!(Sign::Pisces.glyph(), 'L');
    assert_eq!(Planet::Sun.glyph(), 'Q');
    assert_eq!(Planet::Pluto.glyph(), 'Z');
}

#[test]
fn lookups() {
    assert_eq!(Planet::from_word("venus"), Some(Planet::Venus));
    assert_eq!(Planet::from_word("venusian"), None);
    assert_eq!(Sign::from_word("leo"), Some(Sign::Leo));
    assert_eq!(
        MoonPhase::from_words("waning", "crescent"),
        Some(MoonPhase::WaningCrescent)
    );
    assert_eq!(aspect_from_word("trines"), Some("trine"));
    assert_eq!(aspect_from_word("opposes"), Some("opposite"));
    assert_eq!(aspect_from_word("enters"), None);
}

#[test]
fn every_phase_has_an_svg_icon() {
    for phase in MoonPhase::ALL {
        let path = phase.icon_path();
        assert!(path.starts_with("icons/moon-phases/"));
        assert!(path.ends_with(".svg"));
    }
}
