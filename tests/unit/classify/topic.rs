use super::*;

fn label(text: &str) -> Option<String> {
    classify_text(text).map(|t| t.label)
}

#[test]
fn enters_beats_bare_planet() {
    let topic = classify_text("saturn enters aries this week").unwrap();
    assert_eq!(topic.kind, TopicKind::PlanetEntersSign);
    assert_eq!(topic.label, "saturn enters aries");
    assert_eq!(topic.planets.as_slice(), &[Planet::Saturn]);
    assert_eq!(topic.sign, Some(Sign::Aries));
}

#[test]
fn aspect_plural_is_normalized() {
    let topic = classify_text("Venus trines Mars, and the sun is in leo").unwrap();
    assert_eq!(topic.kind, TopicKind::Aspect);
    assert_eq!(topic.label, "venus trine mars");
    assert_eq!(topic.planets.as_slice(), &[Planet::Venus, Planet::Mars]);
}

#[test]
fn moon_phase_with_and_without_sign() {
    assert_eq!(label("the full moon in leo is here").as_deref(), Some("full moon in leo"));
    let t = classify_text("tonight's waxing gibbous glows").unwrap();
    assert_eq!(t.kind, TopicKind::MoonPhase);
    assert_eq!(t.label, "waxing gibbous");
    assert_eq!(t.phase, Some(MoonPhase::WaxingGibbous));
    assert_eq!(t.sign, None);
}

#[test]
fn rule_order_is_priority_not_position() {
    // The moon phase appears first, but the aspect rule ranks higher.
    assert_eq!(
        label("new moon energy as mars squares pluto").as_deref(),
        Some("mars square pluto")
    );
    // Bare planet outranks bare sign.
    assert_eq!(label("scorpio season with jupiter").as_deref(), Some("jupiter"));
    assert_eq!(label("scorpio season").as_deref(), Some("scorpio"));
}

#[test]
fn latest_match_within_a_rule() {
    assert_eq!(label("mercury then venus").as_deref(), Some("venus"));
}

#[test]
fn no_match_is_none() {
    assert_eq!(classify_text("welcome back everyone"), None);
    assert_eq!(classify_text(""), None);
}

#[test]
fn context_window_is_ten_seconds_wide() {
    let segs = vec![
        Segment::new("pluto", 0.0, 1.0),
        Segment::new("talk about nothing", 2.0, 20.0),
        Segment::new("neptune", 30.0, 31.0),
    ];
    assert_eq!(classify_at(&segs, 5.5).map(|t| t.label).as_deref(), Some("pluto"));
    assert_eq!(classify_at(&segs, 6.5), None);
    assert_eq!(classify_at(&segs, 25.0).map(|t| t.label).as_deref(), Some("neptune"));
}

#[test]
fn context_text_orders_by_start() {
    let segs = vec![
        Segment::new("Second", 3.0, 4.0),
        Segment::new("First", 1.0, 2.0),
    ];
    assert_eq!(context_text(&segs, 0.0, 10.0), "first second");
}

#[test]
fn label_override() {
    assert_eq!(topic_from_label("Full Moon").unwrap().kind, TopicKind::MoonPhase);
    let custom = topic_from_label("Tarot Basics").unwrap();
    assert_eq!(custom.kind, TopicKind::Custom);
    assert_eq!(custom.label, "tarot basics");
    assert_eq!(topic_from_label("  "), None);
}

#[test]
fn symbol_subject_labels_stay_custom() {
    for label in ["Fire Signs", "Sun sign vs rising", "Saturn Return", "S tier: leo, aries"] {
        let t = topic_from_label(label).unwrap();
        assert_eq!(t.kind, TopicKind::Custom, "{label}");
        assert_eq!(t.label, label.to_lowercase());
    }
    assert_eq!(topic_from_label("Life Path 3").unwrap().kind, TopicKind::Custom);
    assert_eq!(
        topic_from_label("Saturn enters Aries").unwrap().kind,
        TopicKind::PlanetEntersSign
    );
}
