use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn layout_has_sixty_stars_in_range() {
    let field = Starfield::generate("default", 900, fps30());
    assert_eq!(field.stars().len(), STAR_COUNT as usize);
    for star in field.stars() {
        assert!((0.0..100.0).contains(&star.x_pct));
        assert!((0.0..100.0).contains(&star.y_pct));
        assert!((2.0..4.0).contains(&star.base_size));
        assert!((0..100).contains(&star.delay));
        assert!((0.08..0.2).contains(&star.twinkle_speed));
        assert!(star.cycle_len >= 1 && star.cycle_len <= 900);
    }
}

#[test]
fn star_positions_follow_seed_indices() {
    let field = Starfield::generate("default", 900, fps30());
    let hash = SeedHash::new("default");
    let star = field.stars()[3];
    assert_eq!(star.x_pct, hash.at(15) * 100.0);
    assert_eq!(star.y_pct, hash.at(16) * 100.0);
}

#[test]
fn star_layout_is_pinned_for_known_seed() {
    let field = Starfield::generate("default", 900, fps30());
    let stars = field.stars();
    assert_eq!(stars[0].x_pct, 15.743706488137832);
    assert_eq!(stars[0].y_pct, 20.383184347974748);
    assert_eq!(stars[0].base_size, 2.3825884205143666);
    assert_eq!(stars[1].x_pct, 14.42183632943852);
    assert_eq!(stars[1].y_pct, 42.30749183225271);
    assert_eq!(stars[5].base_size, 3.1286143037959846);
    assert_eq!(stars[7].x_pct, 64.03721701808536);
    assert_eq!(stars[31].x_pct, 84.40949230803199);
    assert_eq!(stars[31].y_pct, 34.95068023485146);
}

#[test]
fn generation_is_reproducible() {
    let a = Starfield::generate("weekly-42", 1800, fps30());
    let b = Starfield::generate("weekly-42", 1800, fps30());
    assert_eq!(a, b);
    let c = Starfield::generate("weekly-43", 1800, fps30());
    assert_ne!(a.stars(), c.stars());
}

#[test]
fn meteors_stay_inside_the_video() {
    let field = Starfield::generate("default", 1800, fps30());
    let meteors = field.meteors();
    assert!(!meteors.is_empty());
    assert!(meteors[0].start_frame >= 30 && meteors[0].start_frame < 60);
    for pair in meteors.windows(2) {
        let gap = pair[1].start_frame - pair[0].start_frame;
        assert!((89..=181).contains(&gap), "gap {gap}");
    }
    for m in meteors {
        assert!(m.start_frame < 1800 - 30 + 1);
        assert!(m.duration >= 1);
        assert!(m.color_index < METEOR_COLORS.len());
    }
}

#[test]
fn short_video_has_no_meteors() {
    let field = Starfield::generate("default", 45, fps30());
    assert!(field.meteors().is_empty());
}

#[test]
fn twinkle_bounds_and_glow() {
    let field = Starfield::generate("default", 900, fps30());
    for frame in [0, 17, 450, 899] {
        for s in field.sample_stars(frame).unwrap() {
            assert!(s.opacity >= 0.3 - 1e-12 && s.opacity <= 0.8 + 1e-12);
            assert_eq!(s.glow.is_some(), s.opacity > 0.5);
        }
    }
}

#[test]
fn meteor_envelope_and_visibility() {
    let field = Starfield::generate("default", 1800, fps30());
    let m = field.meteors()[0];
    assert!(field.sample_meteors(m.start_frame - 1).unwrap().is_empty());

    let first = field.sample_meteors(m.start_frame).unwrap();
    assert_eq!(first.len(), 1);
    assert!((first[0].intensity - 0.3).abs() < 1e-12);
    assert_eq!(first[0].head, m.start);

    let last = field.sample_meteors(m.start_frame + m.duration).unwrap();
    assert_eq!(last.len(), 1);
    assert!(last[0].intensity.abs() < 1e-12);
    assert!(last[0].head_glow.is_none());

    assert!(
        field
            .sample_meteors(m.start_frame + m.duration + 1)
            .unwrap()
            .is_empty()
    );
}
