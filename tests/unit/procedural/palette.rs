use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn aurora_hits_palette_stops() {
    // 900 frames per cycle, 150 frames per colour.
    assert_eq!(aurora_color(0, fps30()), AURORA[0]);
    assert_eq!(aurora_color(150, fps30()), AURORA[1]);
    assert_eq!(aurora_color(750, fps30()), AURORA[5]);
    assert_eq!(aurora_color(900, fps30()), AURORA[0]);
}

#[test]
fn aurora_midpoint_blends_evenly() {
    let mid = aurora_color(75, fps30());
    let expected = AURORA[0].lerp(AURORA[1], 0.5);
    for (a, b) in [(mid.r, expected.r), (mid.g, expected.g), (mid.b, expected.b)] {
        assert!(a.abs_diff(b) <= 1, "{mid} vs {expected}");
    }
}

#[test]
fn pulse_range() {
    assert!((pulse_scale(0, fps30()).unwrap() - 0.98).abs() < 1e-12);
    assert!((pulse_scale(180, fps30()).unwrap() - 1.02).abs() < 1e-12);
    for f in 0..360 {
        let s = pulse_scale(f, fps30()).unwrap();
        assert!((0.98 - 1e-12..=1.02 + 1e-12).contains(&s));
    }
}

#[test]
fn gradient_drift_clamps_left_extends_right() {
    assert_eq!(gradient_position(-10), 50.0);
    assert_eq!(gradient_position(0), 50.0);
    assert!((gradient_position(450) - 52.5).abs() < 1e-12);
    assert!((gradient_position(1800) - 60.0).abs() < 1e-12);
}
