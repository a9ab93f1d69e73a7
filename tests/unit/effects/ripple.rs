use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

fn tap(time: f64) -> TapPoint {
    TapPoint {
        time,
        x: 0.25,
        y: 0.5,
        color: None,
    }
}

#[test]
fn lifetime_is_fixed() {
    let taps = [tap(1.0)];
    let len = to_frame(RIPPLE_SECS, fps30());
    assert!(ripples_at(&taps, 29, fps30()).is_empty());
    assert_eq!(ripples_at(&taps, 30, fps30()).len(), 1);
    assert_eq!(ripples_at(&taps, 30 + len - 1, fps30()).len(), 1);
    assert!(ripples_at(&taps, 30 + len, fps30()).is_empty());
}

#[test]
fn envelope_endpoints() {
    let taps = [tap(0.0)];
    let len = to_frame(RIPPLE_SECS, fps30());
    let first = ripples_at(&taps, 0, fps30())[0];
    assert_eq!(first.progress, 0.0);
    assert!((first.radius_scale - 0.2).abs() < 1e-12);
    assert_eq!(first.opacity, 0.55);
    assert!(first.inner_dot);
    assert_eq!(first.color, Rgba8::WHITE);
    assert_eq!(first.center, Point::new(25.0, 50.0));

    let last = ripples_at(&taps, len - 1, fps30())[0];
    assert_eq!(last.progress, 1.0);
    assert!((last.radius_scale - 1.6).abs() < 1e-12);
    assert_eq!(last.opacity, 0.0);
    assert!(!last.inner_dot);
}

#[test]
fn overlapping_taps_are_independent() {
    let red = Rgba8::rgb(255, 0, 0);
    let taps = [
        tap(0.0),
        TapPoint {
            color: Some(red),
            ..tap(0.2)
        },
    ];
    let both = ripples_at(&taps, 8, fps30());
    assert_eq!(both.len(), 2);
    assert_eq!(both[1].tap, 1);
    assert_eq!(both[1].color, red);
    let len = to_frame(RIPPLE_SECS, fps30());
    assert_eq!(both[1].progress, 2.0 / (len - 1) as f64);

    let alone = ripples_at(&taps[1..], 8, fps30());
    assert_eq!(alone[0].radius_scale, both[1].radius_scale);
}
