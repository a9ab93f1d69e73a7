use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

fn zp(start: f64, end: f64, scale: f64) -> ZoomPoint {
    ZoomPoint {
        start_time: start,
        end_time: end,
        scale,
        anchor_x: 0.5,
        anchor_y: 0.5,
    }
}

#[test]
fn phase_lengths_in_frames() {
    assert_eq!(to_frame(ZOOM_IN_SECS, fps30()), 8);
    assert_eq!(to_frame(ZOOM_OUT_SECS, fps30()), 10);
}

#[test]
fn one_second_window_shape() {
    let points = [zp(0.0, 1.0, 1.25)];
    assert_eq!(zoom_at(&points, 0, fps30()).scale, 1.0);
    assert_eq!(zoom_at(&points, 15, fps30()).scale, 1.25);
    assert!((zoom_at(&points, 29, fps30()).scale - 1.0).abs() < 1e-12);
    assert_eq!(zoom_at(&points, 30, fps30()), ZoomTransform::IDENTITY);
}

#[test]
fn spring_in_rises_then_holds() {
    let points = [zp(0.0, 2.0, 1.5)];
    let s1 = zoom_at(&points, 1, fps30()).scale;
    let s4 = zoom_at(&points, 4, fps30()).scale;
    assert!(s1 > 1.0 && s1 < s4, "{s1} {s4}");
    for f in 8..=49 {
        assert_eq!(zoom_at(&points, f, fps30()).scale, 1.5, "frame {f}");
    }
}

#[test]
fn ease_out_is_monotonic_to_one() {
    let points = [zp(0.0, 2.0, 1.5)];
    let mut prev = zoom_at(&points, 49, fps30()).scale;
    for f in 50..60 {
        let s = zoom_at(&points, f, fps30()).scale;
        assert!(s < prev, "frame {f}: {s} !< {prev}");
        prev = s;
    }
    assert!((prev - 1.0).abs() < 1e-12);
}

#[test]
fn short_window_multiplies_phases() {
    let points = [zp(0.0, 0.4, 2.0)];
    // 12 frames: spring covers 0..8, ease-out covers 2..=11.
    let t = zoom_at(&points, 5, fps30());
    let in_f = spring(5.0, fps30(), ZOOM_SPRING, 0.0, 1.0);
    let out_f = 1.0 - Ease::OutCubic.apply(4.0 / 10.0);
    assert!((t.scale - (1.0 + in_f * out_f)).abs() < 1e-12);
}

#[test]
fn identity_outside_windows() {
    let points = [zp(1.0, 2.0, 1.3)];
    let t = zoom_at(&points, 10, fps30());
    assert_eq!(t, ZoomTransform::IDENTITY);
    assert!(t.is_identity());
    assert_eq!(t.anchor, Point::new(50.0, 50.0));
    assert_eq!(t.zoom_index, None);
}

#[test]
fn first_containing_window_and_anchor() {
    let points = [
        zp(0.0, 1.0, 1.2),
        ZoomPoint {
            anchor_x: 0.25,
            anchor_y: 0.75,
            ..zp(1.0, 3.0, 1.4)
        },
    ];
    let t = zoom_at(&points, 45, fps30());
    assert_eq!(t.zoom_index, Some(1));
    assert_eq!(t.anchor, Point::new(25.0, 75.0));
    assert_eq!(t.scale, 1.4);
}

#[test]
fn affine_keeps_anchor_fixed() {
    let canvas = Canvas {
        width: 1000,
        height: 2000,
    };
    let t = ZoomTransform {
        scale: 1.5,
        anchor: Point::new(25.0, 75.0),
        zoom_index: Some(0),
    };
    let m = t.to_affine(canvas);
    let anchor_px = Point::new(250.0, 1500.0);
    let mapped = m * anchor_px;
    assert!((mapped - anchor_px).hypot() < 1e-9);
    let corner = m * Point::new(0.0, 0.0);
    assert!((corner.x - -125.0).abs() < 1e-9);
    assert!((corner.y - -750.0).abs() < 1e-9);
}

#[test]
fn low_frame_rate_still_starts_at_rest() {
    let fps1 = Fps::new(1, 1).unwrap();
    assert_eq!(to_frame(ZOOM_IN_SECS, fps1), 0);
    let points = [zp(0.0, 3.0, 1.5)];
    assert_eq!(zoom_at(&points, 0, fps1).scale, 1.0);
    assert_eq!(zoom_at(&points, 1, fps1).scale, 1.5);
    assert_eq!(zoom_at(&points, 2, fps1).scale, 1.0);
}
