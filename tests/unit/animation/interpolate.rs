use super::*;

#[test]
fn linear_mapping_inside_range() {
    let v = interpolate(5.0, [0.0, 10.0], [100.0, 200.0], InterpolateOpts::default());
    assert_eq!(v, 150.0);
}

#[test]
fn clamp_and_extend_are_independent() {
    let opts = InterpolateOpts {
        left: Extrapolate::Clamp,
        right: Extrapolate::Extend,
        easing: Ease::Linear,
    };
    assert_eq!(interpolate(-100.0, [0.0, 900.0], [50.0, 55.0], opts), 50.0);
    assert!((interpolate(1800.0, [0.0, 900.0], [50.0, 55.0], opts) - 60.0).abs() < 1e-9);
}

#[test]
fn easing_applies_to_fraction() {
    let opts = InterpolateOpts::clamped(Ease::InCubic);
    let v = interpolate(0.5, [0.0, 1.0], [0.0, 8.0], opts);
    assert!((v - 1.0).abs() < 1e-12);
}

#[test]
fn descending_output_is_supported() {
    let v = interpolate(0.25, [0.0, 1.0], [0.55, 0.0], InterpolateOpts::default());
    assert!((v - 0.4125).abs() < 1e-12);
}

#[test]
fn piecewise_hits_every_stop() {
    let inputs = [0.0, 0.5, 1.0];
    let outputs = [0.3, 0.8, 0.3];
    let opts = InterpolateOpts::default();
    for (i, o) in inputs.iter().zip(outputs) {
        let v = interpolate_piecewise(*i, &inputs, &outputs, opts).unwrap();
        assert!((v - o).abs() < 1e-12);
    }
    let mid = interpolate_piecewise(0.25, &inputs, &outputs, opts).unwrap();
    assert!((mid - 0.55).abs() < 1e-12);
}

#[test]
fn piecewise_clamps_outside() {
    let inputs = [0.0, 0.2, 0.8, 1.0];
    let outputs = [1.0, 4.0, 4.0, 2.0];
    let opts = InterpolateOpts::default();
    assert_eq!(
        interpolate_piecewise(-1.0, &inputs, &outputs, opts).unwrap(),
        1.0
    );
    assert_eq!(
        interpolate_piecewise(3.0, &inputs, &outputs, opts).unwrap(),
        2.0
    );
}

#[test]
fn piecewise_rejects_bad_stops() {
    let opts = InterpolateOpts::default();
    assert!(interpolate_piecewise(0.0, &[0.0], &[1.0], opts).is_err());
    assert!(interpolate_piecewise(0.0, &[0.0, 1.0], &[1.0], opts).is_err());
    let err = interpolate_piecewise(0.0, &[0.0, 0.0, 1.0], &[1.0, 2.0, 3.0], opts).unwrap_err();
    assert!(err.to_string().starts_with("animation error:"));
}
