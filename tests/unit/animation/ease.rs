use super::*;

#[test]
fn endpoints_are_stable() {
    for ease in Ease::ALL {
        assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?} at 0");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?} at 1");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in Ease::ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::OutCubic.apply(-3.0), 0.0);
    assert_eq!(Ease::InCubic.apply(7.0), 1.0);
}

#[test]
fn sine_in_out_is_symmetric() {
    let a = Ease::InOutSine.apply(0.2);
    let b = Ease::InOutSine.apply(0.8);
    assert!((a + b - 1.0).abs() < 1e-12);
    assert!((Ease::InOutSine.apply(0.5) - 0.5).abs() < 1e-12);
}

#[test]
fn serde_uses_snake_case_names() {
    let e: Ease = serde_json::from_str("\"in_out_cubic\"").unwrap();
    assert_eq!(e, Ease::InOutCubic);
}
