use super::*;
use serde_json::json;

fn spec(id: &str) -> CompositionSpec {
    CompositionSpec {
        id: id.to_owned(),
        width: 1080,
        height: 1920,
        fps: Fps { num: 30, den: 1 },
        duration_in_frames: 150,
        default_props: json!({
            "seed": "base",
            "segments": [
                {"text": "default caption", "start_time": 0.0, "end_time": 2.0}
            ],
            "overlays": [
                {"text": "Hook", "start_time": 0.0, "end_time": 1.0, "style": "hook"}
            ]
        }),
    }
}

fn registry() -> CompositionRegistry {
    let mut r = CompositionRegistry::new(AssetTable::empty());
    r.register(spec("promo")).unwrap();
    r
}

#[test]
fn duplicate_ids_rejected() {
    let mut r = registry();
    let err = r.register(spec("promo")).unwrap_err();
    assert!(err.to_string().contains("already registered"));
    assert_eq!(r.len(), 1);
    assert_eq!(r.ids().collect::<Vec<_>>(), vec!["promo"]);
}

#[test]
fn bad_specs_rejected() {
    let mut r = CompositionRegistry::default();
    let mut s = spec("a");
    s.width = 0;
    assert!(r.register(s).is_err());
    let mut s = spec("b");
    s.default_props = json!([1, 2]);
    assert!(r.register(s).is_err());
    let mut s = spec("c");
    s.fps = Fps { num: 30, den: 0 };
    assert!(r.register(s).is_err());
    assert!(r.is_empty());
}

#[test]
fn defaults_only() {
    let r = registry();
    let st = r.render("promo", FrameIndex(10), &Value::Null).unwrap();
    assert_eq!(st.caption.unwrap().text, "default caption");
    assert_eq!(st.overlays.len(), 1);
}

#[test]
fn props_replace_top_level_keys_wholesale() {
    let r = registry();
    let props = json!({
        "segments": [
            {"text": "override", "start_time": 0.0, "end_time": 1.0}
        ]
    });
    let st = r.render("promo", FrameIndex(10), &props).unwrap();
    assert_eq!(st.caption.unwrap().text, "override");
    // untouched keys keep their defaults
    assert_eq!(st.overlays.len(), 1);

    let merged = merge_props(&spec("x").default_props, &props).unwrap();
    assert_eq!(merged["seed"], "base");
    assert_eq!(merged["segments"].as_array().unwrap().len(), 1);
}

#[test]
fn spec_owns_timing_and_canvas() {
    let r = registry();
    let props = json!({"duration": 5, "canvas": {"width": 1, "height": 1}});
    let scene = r.scene("promo", &props).unwrap();
    assert_eq!(scene.duration_frames(), 150);
    assert_eq!(scene.canvas().width, 1080);
}

#[test]
fn lookup_and_request_errors() {
    let r = registry();
    assert!(r.get("promo").is_some());
    assert!(r.get("nope").is_none());
    assert!(r.render("nope", FrameIndex(0), &Value::Null).is_err());
    assert!(r.render("promo", FrameIndex(0), &json!("str")).is_err());
    assert!(matches!(
        r.render("promo", FrameIndex(150), &Value::Null),
        Err(FramecastError::Evaluation(_))
    ));
    let bad = json!({"segments": [{"text": "x", "start_time": 3.0, "end_time": 1.0}]});
    assert!(matches!(
        r.render("promo", FrameIndex(0), &bad),
        Err(FramecastError::Validation(_))
    ));
}

#[test]
fn frame_requests_reuse_one_prepared_scene() {
    let r = registry();
    for frame in 0..30 {
        r.render("promo", FrameIndex(frame), &Value::Null).unwrap();
    }
    assert_eq!(r.prepared_len(), 1);

    let a = r.prepare("promo", &Value::Null).unwrap();
    let b = r.prepare("promo", &json!({})).unwrap();
    assert!(Arc::ptr_eq(&a, &b));

    let props = json!({"seed": "other"});
    let c = r.prepare("promo", &props).unwrap();
    assert!(!Arc::ptr_eq(&a, &c));
    r.render("promo", FrameIndex(3), &props).unwrap();
    assert_eq!(r.prepared_len(), 2);

    r.clear_prepared();
    assert_eq!(r.prepared_len(), 0);
}

#[test]
fn invalid_props_are_not_prepared() {
    let r = registry();
    let bad = json!({"segments": [{"text": "x", "start_time": 3.0, "end_time": 1.0}]});
    assert!(r.prepare("promo", &bad).is_err());
    assert!(r.render("promo", FrameIndex(0), &bad).is_err());
    assert_eq!(r.prepared_len(), 0);
}
