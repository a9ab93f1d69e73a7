use super::*;
use crate::assets::table::AssetTable;
use crate::eval::evaluator::Evaluator;
use crate::foundation::core::FrameIndex;
use crate::timeline::dsl::SceneBuilder;

fn cfg_and_frame() -> (SinkConfig, FrameState) {
    let scene = SceneBuilder::new(
        Fps::new(30, 1).unwrap(),
        Canvas {
            width: 720,
            height: 1280,
        },
        30,
    )
    .segment("hello there", 0.0, 1.0)
    .assets(AssetTable::empty())
    .build()
    .unwrap();
    let cfg = SinkConfig {
        canvas: scene.canvas(),
        fps: scene.fps(),
        audio: scene.audio().clone(),
    };
    (cfg, Evaluator::eval_frame(&scene, FrameIndex(3)).unwrap())
}

#[test]
fn in_memory_sink_captures_everything() {
    let (cfg, frame) = cfg_and_frame();
    let mut sink = InMemorySink::new();
    sink.begin(cfg.clone()).unwrap();
    sink.push_frame(frame.clone()).unwrap();
    assert!(!sink.is_finished());
    sink.end().unwrap();
    assert!(sink.is_finished());
    assert_eq!(sink.config(), Some(&cfg));
    assert_eq!(sink.frames(), &[frame]);
}

#[test]
fn json_lines_sink_writes_header_then_frames() {
    let (cfg, frame) = cfg_and_frame();
    let mut sink = JsonLinesSink::new(Vec::new());
    sink.begin(cfg).unwrap();
    sink.push_frame(frame).unwrap();
    sink.end().unwrap();

    let text = String::from_utf8(sink.into_inner()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    let header: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(header["canvas"]["width"], 720);
    assert_eq!(header["audio"]["sample_rate"], 48_000);
    let frame: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(frame["frame"], 3);
    assert_eq!(frame["caption"]["text"], "hello there");
}
