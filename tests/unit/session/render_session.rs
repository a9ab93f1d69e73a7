use super::*;
use crate::assets::table::AssetTable;
use crate::foundation::core::{Canvas, Fps};
use crate::render::sink::InMemorySink;
use crate::timeline::dsl::SceneBuilder;

fn scene() -> Scene {
    SceneBuilder::new(
        Fps::new(24, 1).unwrap(),
        Canvas {
            width: 1080,
            height: 1920,
        },
        48,
    )
    .segment("three quick tips", 0.0, 1.5)
    .tap(0.5, 0.5, 0.5, None)
    .assets(AssetTable::empty())
    .build()
    .unwrap()
}

#[test]
fn sequential_session_has_no_pool() {
    let session = RenderSession::new(scene(), RenderSessionOpts::default()).unwrap();
    assert!(!session.has_pool());
    let mut sink = InMemorySink::new();
    let stats = session.render_all(&mut sink).unwrap();
    assert_eq!(stats.frames_total, 48);
    assert_eq!(session.eval_frame(FrameIndex(12)).unwrap(), sink.frames()[12]);
}

#[test]
fn parallel_session_holds_pool_until_release() {
    let opts = RenderSessionOpts {
        threading: RenderThreading {
            parallel: true,
            chunk_size: 5,
            threads: Some(3),
        },
    };
    let session = RenderSession::new(scene(), opts).unwrap();
    assert!(session.has_pool());

    let mut sink = InMemorySink::new();
    session
        .render_frame_set(&[FrameIndex(40), FrameIndex(2)], &mut sink)
        .unwrap();
    let got: Vec<u64> = sink.frames().iter().map(|s| s.frame.0).collect();
    assert_eq!(got, vec![2, 40]);

    let scene = session.release();
    assert_eq!(scene.duration_frames(), 48);
}

#[test]
fn invalid_thread_count_fails_session() {
    let opts = RenderSessionOpts {
        threading: RenderThreading {
            parallel: true,
            chunk_size: 8,
            threads: Some(0),
        },
    };
    assert!(RenderSession::new(scene(), opts).is_err());
}
