use super::*;
use crate::assets::table::AssetTable;
use crate::foundation::core::{Canvas, Fps};
use crate::render::sink::InMemorySink;
use crate::timeline::dsl::{SceneBuilder, audio_track};
use crate::timeline::model::{Background, OverlayStyle};

fn scene(duration: u64) -> Scene {
    SceneBuilder::new(
        Fps::new(30, 1).unwrap(),
        Canvas {
            width: 1080,
            height: 1920,
        },
        duration,
    )
    .seed("pipeline")
    .segment("the moon is quiet tonight", 0.0, 2.5)
    .zoom(0.5, 1.5, 1.2, 0.5, 0.4)
    .tap(1.0, 0.3, 0.7, None)
    .overlay(OverlayStyle::Stamp, "NEW", 0.0, 3.0)
    .background(Background {
        show_stars: true,
        ..Background::default()
    })
    .music(audio_track("audio/bed.mp3", 0.0))
    .unwrap()
    .assets(AssetTable::from_paths(["fonts/Astronomicon.ttf"]).unwrap())
    .build()
    .unwrap()
}

fn range(start: u64, end: u64) -> FrameRange {
    FrameRange::new(FrameIndex(start), FrameIndex(end)).unwrap()
}

fn indices(sink: &InMemorySink) -> Vec<u64> {
    sink.frames().iter().map(|s| s.frame.0).collect()
}

#[test]
fn sequential_range_in_order() {
    let s = scene(90);
    let mut sink = InMemorySink::new();
    let stats = render_range(&s, range(10, 40), &mut sink, &RenderThreading::default(), None)
        .unwrap();
    assert_eq!(stats.frames_total, 30);
    assert_eq!(indices(&sink), (10..40).collect::<Vec<_>>());
    assert!(sink.is_finished());
    assert_eq!(sink.config().unwrap().canvas.width, 1080);
    assert_eq!(sink.config().unwrap().audio.tracks.len(), 1);
}

#[test]
fn parallel_matches_sequential() {
    let s = scene(90);
    let mut seq = InMemorySink::new();
    let seq_stats =
        render_range(&s, range(0, 90), &mut seq, &RenderThreading::default(), None).unwrap();

    let threading = RenderThreading {
        parallel: true,
        chunk_size: 7,
        threads: Some(4),
    };
    let mut par = InMemorySink::new();
    let par_stats = render_range(&s, range(0, 90), &mut par, &threading, None).unwrap();

    assert_eq!(seq.frames(), par.frames());
    assert_eq!(seq_stats, par_stats);
}

#[test]
fn external_pool_is_reused() {
    let s = scene(60);
    let pool = WorkerPool::acquire(Some(2)).unwrap();
    let threading = RenderThreading {
        parallel: true,
        chunk_size: 0,
        threads: None,
    };
    for _ in 0..2 {
        let mut sink = InMemorySink::new();
        render_range(&s, range(0, 60), &mut sink, &threading, Some(&pool)).unwrap();
        assert_eq!(indices(&sink), (0..60).collect::<Vec<_>>());
    }
    pool.release();
}

#[test]
fn frame_set_sorted_and_deduplicated() {
    let s = scene(90);
    let frames = [FrameIndex(50), FrameIndex(3), FrameIndex(50), FrameIndex(17)];
    let threading = RenderThreading {
        parallel: true,
        chunk_size: 2,
        threads: Some(2),
    };
    let mut sink = InMemorySink::new();
    let stats = render_frame_set(&s, &frames, &mut sink, &threading, None).unwrap();
    assert_eq!(stats.frames_total, 3);
    assert_eq!(indices(&sink), vec![3, 17, 50]);

    let direct = Evaluator::eval_frame(&s, FrameIndex(17)).unwrap();
    assert_eq!(sink.frames()[1], direct);
}

#[test]
fn bad_ranges_rejected() {
    let s = scene(30);
    let mut sink = InMemorySink::new();
    let t = RenderThreading::default();
    assert!(render_range(&s, range(5, 5), &mut sink, &t, None).is_err());
    assert!(render_range(&s, range(0, 31), &mut sink, &t, None).is_err());
    assert!(render_frame_set(&s, &[], &mut sink, &t, None).is_err());
    assert!(render_frame_set(&s, &[FrameIndex(30)], &mut sink, &t, None).is_err());
    assert!(render_frames(&s, range(0, 31)).is_err());
}

#[test]
fn render_frames_matches_direct_evaluation() {
    let s = scene(30);
    let frames = render_frames(&s, range(0, 30)).unwrap();
    assert_eq!(frames.len(), 30);
    for (i, st) in frames.iter().enumerate() {
        assert_eq!(*st, Evaluator::eval_frame(&s, FrameIndex(i as u64)).unwrap());
    }
}

#[test]
fn evaluation_error_surfaces() {
    let s = SceneBuilder::new(
        Fps::new(30, 1).unwrap(),
        Canvas {
            width: 1080,
            height: 1920,
        },
        60,
    )
    .segment("venus is bright", 0.0, 2.0)
    .build()
    .unwrap();
    let threading = RenderThreading {
        parallel: true,
        chunk_size: 8,
        threads: Some(2),
    };
    let mut sink = InMemorySink::new();
    let err = render_range(&s, range(0, 60), &mut sink, &threading, None).unwrap_err();
    assert!(matches!(err, FramecastError::Asset(_)));
    assert!(!sink.is_finished());
}

struct FailingSink {
    accepted: usize,
}

impl FrameSink for FailingSink {
    fn begin(&mut self, _cfg: SinkConfig) -> FramecastResult<()> {
        Ok(())
    }

    fn push_frame(&mut self, _state: FrameState) -> FramecastResult<()> {
        if self.accepted == 5 {
            return Err(FramecastError::evaluation("disk full"));
        }
        self.accepted += 1;
        Ok(())
    }

    fn end(&mut self) -> FramecastResult<()> {
        Ok(())
    }
}

#[test]
fn sink_error_surfaces() {
    let s = scene(90);
    let mut sink = FailingSink { accepted: 0 };
    let err = render_range(&s, range(0, 90), &mut sink, &RenderThreading::default(), None)
        .unwrap_err();
    assert!(err.to_string().contains("disk full"));
    assert_eq!(sink.accepted, 5);
}
