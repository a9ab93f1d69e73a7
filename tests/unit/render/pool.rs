use super::*;

#[test]
fn zero_threads_rejected() {
    let err = WorkerPool::acquire(Some(0)).unwrap_err();
    assert!(matches!(err, FramecastError::Validation(_)));
}

#[test]
fn acquire_install_release() {
    let pool = WorkerPool::acquire(Some(2)).unwrap();
    assert_eq!(pool.threads(), 2);
    let name = pool.install(|| std::thread::current().name().map(str::to_owned));
    assert_eq!(name.as_deref().map(|n| n.starts_with("framecast-worker-")), Some(true));
    pool.release();
}
