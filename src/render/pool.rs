use crate::foundation::error::{FramecastError, FramecastResult};

/// Dedicated rayon pool for parallel frame evaluation.
///
/// The pool is an explicit resource: it exists from [`WorkerPool::acquire`] until
/// [`WorkerPool::release`] or drop, and nothing global is touched.
#[derive(Debug)]
pub struct WorkerPool {
    pool: rayon::ThreadPool,
}

impl WorkerPool {
    /// Spawn the worker threads. `None` uses rayon's default thread count.
    pub fn acquire(threads: Option<usize>) -> FramecastResult<Self> {
        if let Some(n) = threads
            && n == 0
        {
            return Err(FramecastError::validation(
                "render threading 'threads' must be >= 1 when set",
            ));
        }
        let mut builder = rayon::ThreadPoolBuilder::new()
            .thread_name(|i| format!("framecast-worker-{i}"));
        if let Some(n) = threads {
            builder = builder.num_threads(n);
        }
        let pool = builder.build().map_err(|e| {
            FramecastError::evaluation(format!("failed to build rayon thread pool: {e}"))
        })?;
        tracing::debug!(threads = pool.current_num_threads(), "worker pool acquired");
        Ok(Self { pool })
    }

    /// Number of worker threads.
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Join the workers now instead of at drop.
    pub fn release(self) {
        drop(self);
    }

    pub(crate) fn install<R: Send>(&self, op: impl FnOnce() -> R + Send) -> R {
        self.pool.install(op)
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        tracing::debug!(threads = self.pool.current_num_threads(), "worker pool released");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pool.rs"]
mod tests;
