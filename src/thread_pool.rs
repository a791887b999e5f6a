//! Shared thread pool for parallel trial loops.
//!
//! Both inference procedures run their trial loops through one lazily
//! initialized rayon pool, so concurrent calls from different threads share
//! a single bounded set of workers instead of oversubscribing the machine.

use rayon::ThreadPool;

use std::sync::OnceLock;

static THREAD_POOL: OnceLock<ThreadPool> = OnceLock::new();

/// Get or initialize the shared thread pool.
///
/// Sized to the number of logical CPUs (rayon's default).
pub fn get_thread_pool() -> &'static ThreadPool {
    THREAD_POOL.get_or_init(|| {
        rayon::ThreadPoolBuilder::new()
            .build()
            .expect("Failed to build shared thread pool")
    })
}

/// Execute a parallel operation on the shared thread pool.
pub fn install<OP, R>(op: OP) -> R
where
    OP: FnOnce() -> R + Send,
    R: Send,
{
    get_thread_pool().install(op)
}
