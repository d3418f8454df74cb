//! Parallel evaluation of elementwise maps.
//!
//! Rayon normally uses a global thread pool, whose initialization panics if threads cannot be spawned.
//! We build a crate-local pool instead and fall back to sequential evaluation if that fails.

#[cfg(feature = "parallel")]
use once_cell::sync::OnceCell;
#[cfg(feature = "parallel")]
use rayon::{prelude::*, ThreadPool};

/// Minimal number of elements for which a map is distributed over the pool
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 16 * 1024;

#[cfg(feature = "parallel")]
static POOL: OnceCell<Option<ThreadPool>> = OnceCell::new();

#[cfg(feature = "parallel")]
fn desired_threads() -> usize {
    std::env::var("RAYON_NUM_THREADS")
        .ok()
        .and_then(|threads| threads.parse::<usize>().ok())
        .filter(|&threads| threads > 0)
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|threads| threads.get())
                .unwrap_or(1)
        })
}

#[cfg(feature = "parallel")]
fn build_pool() -> Option<ThreadPool> {
    let requested = desired_threads();
    let try_build = |threads| {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|index| format!("colframe-{index}"))
            .build()
    };

    match try_build(requested) {
        Ok(pool) => Some(pool),
        Err(error) if requested > 1 => {
            log::debug!("Could not build pool with {requested} threads: {error}");
            try_build(1).ok()
        }
        Err(error) => {
            log::debug!("Could not build pool: {error}");
            None
        }
    }
}

#[cfg(feature = "parallel")]
fn pool() -> Option<&'static ThreadPool> {
    POOL.get_or_init(build_pool).as_ref()
}

#[cfg(feature = "parallel")]
fn try_parallel_map<T, U, F>(values: &[T], function: &F) -> Option<Vec<U>>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Send + Sync,
{
    if values.len() < PARALLEL_THRESHOLD {
        return None;
    }

    let pool = pool()?;
    log::trace!(
        "Mapping {} values on {} threads",
        values.len(),
        pool.current_num_threads()
    );

    Some(pool.install(|| values.par_iter().map(function).collect()))
}

#[cfg(not(feature = "parallel"))]
fn try_parallel_map<T, U, F>(_values: &[T], _function: &F) -> Option<Vec<U>>
where
    F: Fn(&T) -> U,
{
    None
}

/// Apply `function` to every element of `values`, returning the results in the same order.
///
/// `function` may be evaluated concurrently and in any order.
pub(crate) fn map_slice<T, U, F>(values: &[T], function: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Send + Sync,
{
    match try_parallel_map(values, &function) {
        Some(result) => result,
        None => values.iter().map(function).collect(),
    }
}
