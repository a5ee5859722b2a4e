// src/checker/pool.rs
// =============================================================================
// A fixed-size worker pool for async jobs.
//
// N workers share one cursor into the item list. Each worker claims the next
// unclaimed index, runs the job, stores the output, and loops until the list
// is exhausted. The pool resolves once every worker has stopped.
//
// All workers run as futures on the current task (join_all), never as
// separate threads, so plain Cell/RefCell are enough for the shared cursor
// and the output list: only one worker runs between two await points.
// =============================================================================

use std::cell::{Cell, RefCell};
use std::future::Future;

use futures::future::join_all;

/// Runs `job` over every item with at most `limit` jobs in flight.
///
/// Outputs come back in completion order, not input order. Jobs cannot fail
/// at this layer; encode failures in `R`.
pub async fn run_pool<T, R, F, Fut>(items: &[T], limit: usize, job: F) -> Vec<R>
where
    T: Clone,
    F: Fn(T) -> Fut,
    Fut: Future<Output = R>,
{
    let cursor = Cell::new(0usize);
    let outputs = RefCell::new(Vec::with_capacity(items.len()));
    let worker_count = limit.max(1).min(items.len());

    let cursor = &cursor;
    let outputs = &outputs;
    let job = &job;

    let workers = (0..worker_count).map(|_| async move {
        loop {
            let index = cursor.get();
            let Some(item) = items.get(index) else {
                break;
            };
            cursor.set(index + 1);

            let output = job(item.clone()).await;
            outputs.borrow_mut().push(output);
        }
    });

    join_all(workers).await;

    outputs.take()
}
