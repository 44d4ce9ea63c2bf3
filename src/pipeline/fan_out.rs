//! Fan matched files out to concurrent workers and wait for all of them.
//!
//! Default mode spawns one thread per file with no limit. That is simple and keeps every
//! conversion independent, but a very large tree means a very large number of threads; pass
//! `jobs` to use a fixed pool fed by a channel instead.

use crossbeam_channel::{SendError, bounded};
use log::{debug, warn};
use std::num::NonZeroUsize;
use std::panic::{self, AssertUnwindSafe};
use std::thread::{self, Scope, ScopedJoinHandle};

use crate::engine::converter::Converter;
use crate::types::{ConversionOutcome, MatchedFile, ResultSet};
use crate::utils::config::QUEUE_DEPTH_PER_WORKER;

use super::collector::ResultCollector;
use super::context::PipelineContext;
use super::task::run_task;

/// Convert every file concurrently and return one outcome per file, in completion order.
///
/// `index` of each outcome is the file's position in `files`. Returns only after every worker has
/// finished.
pub fn execute(
    files: Vec<MatchedFile>,
    ctx: &PipelineContext,
    converter: &dyn Converter,
    jobs: Option<NonZeroUsize>,
) -> ResultSet {
    match jobs {
        Some(n) => debug!("Converting {} files on a pool of {} workers", files.len(), n),
        None => debug!("Converting {} files, one thread each", files.len()),
    }
    let collector = ResultCollector::with_capacity(files.len());
    match jobs {
        None => fan_out_unbounded(files, ctx, converter, &collector),
        Some(n) => fan_out_bounded(files, ctx, converter, &collector, n.get()),
    }
    collector.into_outcomes()
}

/// Run one task and record its outcome. The outcome is appended before the reporter runs, and a
/// panicking reporter is contained here so it cannot take a pool worker (or the dispatcher) down.
fn process(
    index: usize,
    file: MatchedFile,
    ctx: &PipelineContext,
    converter: &dyn Converter,
    collector: &ResultCollector,
) {
    let result = run_task(&file, ctx, converter);
    collector.append(ConversionOutcome {
        index,
        rel_path: file.rel_path,
        succeeded: result.succeeded(),
    });
    if let Some(report) = ctx.reporter
        && panic::catch_unwind(AssertUnwindSafe(|| report(&result))).is_err()
    {
        warn!("progress reporter panicked on {}", result.source.display());
    }
}

fn join_all(handles: Vec<ScopedJoinHandle<'_, ()>>) {
    for h in handles {
        if h.join().is_err() {
            warn!("conversion worker panicked after recording its outcome");
        }
    }
}

/// One scoped thread per file. If the OS refuses a thread, that file runs on this thread instead.
fn fan_out_unbounded(
    files: Vec<MatchedFile>,
    ctx: &PipelineContext,
    converter: &dyn Converter,
    collector: &ResultCollector,
) {
    thread::scope(|s| {
        let mut handles = Vec::with_capacity(files.len());
        for (index, file) in files.into_iter().enumerate() {
            let job = file.clone();
            let spawned = thread::Builder::new()
                .name(format!("convert-{index}"))
                .spawn_scoped(s, move || process(index, job, ctx, converter, collector));
            match spawned {
                Ok(h) => handles.push(h),
                Err(e) => {
                    warn!("could not spawn worker for {}: {}", file.rel_path.display(), e);
                    process(index, file, ctx, converter, collector);
                }
            }
        }
        debug!("dispatched {} workers, waiting", handles.len());
        join_all(handles);
    });
}

fn spawn_pool_worker<'scope, 'env>(
    s: &'scope Scope<'scope, 'env>,
    id: usize,
    job_rx: crossbeam_channel::Receiver<(usize, MatchedFile)>,
    ctx: &'env PipelineContext,
    converter: &'env dyn Converter,
    collector: &'env ResultCollector,
) -> std::io::Result<ScopedJoinHandle<'scope, ()>> {
    thread::Builder::new()
        .name(format!("convert-pool-{id}"))
        .spawn_scoped(s, move || {
            while let Ok((index, file)) = job_rx.recv() {
                process(index, file, ctx, converter, collector);
            }
        })
}

/// Fixed pool of `n` workers draining a bounded queue.
fn fan_out_bounded(
    files: Vec<MatchedFile>,
    ctx: &PipelineContext,
    converter: &dyn Converter,
    collector: &ResultCollector,
    n: usize,
) {
    let workers = n.min(files.len());
    if workers == 0 {
        return;
    }
    thread::scope(|s| {
        let (job_tx, job_rx) = bounded::<(usize, MatchedFile)>(workers * QUEUE_DEPTH_PER_WORKER);
        let mut handles = Vec::with_capacity(workers);
        for id in 0..workers {
            match spawn_pool_worker(s, id, job_rx.clone(), ctx, converter, collector) {
                Ok(h) => handles.push(h),
                Err(e) => warn!("could not spawn pool worker {}: {}", id, e),
            }
        }
        // Workers hold their own clones; dropping ours lets send fail once every worker is gone.
        drop(job_rx);

        for (index, file) in files.into_iter().enumerate() {
            if let Err(SendError((index, file))) = job_tx.send((index, file)) {
                process(index, file, ctx, converter, collector);
            }
        }
        // Dropping the last sender closes the queue so workers exit.
        drop(job_tx);
        join_all(handles);
    });
}
