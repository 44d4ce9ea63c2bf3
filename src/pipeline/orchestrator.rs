use log::debug;
use std::path::Path;

use crate::engine::converter::Converter;
use crate::error::TraversalError;
use crate::types::{ConvertOpts, Opts, ResultSet, Run};

use super::context::PipelineContext;
use super::error_handler::check_for_skipped_paths;
use super::fan_out::execute;
use super::walk::match_files;

/// Main orchestrator: validate → match → fan out → wait → outcomes.
///
/// No directory (None or empty) returns [`Run::Usage`] without touching the filesystem.
/// A traversal failure aborts before any conversion is attempted.
pub fn run(opts: &Opts, converter: &dyn Converter) -> Result<Run, TraversalError> {
    let dir = match opts.dir.as_deref() {
        Some(d) if !d.as_os_str().is_empty() => d,
        _ => return Ok(Run::Usage),
    };
    let outcomes = run_pipeline(dir, &opts.convert, converter, opts.report_progress)?;
    Ok(Run::Converted(outcomes))
}

/// Walk `root`, convert every match concurrently, and return once all conversions are done.
pub fn run_pipeline(
    root: &Path,
    opts: &ConvertOpts,
    converter: &dyn Converter,
    report_progress: bool,
) -> Result<ResultSet, TraversalError> {
    let ctx = PipelineContext::new(root, opts, report_progress);
    let files = match_files(&ctx)?;
    check_for_skipped_paths(&ctx);

    debug!(
        "{} -> {} with converter '{}'",
        ctx.source_ext,
        ctx.target_ext,
        converter.name()
    );
    let outcomes = execute(files, &ctx, converter, opts.jobs);
    debug!(
        "main: all workers joined, total {} outcomes",
        outcomes.len()
    );
    Ok(outcomes)
}
