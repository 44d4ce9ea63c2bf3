//! Walk the tree and collect files matching the source extension.

use log::{debug, warn};
use std::path::PathBuf;
use walkdir::WalkDir;

use crate::engine::tools::{has_extension, path_relative_to};
use crate::error::TraversalError;
use crate::types::MatchedFile;

use super::context::PipelineContext;

/// One result from a directory walk: a file to consider, a directory (never matched), or an error
/// with optional path.
pub enum WalkOutcome {
    File(PathBuf),
    Dir,
    Err {
        msg: String,
        path: Option<PathBuf>,
        depth: usize,
    },
}

/// Convert a walkdir result into [`WalkOutcome`].
pub fn to_outcome_walkdir(r: Result<walkdir::DirEntry, walkdir::Error>) -> WalkOutcome {
    match r {
        Ok(entry) if entry.file_type().is_dir() => WalkOutcome::Dir,
        Ok(entry) => WalkOutcome::File(entry.into_path()),
        Err(err) => WalkOutcome::Err {
            msg: format!("{}", err),
            path: err.path().map(PathBuf::from),
            depth: err.depth(),
        },
    }
}

/// Fail early if the root is missing, unreadable or not a directory.
pub fn check_root(ctx: &PipelineContext) -> Result<(), TraversalError> {
    let root_err = |source| TraversalError::Root {
        path: ctx.root.clone(),
        source,
    };
    let meta = std::fs::metadata(&ctx.root).map_err(root_err)?;
    if !meta.is_dir() {
        return Err(TraversalError::NotADirectory {
            path: ctx.root.clone(),
        });
    }
    std::fs::read_dir(&ctx.root).map_err(root_err)?;
    Ok(())
}

/// Walk `ctx.root` depth-first, sorted by file name within each directory, and return every file
/// whose lower-cased extension equals `ctx.source_ext`, as paths relative to the root.
///
/// The order is deterministic for an unchanged tree; a file's position becomes its outcome index.
pub fn match_files(ctx: &PipelineContext) -> Result<Vec<MatchedFile>, TraversalError> {
    check_root(ctx)?;
    let iter = WalkDir::new(&ctx.root)
        .follow_links(ctx.follow_links)
        .sort_by_file_name()
        .into_iter()
        .map(to_outcome_walkdir);
    run_walk_loop(ctx, iter)
}

/// Consume `iter`, keep matching files, handle errors (strict → fail on the first one; else log
/// and push to `skipped_paths`). An error on the root itself is always fatal.
pub fn run_walk_loop<I>(ctx: &PipelineContext, iter: I) -> Result<Vec<MatchedFile>, TraversalError>
where
    I: Iterator<Item = WalkOutcome>,
{
    let mut files = Vec::new();
    for outcome in iter {
        match outcome {
            WalkOutcome::Dir => {}
            WalkOutcome::File(path) => {
                let Some(rel_path) = path_relative_to(&path, &ctx.root) else {
                    continue;
                };
                if rel_path.file_name().and_then(|n| n.to_str()).is_none() {
                    debug!("Skipping non UTF-8 file name: {}", rel_path.display());
                    continue;
                }
                if has_extension(&rel_path, &ctx.source_ext) {
                    files.push(MatchedFile { rel_path });
                }
            }
            WalkOutcome::Err { msg, path, depth } => {
                if ctx.strict || depth == 0 {
                    return Err(TraversalError::Walk { msg, path });
                }
                warn!("Permission denied or error accessing path: {}", msg);
                let to_push = path.unwrap_or_else(|| PathBuf::from("<no-path>"));
                ctx.record_skipped(to_push, msg);
            }
        }
    }
    debug!(
        "walk done: {} files match {} under {}",
        files.len(),
        ctx.source_ext,
        ctx.root.display()
    );
    Ok(files)
}
