//! Pipeline context: settings and shared state read by the walk and by every worker.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::types::{ConvertOpts, Extension};

use super::report::{Reporter, report_result};

/// Shared context for one run. Built by the orchestrator and borrowed by the walk and all workers.
pub struct PipelineContext {
    pub root: PathBuf,
    pub source_ext: Extension,
    pub target_ext: Extension,
    pub strict: bool,
    pub follow_links: bool,
    /// Called after each file's outcome is recorded. None keeps the run silent.
    pub reporter: Option<Reporter>,
    /// Paths below the root that could not be read (non-strict mode), with the error message.
    pub skipped_paths: Mutex<Vec<(PathBuf, String)>>,
}

impl PipelineContext {
    pub fn new(root: &Path, opts: &ConvertOpts, report_progress: bool) -> Self {
        Self {
            root: root.to_path_buf(),
            source_ext: opts.source_ext.clone(),
            target_ext: opts.target_ext.clone(),
            strict: opts.strict,
            follow_links: opts.follow_links,
            reporter: report_progress.then_some(report_result as Reporter),
            skipped_paths: Mutex::new(Vec::new()),
        }
    }

    pub fn record_skipped(&self, path: PathBuf, msg: String) {
        self.skipped_paths
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((path, msg));
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped_paths
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
