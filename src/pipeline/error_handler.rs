use log::{debug, warn};
use std::sync::PoisonError;

use super::context::PipelineContext;

/// Log paths the walk could not read (non-strict mode). Strict mode never gets here with skips:
/// the walk fails on the first error instead.
pub fn check_for_skipped_paths(ctx: &PipelineContext) {
    let skipped = ctx.skipped_count();
    if skipped == 0 {
        return;
    }
    warn!(
        "Skipped {} paths due to permission errors or access issues",
        skipped
    );
    let paths = ctx
        .skipped_paths
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    for (p, msg) in paths.iter() {
        debug!("  skipped: {} ({})", p.display(), msg);
    }
}
