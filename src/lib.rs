//! imgconv: recursive, parallel image format conversion

pub mod engine;
pub mod error;
pub mod pipeline;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use error::{ConvertError, TraversalError};
pub use types::*;

pub use engine::converter::{Converter, ImageConverter};

use log::debug;
use std::path::Path;

/// Convert every file under `root` whose extension matches `opts.source_ext`, using `converter`.
///
/// Returns one [`ConversionOutcome`] per matched file, in completion order (use [`sort_by_index`]
/// for walk order). Per-file failures are outcomes with `succeeded == false`; only a failure to
/// walk `root` is an error. Nothing is printed.
///
/// ```ignore
/// let opts = imgconv::ConvertOpts { jobs: std::num::NonZeroUsize::new(8), ..Default::default() };
/// let outcomes = imgconv::convert_dir(Path::new("photos"), &opts, &imgconv::ImageConverter)?;
/// ```
pub fn convert_dir(
    root: &Path,
    opts: &ConvertOpts,
    converter: &dyn Converter,
) -> Result<ResultSet, TraversalError> {
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_uppercase(),
        opts
    );
    pipeline::run_pipeline(root, opts, converter, false)
}
