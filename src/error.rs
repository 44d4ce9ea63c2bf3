//! Error types for imgconv.
//!
//! Two families with different propagation:
//! - [`TraversalError`] is fatal and aborts the run before any conversion.
//! - [`ConvertError`] belongs to a single file; it is recorded in that file's outcome and never
//!   escapes the worker that produced it.

use std::path::PathBuf;
use thiserror::Error;

/// The directory tree could not be walked.
#[derive(Error, Debug)]
pub enum TraversalError {
    /// Root does not exist or cannot be read.
    #[error("cannot read directory {path}: {source}")]
    Root {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// The walk hit an error on the root, or on any path in strict mode.
    #[error("walk failed: {msg}")]
    Walk { msg: String, path: Option<PathBuf> },
}

/// A single file failed to convert.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("{path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("unsupported target format: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("{path} does not end with {ext}")]
    ExtensionMismatch { path: PathBuf, ext: String },

    #[error("converter panicked on {path}: {msg}")]
    Panicked { path: PathBuf, msg: String },

    /// Free-form failure for converters that are not backed by the `image` crate.
    #[error("{0}")]
    Failed(String),
}
