//! Public and internal types for the imgconv API and pipeline.

use std::fmt;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::error::ConvertError;

/// A file extension in canonical form: lower-cased and dot-prefixed (`"JPG"` → `".jpg"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Extension(String);

impl Extension {
    pub fn new(raw: &str) -> Self {
        let lower = raw.to_lowercase();
        match lower.starts_with('.') {
            true => Self(lower),
            false => Self(format!(".{lower}")),
        }
    }

    /// Like [`new`](Self::new), for user input (flags, config file): after an optional leading dot,
    /// only a non-empty run of ASCII letters and digits is accepted.
    pub fn parse(raw: &str) -> Result<Self, String> {
        let bare = raw.strip_prefix('.').unwrap_or(raw);
        if bare.is_empty() || !bare.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(format!(
                "invalid extension '{raw}': expected letters and digits, e.g. jpg or .png"
            ));
        }
        Ok(Self::new(bare))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: the dot prefix is part of the extension.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Extension {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// A discovered file whose extension equals the configured source extension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchedFile {
    /// Path relative to the walked root.
    pub rel_path: PathBuf,
}

/// Recorded result of converting one matched file.
///
/// `index` is the file's position in the walk order, assigned at dispatch. Outcomes are collected in
/// completion order, so sort by `index` (see [`sort_by_index`]) to recover discovery order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionOutcome {
    pub index: usize,
    pub rel_path: PathBuf,
    pub succeeded: bool,
}

/// What a single conversion task produced: the paths it used and the error, if any.
#[derive(Debug)]
pub struct ConversionResult {
    pub source: PathBuf,
    pub target: PathBuf,
    pub error: Option<ConvertError>,
}

impl ConversionResult {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Outcomes of one run, in completion order.
pub type ResultSet = Vec<ConversionOutcome>;

/// Result of [`run`](crate::pipeline::run): either nothing to do (no directory given) or the outcomes.
#[derive(Debug)]
pub enum Run {
    /// No directory was given; the caller should show usage and exit successfully.
    Usage,
    Converted(ResultSet),
}

/// Restore discovery order on a result set.
pub fn sort_by_index(outcomes: &mut [ConversionOutcome]) {
    outcomes.sort_by_key(|o| o.index);
}

/// Counts for the end-of-run log line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl Summary {
    pub fn from_outcomes(outcomes: &[ConversionOutcome]) -> Self {
        let succeeded = outcomes.iter().filter(|o| o.succeeded).count();
        Self {
            total: outcomes.len(),
            succeeded,
            failed: outcomes.len() - succeeded,
        }
    }
}

/// Lib-only options for [`convert_dir`](crate::convert_dir).
#[derive(Clone, Debug)]
pub struct ConvertOpts {
    pub source_ext: Extension,
    pub target_ext: Extension,
    /// Bound the number of concurrent conversions. When None, one thread per matched file.
    pub jobs: Option<NonZeroUsize>,
    /// Follow symbolic links during the walk.
    pub follow_links: bool,
    /// Strict mode: fail on the first unreadable path below the root instead of skipping it.
    pub strict: bool,
}

impl Default for ConvertOpts {
    fn default() -> Self {
        Self {
            source_ext: Extension::new(crate::utils::config::DEFAULT_SOURCE_EXT),
            target_ext: Extension::new(crate::utils::config::DEFAULT_TARGET_EXT),
            jobs: None,
            follow_links: false,
            strict: false,
        }
    }
}

/// Full run configuration (CLI). Use [`ConvertOpts`] for lib.
#[derive(Clone, Debug, Default)]
pub struct Opts {
    /// Directory to walk. None or empty means "show usage".
    pub dir: Option<PathBuf>,
    pub convert: ConvertOpts,
    /// Print one line per converted file and log failures.
    pub report_progress: bool,
    /// Verbose output.
    pub verbose: bool,
}
