//! Application configuration constants.

use std::sync::OnceLock;

// ---- Package / paths (from CARGO_PKG_NAME, cached) ----

/// Package-derived names: built once from `CARGO_PKG_NAME`, then cached.
pub struct PackagePaths {
    config_filename: String,
}

static PACKAGE_PATHS: OnceLock<PackagePaths> = OnceLock::new();

impl PackagePaths {
    /// Build and cache names from `CARGO_PKG_NAME`. Called once on first use.
    pub fn get() -> &'static PackagePaths {
        PACKAGE_PATHS.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            PackagePaths {
                config_filename: format!(".{pkg}.toml"),
            }
        })
    }

    /// Per-directory config file, looked up in DIR (e.g. `.imgconv.toml`).
    pub fn config_filename(&self) -> &str {
        &self.config_filename
    }
}

// ---- Extensions ----

pub const DEFAULT_SOURCE_EXT: &str = "jpg";
pub const DEFAULT_TARGET_EXT: &str = "png";

/// Extensions the bundled converter can read and write (without the dot).
pub const SUPPORTED_EXTS: &[&str] = &["jpg", "jpeg", "png", "tif", "tiff", "bmp"];

// ---- Workers ----

/// Bounded-mode queue capacity per worker. The dispatcher blocks once the queue is this deep.
pub const QUEUE_DEPTH_PER_WORKER: usize = 4;
