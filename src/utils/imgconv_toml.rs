//! Load `.imgconv.toml` from the target directory (CLI only). Lib callers pass
//! [`ConvertOpts`](crate::ConvertOpts) directly.

use serde::Deserialize;
use std::num::NonZeroUsize;
use std::path::Path;

use crate::Opts;
use crate::types::Extension;
use crate::utils::config::PackagePaths;

#[derive(Debug, Default, Deserialize)]
pub struct ImgconvToml {
    #[serde(default)]
    settings: SettingsSection,
}

#[derive(Debug, Default, Deserialize)]
struct SettingsSection {
    source_ext: Option<String>,
    target_ext: Option<String>,
    jobs: Option<usize>,
    follow_links: Option<bool>,
    strict: Option<bool>,
}

/// Load the config file from `dir` if present. Returns None if the file is missing, unreadable or
/// malformed (malformed files are warned about).
pub fn load_imgconv_toml(dir: &Path) -> Option<ImgconvToml> {
    let path = dir.join(PackagePaths::get().config_filename());
    let s = std::fs::read_to_string(&path).ok()?;
    parse_imgconv_toml(&s)
        .map_err(|e| log::warn!("{}: {}", path.display(), e))
        .ok()
}

pub fn parse_imgconv_toml(s: &str) -> Result<ImgconvToml, toml::de::Error> {
    toml::from_str(s)
}

fn parse_ext(raw: &str) -> Option<Extension> {
    Extension::parse(raw)
        .map_err(|e| log::warn!("{}: {}", PackagePaths::get().config_filename(), e))
        .ok()
}

/// Overwrite opts field from file when present.
macro_rules! apply_file_opt {
    ($section:expr, $opts:expr, $field:ident) => {
        if let Some(v) = $section.$field {
            $opts.$field = v;
        }
    };
}

/// Apply file config to opts (only fields present in the file). Call before applying CLI flags.
/// Verbosity is CLI-only: the logger is set up before the file is read.
pub fn apply_file_to_opts(file: &ImgconvToml, opts: &mut Opts) {
    let s = &file.settings;
    if let Some(ext) = s.source_ext.as_deref().and_then(parse_ext) {
        opts.convert.source_ext = ext;
    }
    if let Some(ext) = s.target_ext.as_deref().and_then(parse_ext) {
        opts.convert.target_ext = ext;
    }
    if let Some(n) = s.jobs {
        // jobs = 0 in the file means unbounded
        opts.convert.jobs = NonZeroUsize::new(n);
    }
    apply_file_opt!(s, opts.convert, follow_links);
    apply_file_opt!(s, opts.convert, strict);
}
