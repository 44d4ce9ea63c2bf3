use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::Opts;
use crate::types::Extension;

/// Convert every image with one extension under a directory to another format.
#[derive(Clone, Debug, Parser)]
#[command(name = "imgconv", version)]
#[command(about = "Convert images under DIR from one format to another, in parallel.")]
pub struct Cli {
    /// Directory to traverse. Without it, prints this help and exits.
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Source extension (jpg, png, tiff, bmp). Default: jpg.
    #[arg(long = "source_ext", visible_alias = "source-ext", value_name = "EXT", value_parser = Extension::parse)]
    pub source_ext: Option<Extension>,

    /// Target extension (jpg, png, tiff, bmp). Default: png.
    #[arg(long = "target_ext", visible_alias = "target-ext", value_name = "EXT", value_parser = Extension::parse)]
    pub target_ext: Option<Extension>,

    /// Max concurrent conversions. Default: one thread per file.
    #[arg(long, short = 'j', value_name = "N")]
    pub jobs: Option<NonZeroUsize>,

    /// Verbose output.
    #[arg(long, short = 'v', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub verbose: Option<bool>,

    /// Follow symbolic links.
    #[arg(long, short = 'f', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub follow_links: Option<bool>,

    /// Strict mode: fail on the first unreadable path instead of skipping it.
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub strict: Option<bool>,
}

impl Cli {
    /// Apply flags that were given on the command line. Call after defaults and file config.
    pub fn apply_to(&self, opts: &mut Opts) {
        opts.dir = self.dir.clone();
        if let Some(ref ext) = self.source_ext {
            opts.convert.source_ext = ext.clone();
        }
        if let Some(ref ext) = self.target_ext {
            opts.convert.target_ext = ext.clone();
        }
        if self.jobs.is_some() {
            opts.convert.jobs = self.jobs;
        }
        if let Some(v) = self.verbose {
            opts.verbose = v;
        }
        if let Some(v) = self.follow_links {
            opts.convert.follow_links = v;
        }
        if let Some(v) = self.strict {
            opts.convert.strict = v;
        }
    }
}
