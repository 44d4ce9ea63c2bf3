//! CLI command handler: build options, run the pipeline, log the summary.

use anyhow::{Context, Result};
use clap::CommandFactory;
use log::{debug, info, warn};

use crate::Opts;
use crate::engine::arg_parser::Cli;
use crate::engine::converter::ImageConverter;
use crate::pipeline;
use crate::types::{Extension, Run, Summary};
use crate::utils::config::SUPPORTED_EXTS;
use crate::utils::{apply_file_to_opts, load_imgconv_toml, setup_logging};

/// Defaults, then `.imgconv.toml` from DIR, then CLI flags.
pub fn setup_opts(cli: &Cli) -> Opts {
    setup_logging(cli.verbose.unwrap_or(false));
    let mut opts = Opts {
        report_progress: true,
        ..Default::default()
    };
    if let Some(dir) = cli.dir.as_deref()
        && let Some(file) = load_imgconv_toml(dir)
    {
        debug!("Loaded config from {}", dir.display());
        apply_file_to_opts(&file, &mut opts);
    }
    cli.apply_to(&mut opts);
    opts
}

fn warn_if_unsupported(ext: &Extension) {
    let bare = ext.as_str().trim_start_matches('.');
    if !SUPPORTED_EXTS.contains(&bare) {
        warn!("No bundled codec for {}; those conversions will fail", ext);
    }
}

/// Run a conversion. Per-file failures are reported but never turn into an error: only a
/// traversal failure makes this return `Err` (and the process exit non-zero).
pub fn handle_run(cli: &Cli) -> Result<()> {
    let opts = setup_opts(cli);
    debug!("{} CONFIG:{:#?}", env!("CARGO_PKG_NAME").to_uppercase(), opts);
    warn_if_unsupported(&opts.convert.source_ext);
    warn_if_unsupported(&opts.convert.target_ext);

    let converter = ImageConverter::new();
    match pipeline::run(&opts, &converter).context("directory traversal failed")? {
        Run::Usage => {
            Cli::command()
                .print_help()
                .context("print usage")?;
            println!();
        }
        Run::Converted(outcomes) => {
            let summary = Summary::from_outcomes(&outcomes);
            info!(
                "Converted {}/{} files ({} failed)",
                summary.succeeded, summary.total, summary.failed
            );
        }
    }
    Ok(())
}
