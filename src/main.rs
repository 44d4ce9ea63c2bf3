//! imgconv CLI: convert every image of one format under a directory to another format.

use anyhow::Result;
use clap::Parser;
use imgconv::engine::arg_parser::Cli;
use imgconv::engine::handle_run;
use std::time::Instant;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
