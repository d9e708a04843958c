// src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod parsers;
pub mod presentation;

use crate::args::Args;
use crate::config::Config;
use crate::error::Result;
use log::debug;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Resolve `args`, scan the tree and print the report.
///
/// # Errors
/// Returns the usage, traversal, counting or output error that stopped the run.
pub fn run(args: Args) -> Result<()> {
    let config = Config::try_from(args)?;
    debug!("resolved configuration: {config:?}");
    let result = linecount_engine::run(&config.scan)?;
    presentation::print_results(&result, &config)
}
