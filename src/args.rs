// src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use linecount_engine::DEFAULT_SCANNER_BUFFER;

use crate::options::{OutputFormat, SortKey};
use crate::parsers::parse_positive_usize;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "linecount",
    version = crate::VERSION,
    about = "Count the non-blank lines of every file under a directory"
)]
pub struct Args {
    /// Directory to scan (required)
    #[arg(long, value_hint = ValueHint::DirPath, help_heading = "Input")]
    pub dir: Option<PathBuf>,

    /// File extensions to exclude, separated by `;` (no leading dot needed)
    #[arg(
        long = "excludeFiles",
        visible_alias = "exclude-files",
        value_delimiter = ';',
        value_name = "EXTS",
        help_heading = "Filters"
    )]
    pub exclude_files: Vec<String>,

    /// Path substrings to exclude, separated by `;`
    #[arg(
        long = "excludeDirs",
        visible_alias = "exclude-dirs",
        value_delimiter = ';',
        value_name = "DIRS",
        help_heading = "Filters"
    )]
    pub exclude_dirs: Vec<String>,

    /// Longest line, in bytes, a file may contain before the scan fails
    #[arg(
        long = "scannerBuffer",
        visible_alias = "scanner-buffer",
        default_value_t = DEFAULT_SCANNER_BUFFER,
        value_parser = parse_positive_usize,
        value_name = "BYTES",
        help_heading = "Input"
    )]
    pub scanner_buffer: usize,

    /// Number of files counted in parallel (defaults to the CPU count)
    #[arg(long, value_parser = parse_positive_usize, help_heading = "Input")]
    pub jobs: Option<usize>,

    /// Report format
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: OutputFormat,

    /// Order of the per-file listing
    #[arg(long, value_enum, default_value = "path", help_heading = "Output")]
    pub sort: SortKey,

    /// More diagnostics on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet", help_heading = "Logging")]
    pub verbose: u8,

    /// Silence all diagnostics except fatal errors
    #[arg(short, long, help_heading = "Logging")]
    pub quiet: bool,
}
