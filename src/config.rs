// src/config.rs
use crate::args::Args;
use crate::error::{AppError, Result};
use crate::options::{OutputFormat, SortKey};
use linecount_engine::{ExclusionRules, ScanConfig, ScanConfigBuilder};

/// Resolved run configuration: the engine settings plus report options.
#[derive(Debug, Clone)]
pub struct Config {
    pub scan: ScanConfig,
    pub format: OutputFormat,
    pub sort: SortKey,
}

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self> {
        let root = args.dir.ok_or_else(|| {
            AppError::Usage("No directory was given!\nRun --help to see all options".to_string())
        })?;

        let rules = ExclusionRules::new(&args.exclude_dirs, &args.exclude_files);

        let mut builder = ScanConfigBuilder::default();
        builder
            .root(root)
            .rules(rules)
            .buffer_size(args.scanner_buffer);
        if let Some(jobs) = args.jobs {
            builder.threads(jobs);
        }

        Ok(Self {
            scan: builder.build()?,
            format: args.format,
            sort: args.sort,
        })
    }
}
