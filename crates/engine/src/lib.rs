// crates/engine/src/lib.rs
use log::{debug, info};
use rayon::prelude::*;
use std::path::PathBuf;

pub mod config;
pub mod counter;
pub mod error;
pub mod filesystem;
pub mod stats;

pub use crate::config::{DEFAULT_SCANNER_BUFFER, ExclusionRules, ScanConfig, ScanConfigBuilder};
pub use crate::error::{EngineError, Result};
pub use crate::stats::{FileCount, ScanResult};

/// Count the non-blank lines of every accepted file under `config.root`.
///
/// The directory walk runs on its own thread and feeds a bounded channel;
/// files are counted in parallel on a dedicated rayon pool and the counts
/// are folded into a [`ScanResult`] by the calling thread.
///
/// # Errors
///
/// The first failure aborts the run: a counting error (open, read, oversized
/// line) takes precedence over a traversal error. No partial result is returned.
pub fn run(config: &ScanConfig) -> Result<ScanResult> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .map_err(|e| EngineError::Config(format!("failed to build worker pool: {e}")))?;
    let (tx, rx) = crossbeam_channel::bounded::<PathBuf>(config.threads.saturating_mul(4));

    info!(
        "scanning {} with {} worker(s), buffer {} bytes",
        config.root.display(),
        config.threads,
        config.buffer_size
    );

    let (counted, walked) = std::thread::scope(|scope| {
        let walker = scope.spawn(move || filesystem::walk(&config.root, &config.rules, &tx));

        let counted = pool.install(|| {
            rx.into_iter()
                .par_bridge()
                .map(|path| {
                    let lines = counter::count_file(&path, config.buffer_size)?;
                    debug!("{} -> {lines}", path.display());
                    Ok(FileCount { path, lines })
                })
                .collect::<Result<Vec<_>>>()
        });

        let walked = walker
            .join()
            .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
        (counted, walked)
    });

    let files = counted?;
    walked?;

    let result: ScanResult = files.into_iter().collect();
    info!("counted {} file(s), {} line(s)", result.len(), result.total());
    Ok(result)
}
