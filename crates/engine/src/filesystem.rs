use crate::config::ExclusionRules;
use crate::error::{EngineError, Result};
use crossbeam_channel::Sender;
use ignore::WalkBuilder;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Sequential recursive walk of `root`, sending every countable file to `tx`.
///
/// Directories whose path contains an exclusion substring are pruned.
/// Hidden files and ignore files get no special treatment. Symbolic links
/// are counted only when they point at a regular file. The walk stops
/// quietly once the receiving side hangs up.
///
/// # Errors
/// Any traversal error (unreadable directory, vanished path) aborts the walk,
/// as does a dangling symbolic link.
pub fn walk(root: &Path, rules: &ExclusionRules, tx: &Sender<PathBuf>) -> Result<()> {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    let prune = rules.clone();
    builder.filter_entry(move |entry| {
        if prune.excludes_path(entry.path()) {
            debug!("excluded path {}", entry.path().display());
            return false;
        }
        true
    });

    for entry in builder.build() {
        let entry = entry?;
        let Some(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            continue;
        }
        // The root entry bypasses filter_entry.
        if rules.excludes_path(entry.path()) {
            continue;
        }
        if rules.excludes_file_name(&entry.file_name().to_string_lossy()) {
            debug!("excluded extension {}", entry.path().display());
            continue;
        }
        if file_type.is_symlink() {
            // Links are not followed, but a link to a regular file is counted.
            let target = fs::metadata(entry.path()).map_err(|e| EngineError::FileOpen {
                path: entry.path().to_path_buf(),
                source: e,
            })?;
            if !target.is_file() {
                debug!("skipping link to non-file {}", entry.path().display());
                continue;
            }
        } else if !file_type.is_file() {
            debug!("skipping special file {}", entry.path().display());
            continue;
        }
        if tx.send(entry.into_path()).is_err() {
            debug!("result channel closed, stopping walk");
            break;
        }
    }

    Ok(())
}
