// src/presentation.rs
use crate::config::Config;
use crate::error::Result;
use crate::options::{OutputFormat, SortKey};
use linecount_engine::{FileCount, ScanResult};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
struct JsonReport<'a> {
    files: &'a [FileCount],
    total: usize,
}

/// Print the report for `result` to stdout.
///
/// # Errors
/// Fails only if stdout cannot be written.
pub fn print_results(result: &ScanResult, config: &Config) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_results(&mut out, result, config)?;
    out.flush()?;
    Ok(())
}

/// Render the report for `result` into `out`.
///
/// # Errors
/// Propagates write and serialization failures.
pub fn write_results<W: Write>(out: &mut W, result: &ScanResult, config: &Config) -> Result<()> {
    let files = ordered(result, config.sort);
    match config.format {
        OutputFormat::Text => write_text(out, &files, result.total()),
        OutputFormat::Json => write_json(out, &files, result.total()),
    }
}

fn ordered(result: &ScanResult, sort: SortKey) -> Vec<FileCount> {
    let mut files: Vec<FileCount> = result
        .iter()
        .map(|(path, lines)| FileCount {
            path: path.to_path_buf(),
            lines,
        })
        .collect();
    // ScanResult already iterates by path; a stable sort keeps that as tie-break.
    if sort == SortKey::Lines {
        files.sort_by(|a, b| b.lines.cmp(&a.lines));
    }
    files
}

fn write_text<W: Write>(out: &mut W, files: &[FileCount], total: usize) -> Result<()> {
    if files.is_empty() {
        writeln!(out, "No files were read!")?;
        return Ok(());
    }
    for f in files {
        writeln!(out, "File {} contained {} lines", f.path.display(), f.lines)?;
    }
    writeln!(out, "This project has a total length of {total} lines")?;
    Ok(())
}

fn write_json<W: Write>(out: &mut W, files: &[FileCount], total: usize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &JsonReport { files, total })?;
    writeln!(out)?;
    Ok(())
}
