use crate::error::{EngineError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Count the non-blank lines of the file at `path`.
///
/// `buffer_size` bounds the length of a single line (terminator included);
/// a longer line is reported as [`EngineError::LineTooLong`].
///
/// # Errors
/// Fails when the file cannot be opened or read, or holds an oversized line.
pub fn count_file(path: &Path, buffer_size: usize) -> Result<usize> {
    let file = File::open(path).map_err(|e| EngineError::FileOpen {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = BufReader::with_capacity(buffer_size.min(64 * 1024), file);
    count_lines(&mut reader, buffer_size, path)
}

/// Line scanning loop, split out so it works on any reader.
pub(crate) fn count_lines<R: BufRead>(reader: &mut R, buffer_size: usize, path: &Path) -> Result<usize> {
    let limit = buffer_size as u64;
    let mut line = Vec::new();
    let mut count = 0;

    loop {
        line.clear();
        let read = reader
            .by_ref()
            .take(limit)
            .read_until(b'\n', &mut line)
            .map_err(|e| EngineError::FileRead {
                path: path.to_path_buf(),
                source: e,
            })?;
        if read == 0 {
            break;
        }
        // A full buffer without a newline means the line did not fit.
        if read == buffer_size && line.last() != Some(&b'\n') {
            return Err(EngineError::LineTooLong {
                path: path.to_path_buf(),
                limit: buffer_size,
            });
        }
        if !strip_terminator(&line).is_empty() {
            count += 1;
        }
    }

    Ok(count)
}

fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    fn count_str(content: &str, buffer_size: usize) -> Result<usize> {
        count_lines(&mut Cursor::new(content.as_bytes()), buffer_size, Path::new("mem"))
    }

    #[test]
    fn skips_empty_lines() {
        assert_eq!(count_str("a\n\nb\n\n\nc", 64).unwrap(), 3);
        assert_eq!(count_str("\n\n\n", 64).unwrap(), 0);
        assert_eq!(count_str("", 64).unwrap(), 0);
    }

    #[test]
    fn crlf_only_line_is_blank() {
        assert_eq!(count_str("a\r\n\r\nb\r\n", 64).unwrap(), 2);
    }

    #[test]
    fn whitespace_only_line_counts() {
        assert_eq!(count_str("  \n\t\n", 64).unwrap(), 2);
    }

    #[test]
    fn final_line_without_newline_counts() {
        assert_eq!(count_str("one\ntwo", 64).unwrap(), 2);
    }

    #[test]
    fn line_that_fits_exactly_is_accepted() {
        // four content bytes plus newline fill a five byte buffer
        assert_eq!(count_str("abcd\nab\n", 5).unwrap(), 2);
        assert_eq!(count_str("abcd", 5).unwrap(), 1);
    }

    #[test]
    fn oversized_line_is_fatal() {
        let err = count_str("abcde\n", 5).unwrap_err();
        assert!(matches!(err, EngineError::LineTooLong { limit: 5, .. }));

        let err = count_str("ok\nabcdefghij", 5).unwrap_err();
        assert!(matches!(err, EngineError::LineTooLong { .. }));
    }

    #[test]
    fn counts_file_on_disk() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "package main\n\nfunc main() {{\n}}\n").unwrap();
        assert_eq!(count_file(file.path(), 64_000).unwrap(), 3);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone.txt");
        let err = count_file(&missing, 64_000).unwrap_err();
        match err {
            EngineError::FileOpen { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }
}
