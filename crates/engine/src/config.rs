use crate::error::EngineError;
use derive_builder::Builder;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Default maximum line length, in bytes, the counter can buffer.
pub const DEFAULT_SCANNER_BUFFER: usize = 64_000;

/// Path and extension exclusions, fixed once the scan starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionRules {
    dir_substrings: BTreeSet<String>,
    extensions: BTreeSet<String>,
}

impl ExclusionRules {
    /// Build rules from raw list items.
    ///
    /// Items are trimmed and empty items are dropped, so an unset flag and
    /// `"a;;b"` never yield an empty rule. A single leading `.` on an
    /// extension is ignored.
    pub fn new<D, E>(dir_substrings: D, extensions: E) -> Self
    where
        D: IntoIterator,
        D::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        let dir_substrings = dir_substrings
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let extensions = extensions
            .into_iter()
            .map(|s| {
                let s = s.as_ref().trim();
                s.strip_prefix('.').unwrap_or(s).to_string()
            })
            .filter(|s| !s.is_empty())
            .collect();
        Self {
            dir_substrings,
            extensions,
        }
    }

    pub fn dir_substrings(&self) -> impl Iterator<Item = &str> {
        self.dir_substrings.iter().map(String::as_str)
    }

    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }

    /// True if any exclusion substring occurs anywhere in `path`.
    #[must_use]
    pub fn excludes_path(&self, path: &Path) -> bool {
        if self.dir_substrings.is_empty() {
            return false;
        }
        let path = path.to_string_lossy();
        self.dir_substrings.iter().any(|s| path.contains(s.as_str()))
    }

    /// True if the extension of `file_name` is on the exclusion list.
    /// Names without a `.` are never excluded.
    #[must_use]
    pub fn excludes_file_name(&self, file_name: &str) -> bool {
        extension_of(file_name).is_some_and(|ext| self.extensions.contains(ext))
    }
}

/// Everything after the first `.` of a file name.
///
/// `main.go` gives `go`, `a.tar.gz` gives `tar.gz`, `Makefile.` gives an
/// empty string and `Makefile` gives `None`.
#[must_use]
pub fn extension_of(file_name: &str) -> Option<&str> {
    file_name.split_once('.').map(|(_, ext)| ext)
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate", error = "EngineError"))]
pub struct ScanConfig {
    pub root: PathBuf,
    #[builder(default)]
    pub rules: ExclusionRules,
    #[builder(default = "DEFAULT_SCANNER_BUFFER")]
    pub buffer_size: usize,
    #[builder(default = "num_cpus::get()")]
    pub threads: usize,
}

impl ScanConfigBuilder {
    fn validate(&self) -> Result<(), EngineError> {
        if self.buffer_size == Some(0) {
            return Err(EngineError::Config(
                "scanner buffer must be at least 1 byte".to_string(),
            ));
        }
        if self.threads == Some(0) {
            return Err(EngineError::Config(
                "at least one worker thread is required".to_string(),
            ));
        }
        Ok(())
    }
}

impl From<derive_builder::UninitializedFieldError> for EngineError {
    fn from(err: derive_builder::UninitializedFieldError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(dirs: &[&str], exts: &[&str]) -> ExclusionRules {
        ExclusionRules::new(dirs.iter().copied(), exts.iter().copied())
    }

    #[test]
    fn extension_is_text_after_first_dot() {
        assert_eq!(extension_of("main.go"), Some("go"));
        assert_eq!(extension_of("a.tar.gz"), Some("tar.gz"));
        assert_eq!(extension_of(".bashrc"), Some("bashrc"));
        assert_eq!(extension_of("Makefile."), Some(""));
        assert_eq!(extension_of("Makefile"), None);
    }

    #[test]
    fn excludes_exact_extension_only() {
        let r = rules(&[], &["go"]);
        assert!(r.excludes_file_name("main.go"));
        assert!(!r.excludes_file_name("main.goo"));
        assert!(!r.excludes_file_name("main.rs"));
    }

    #[test]
    fn files_without_dot_are_never_excluded() {
        let r = rules(&[], &["go", "Makefile", ""]);
        assert!(!r.excludes_file_name("Makefile"));
    }

    #[test]
    fn empty_items_are_dropped() {
        let r = rules(&["", " "], &["", "go", " ", "  txt "]);
        assert_eq!(r.dir_substrings().count(), 0);
        assert_eq!(r.extensions().collect::<Vec<_>>(), vec!["go", "txt"]);
        // trailing dot yields an empty extension, which must not match anything
        assert!(!r.excludes_file_name("Makefile."));
    }

    #[test]
    fn leading_dot_on_extension_is_ignored() {
        let r = rules(&[], &[".md"]);
        assert!(r.excludes_file_name("README.md"));
    }

    #[test]
    fn unset_lists_exclude_nothing() {
        let r = ExclusionRules::default();
        assert!(!r.excludes_path(Path::new("/project/None/a.go")));
        assert!(!r.excludes_file_name("a.None"));
    }

    #[test]
    fn dir_substring_matches_anywhere_in_path() {
        let r = rules(&["vendor"], &[]);
        assert!(r.excludes_path(Path::new("/project/vendor/lib.go")));
        assert!(r.excludes_path(Path::new("/project/vendored/a.go")));
        assert!(!r.excludes_path(Path::new("/project/src/main.go")));
    }

    #[test]
    fn builder_applies_defaults() {
        let config = ScanConfigBuilder::default().root("src").build().unwrap();
        assert_eq!(config.buffer_size, DEFAULT_SCANNER_BUFFER);
        assert!(config.threads >= 1);
        assert_eq!(config.rules, ExclusionRules::default());
    }

    #[test]
    fn builder_rejects_zero_buffer() {
        let err = ScanConfigBuilder::default()
            .root("src")
            .buffer_size(0usize)
            .build()
            .unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn builder_requires_root() {
        let err = ScanConfigBuilder::default().build().unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }
}
