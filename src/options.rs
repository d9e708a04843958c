use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `File <path> contained <N> lines` per file, then the total
    #[default]
    Text,
    /// A single JSON object with `files` and `total`
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum SortKey {
    /// Ascending path
    #[default]
    Path,
    /// Descending line count, ties by path
    Lines,
}
