use thiserror::Error;

/// Failures the pipeline surfaces to its caller.
///
/// Source problems (missing or malformed files) are absorbed by the
/// extractor and never appear here; an empty table is a defined outcome,
/// not an error. What remains is genuine misuse or breakage.
#[derive(Debug, Error)]
pub enum EtlError {
    /// The pruned source has the wrong number of columns for the positional
    /// rename. Renaming anyway would silently mislabel every field.
    #[error("expected {expected} columns after pruning, found {found}")]
    SchemaMismatch { expected: usize, found: usize },
    #[error("frame error: {0}")]
    Frame(#[from] polars::error::PolarsError),
}

pub type Result<T> = std::result::Result<T, EtlError>;
