use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("frame error: {0}")]
    Frame(#[from] polars::error::PolarsError),
}

pub type Result<T> = std::result::Result<T, StoreError>;
