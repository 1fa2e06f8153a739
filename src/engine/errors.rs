use thiserror::Error;

/// Errors raised while pulling entries from a single leaf-column cursor.
#[derive(Debug, Error)]
pub enum CursorError {
    #[error("column '{0}' is not a physical INT64 column")]
    NotInt64(String),

    #[error("value buffer exhausted before level buffer in column '{0}'")]
    ValueUnderflow(String),

    #[error("parquet read error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
}

/// Errors that make the rest of the current shard file undecodable. The
/// batch reader logs these and moves on to the next shard.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("required column '{0}' missing from file schema")]
    MissingColumn(String),

    #[error("column '{0}' ended before the declared row count")]
    Truncated(String),

    #[error("sibling list cursors diverged mid-row in '{0}'")]
    LevelDivergence(String),

    #[error("cursor error: {0}")]
    Cursor(#[from] CursorError),

    #[error("parquet read error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
}

/// Errors opening a shard file.
#[derive(Debug, Error)]
pub enum ShardOpenError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parquet open error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
}
