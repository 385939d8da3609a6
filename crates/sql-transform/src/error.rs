use model::schema::ProjectionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("identifier quote must be 1 or 2 characters, got '{value}' ({len} characters)")]
    InvalidIdentifierQuote { value: String, len: usize },

    #[error("table name must not be empty")]
    EmptyTableName,

    #[error("unknown SQL dialect: {0}")]
    UnknownDialect(String),

    #[error("failed to parse transformer settings: {0}")]
    Settings(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("projector for field '{field}' failed on row {row}: {source}")]
    Projection {
        field: String,
        row: usize,
        #[source]
        source: ProjectionError,
    },
}
