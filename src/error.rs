use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookshelfError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logging error: {0}")]
    Logging(#[from] tracing_appender::rolling::InitError),

    #[error("Query returned {0} error(s)")]
    Query(usize),

    #[error("No query given. Pass a query string, '-' for stdin, or --file <PATH>.")]
    MissingQuery,
}

pub type Result<T> = std::result::Result<T, BookshelfError>;
