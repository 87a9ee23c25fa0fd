use thiserror::Error;

/// Core error type shared across dummyforge crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The schema or sample document is not valid JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// The schema or sample document is not valid YAML.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The document parsed but does not have the expected shape.
    #[error("invalid document: {0}")]
    InvalidDocument(String),
    #[error("unsupported locale: {0}")]
    UnsupportedLocale(String),
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Convenience alias for results returned by dummyforge crates.
pub type Result<T> = std::result::Result<T, Error>;
