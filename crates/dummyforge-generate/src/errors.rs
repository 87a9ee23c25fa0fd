use thiserror::Error;

/// Errors emitted while serializing generated records.
///
/// Generation itself never fails; these only surface from the encoders.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
