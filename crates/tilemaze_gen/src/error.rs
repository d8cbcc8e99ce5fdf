use thiserror::Error;

/// Errors that can occur when configuring a generator.
///
/// Generation itself never fails; only building a generator can.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<std::io::Error> for GeneratorError {
    fn from(err: std::io::Error) -> Self {
        GeneratorError::IoError(err.to_string())
    }
}

impl From<toml::de::Error> for GeneratorError {
    fn from(err: toml::de::Error) -> Self {
        GeneratorError::ParseError(err.to_string())
    }
}
