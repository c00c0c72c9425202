use thiserror::Error;

#[derive(Debug, Error)]
pub enum NutriError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),
    #[error("No match: {0}")]
    NoMatch(String),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, NutriError>;
