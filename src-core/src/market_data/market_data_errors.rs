use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarketDataError {
    #[error("Network error: {0}")]
    NetworkError(reqwest::Error),

    #[error("Request timed out")]
    Timeout,

    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Provider error: {0}")]
    ProviderError(String),
}

impl From<reqwest::Error> for MarketDataError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            MarketDataError::Timeout
        } else {
            MarketDataError::NetworkError(error)
        }
    }
}
