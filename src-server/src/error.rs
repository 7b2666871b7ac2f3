use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced to API clients. Every variant maps to a 400 response
/// carrying an `{ error, message }` body; upstream and network faults are
/// deliberately reported with the same status as caller mistakes.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    MissingSymbols(String),
    #[error("{0}")]
    PriceFetchFailed(String),
    #[error("{0}")]
    AllPricesFailed(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::MissingSymbols(_) => "MISSING_SYMBOLS",
            ApiError::PriceFetchFailed(_) => "PRICE_FETCH_FAILED",
            ApiError::AllPricesFailed(_) => "ALL_PRICES_FAILED",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: self.code(),
            message: self.to_string(),
        });
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
