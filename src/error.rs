use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;

/// Every failure an operation can surface to the caller. Kinds are
/// distinguishable so callers can branch instead of matching on message text.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ApiError {
    #[display(fmt = "{} not found", _0)]
    NotFound(&'static str),

    #[display(fmt = "{}", _0)]
    InvalidDateRange(&'static str),

    #[display(fmt = "Not enough leave balance: requested {} day(s), {} available", requested, available)]
    InsufficientBalance { requested: i64, available: i64 },

    #[display(fmt = "Overlapping leave request")]
    OverlappingRequest,
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "not_found",
            ApiError::InvalidDateRange(_) => "invalid_date_range",
            ApiError::InsufficientBalance { .. } => "insufficient_balance",
            ApiError::OverlappingRequest => "overlapping_request",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidDateRange(_) => StatusCode::BAD_REQUEST,
            ApiError::InsufficientBalance { .. } => StatusCode::BAD_REQUEST,
            ApiError::OverlappingRequest => StatusCode::CONFLICT,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.kind(),
            "message": self.to_string(),
        }))
    }
}
