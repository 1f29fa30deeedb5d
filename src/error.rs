use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::response::ErrorBody;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UidError {
    #[error("UID parameter is required.")]
    Missing,
    #[error("UID must contain only digits.")]
    NotDigits,
    #[error("UID is too short.")]
    TooShort,
}

/// Why a request was turned away before any upstream call.
#[derive(Debug, Error)]
pub enum RejectReason {
    #[error("Invalid or missing API key.")]
    InvalidApiKey,
    #[error(transparent)]
    InvalidUid(#[from] UidError),
}

impl RejectReason {
    pub fn status(&self) -> StatusCode {
        match self {
            RejectReason::InvalidApiKey => StatusCode::UNAUTHORIZED,
            RejectReason::InvalidUid(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// A rejection rendered as `{credit, error}`.
#[derive(Debug)]
pub struct Rejection {
    pub credit: String,
    pub reason: RejectReason,
}

impl Rejection {
    pub fn new(credit: impl Into<String>, reason: impl Into<RejectReason>) -> Self {
        Self {
            credit: credit.into(),
            reason: reason.into(),
        }
    }
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        let status = self.reason.status();
        let body = ErrorBody {
            credit: self.credit,
            error: self.reason.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum BanCheckError {
    #[error("Ban check timeout")]
    Timeout,
    #[error("Ban check failed: {description}")]
    Failed {
        status: StatusCode,
        description: String,
    },
    #[error("Internal error")]
    Internal,
}

impl BanCheckError {
    pub fn status(&self) -> StatusCode {
        match self {
            BanCheckError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            BanCheckError::Failed { status, .. } => *status,
            BanCheckError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return BanCheckError::Timeout;
        }
        if err.is_builder() {
            return BanCheckError::Internal;
        }
        BanCheckError::Failed {
            status: err.status().unwrap_or(StatusCode::BAD_GATEWAY),
            description: err.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum PlayerInfoError {
    #[error("player info API returned {0}")]
    Status(StatusCode),
    #[error("player info request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("player info response is not valid JSON: {0}")]
    Body(#[from] serde_json::Error),
    #[error("player info response has unexpected shape")]
    Shape,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uid_messages() {
        assert_eq!(UidError::Missing.to_string(), "UID parameter is required.");
        assert_eq!(UidError::NotDigits.to_string(), "UID must contain only digits.");
        assert_eq!(UidError::TooShort.to_string(), "UID is too short.");
    }

    #[test]
    fn reject_reason_status() {
        assert_eq!(RejectReason::InvalidApiKey.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            RejectReason::from(UidError::TooShort).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RejectReason::from(UidError::NotDigits).to_string(),
            "UID must contain only digits."
        );
    }

    #[test]
    fn ban_check_error_messages_and_status() {
        assert_eq!(BanCheckError::Timeout.to_string(), "Ban check timeout");
        assert_eq!(BanCheckError::Timeout.status(), StatusCode::GATEWAY_TIMEOUT);

        let failed = BanCheckError::Failed {
            status: StatusCode::FORBIDDEN,
            description: "HTTP status client error (403 Forbidden)".to_string(),
        };
        assert_eq!(failed.status(), StatusCode::FORBIDDEN);
        assert!(failed.to_string().starts_with("Ban check failed: "));

        assert_eq!(BanCheckError::Internal.to_string(), "Internal error");
        assert_eq!(BanCheckError::Internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
