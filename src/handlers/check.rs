use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use utoipa::IntoParams;

use crate::error::Rejection;
use crate::models::ban::ban_message;
use crate::models::response::{CheckResponse, ErrorBody};
use crate::utils::validate_uid;
use crate::AppState;

/// Documented query parameters. The handler reads the raw pairs so a
/// repeated name resolves to its first value instead of failing to parse.
#[derive(Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CheckParams {
    /// Numeric player id, at least 8 digits.
    pub uid: Option<String>,
    /// Gateway key. `Key`, `KEY` or the `X-API-Key` header work too.
    pub key: Option<String>,
}

#[utoipa::path(
    get,
    path = "/check",
    params(CheckParams),
    responses(
        (status = 200, description = "Player profile and ban verdict", body = CheckResponse),
        (status = 400, description = "Malformed uid", body = ErrorBody),
        (status = 401, description = "Invalid or missing API key", body = ErrorBody),
        (status = 500, description = "Ban check failed unexpectedly", body = CheckResponse),
        (status = 502, description = "Ban check upstream error", body = CheckResponse),
        (status = 504, description = "Ban check timed out", body = CheckResponse)
    )
)]
pub async fn check(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<(StatusCode, Json<CheckResponse>), Rejection> {
    let credit = state.config.credit_text.clone();
    let uid = params
        .iter()
        .find(|(name, _)| name == "uid")
        .map_or("", |(_, value)| value.as_str())
        .trim();

    if let Err(e) = validate_uid(uid) {
        tracing::warn!(uid, "Rejected uid: {}", e);
        return Err(Rejection::new(credit, e));
    }

    let (player, ban) = futures::join!(
        state.player_info.fetch(uid),
        state.ban_check.check(uid),
    );

    let (ban, status) = match ban {
        Ok(data) => (ban_message(Some(&data)).to_string(), StatusCode::OK),
        Err(e) => {
            tracing::error!(uid, status = %e.status(), "Ban check failed: {}", e);
            (format!("Error: {}", e), e.status())
        }
    };

    Ok((status, Json(CheckResponse::new(credit, player, ban))))
}
