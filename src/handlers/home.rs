use axum::{extract::State, Json};
use std::sync::Arc;

use crate::models::response::HomeResponse;
use crate::AppState;

pub const USAGE: &str = "/check?uid=<UID>&key=<key>";
pub const OUTPUT_FIELDS: &str = "credit, level, liked, region, nickname, ban";

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Usage hint", body = HomeResponse)
    )
)]
pub async fn home(State(state): State<Arc<AppState>>) -> Json<HomeResponse> {
    Json(HomeResponse {
        credit: state.config.credit_text.clone(),
        usage: USAGE.to_string(),
        output: OUTPUT_FIELDS.to_string(),
    })
}
