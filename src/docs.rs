use axum::Json;
use utoipa::OpenApi;

use crate::handlers;
use crate::models::player::PlayerInfo;
use crate::models::response::{CheckResponse, ErrorBody, HomeResponse};

#[derive(OpenApi)]
#[openapi(
    paths(handlers::home::home, handlers::check::check),
    components(schemas(CheckResponse, ErrorBody, HomeResponse, PlayerInfo)),
    tags((name = "ban-check", description = "Free Fire ban status gateway"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
