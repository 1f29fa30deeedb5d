use serde::Serialize;
use utoipa::ToSchema;

use crate::models::player::PlayerInfo;

/// Body of a successful (or upstream-degraded) `/check` call.
#[derive(Debug, Serialize, ToSchema)]
pub struct CheckResponse {
    pub credit: String,
    pub level: Option<i64>,
    pub liked: Option<i64>,
    pub region: Option<String>,
    pub nickname: Option<String>,
    pub ban: String,
}

impl CheckResponse {
    pub fn new(credit: String, player: PlayerInfo, ban: String) -> Self {
        Self {
            credit,
            level: player.level,
            liked: player.liked,
            region: player.region,
            nickname: player.nickname,
            ban,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub credit: String,
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HomeResponse {
    pub credit: String,
    pub usage: String,
    pub output: String,
}
