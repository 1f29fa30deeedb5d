use serde_json::{Map, Value};

use crate::config::Config;
use crate::error::PlayerInfoError;
use crate::models::player::PlayerInfo;

pub struct PlayerInfoService {
    client: reqwest::Client,
    base_url: String,
    access_key: String,
}

impl PlayerInfoService {
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.player_info_url.clone(),
            access_key: config.player_info_key.clone(),
        }
    }

    /// Looks up the player profile. Never fails: any upstream problem is
    /// logged and the all-null record is returned instead.
    pub async fn fetch(&self, uid: &str) -> PlayerInfo {
        match self.try_fetch(uid).await {
            Ok(info) => info,
            Err(e) => {
                tracing::error!(uid, "Player info fetch failed: {}", e);
                PlayerInfo::default()
            }
        }
    }

    async fn try_fetch(&self, uid: &str) -> Result<PlayerInfo, PlayerInfoError> {
        let resp = self
            .client
            .get(&self.base_url)
            .query(&[("uid", uid), ("key", self.access_key.as_str())])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(PlayerInfoError::Status(status));
        }

        let bytes = resp.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)?;
        let body = body.as_object().ok_or(PlayerInfoError::Shape)?;

        match body.get("basicInfo") {
            None => Ok(PlayerInfo::from_basic_info(&Map::new())),
            Some(Value::Object(basic)) => Ok(PlayerInfo::from_basic_info(basic)),
            Some(_) => Err(PlayerInfoError::Shape),
        }
    }
}
