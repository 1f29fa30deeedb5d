use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// The four profile fields surfaced from the player-info upstream.
/// All `None` is the fallback when that upstream is unavailable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct PlayerInfo {
    pub level: Option<i64>,
    pub liked: Option<i64>,
    pub region: Option<String>,
    pub nickname: Option<String>,
}

impl PlayerInfo {
    /// Reads fields out of a `basicInfo` object. Missing or mistyped fields stay `None`.
    pub fn from_basic_info(basic: &Map<String, Value>) -> Self {
        Self {
            level: basic.get("level").and_then(Value::as_i64),
            liked: basic.get("liked").and_then(Value::as_i64),
            region: basic.get("region").and_then(Value::as_str).map(str::to_string),
            nickname: basic.get("nickname").and_then(Value::as_str).map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_all_fields() {
        let basic = json!({"level": 45, "liked": 10, "region": "ID", "nickname": "Foo", "exp": 1});
        let info = PlayerInfo::from_basic_info(basic.as_object().unwrap());
        assert_eq!(info.level, Some(45));
        assert_eq!(info.liked, Some(10));
        assert_eq!(info.region.as_deref(), Some("ID"));
        assert_eq!(info.nickname.as_deref(), Some("Foo"));
    }

    #[test]
    fn missing_and_mistyped_fields_are_null() {
        let basic = json!({"level": "high", "region": "SG"});
        let info = PlayerInfo::from_basic_info(basic.as_object().unwrap());
        assert_eq!(info.level, None);
        assert_eq!(info.liked, None);
        assert_eq!(info.region.as_deref(), Some("SG"));
        assert_eq!(info.nickname, None);
    }

    #[test]
    fn default_serializes_as_nulls() {
        let value = serde_json::to_value(PlayerInfo::default()).unwrap();
        assert_eq!(value, json!({"level": null, "liked": null, "region": null, "nickname": null}));
    }
}
