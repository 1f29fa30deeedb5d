use serde_json::{Map, Value};

pub const MSG_BANNED: &str = "account ban already";
pub const MSG_SAFE: &str = "your id is safe";
pub const MSG_UNKNOWN: &str = "Unable to check ban status";

/// Turns the raw ban-check payload into the user-facing verdict.
///
/// Flags are consulted in a fixed order: `banned`, then `is_banned`, then
/// `ban_status == "banned"`. The first one that is set wins.
pub fn ban_message(data: Option<&Map<String, Value>>) -> &'static str {
    let Some(data) = data else {
        return MSG_UNKNOWN;
    };

    let banned = data.get("banned").is_some_and(is_truthy)
        || data.get("is_banned").is_some_and(is_truthy)
        || data.get("ban_status").and_then(Value::as_str) == Some("banned");

    if banned {
        MSG_BANNED
    } else {
        MSG_SAFE
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
