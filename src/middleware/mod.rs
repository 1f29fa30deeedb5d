use axum::{
    extract::{Query, Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::error::{RejectReason, Rejection};
use crate::AppState;

pub const API_KEY_HEADER: &str = "x-api-key";
const QUERY_KEY_NAMES: [&str; 3] = ["key", "Key", "KEY"];

/// Gate for `/check`: the request must carry the gateway key.
pub async fn api_key_middleware(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
    req: Request,
    next: Next,
) -> Result<Response, Rejection> {
    let supplied = extract_api_key(&params, req.headers());
    let key_supplied = supplied.is_some();
    if supplied == Some(state.config.api_key.as_str()) {
        return Ok(next.run(req).await);
    }

    tracing::warn!(
        path = %req.uri().path(),
        key_supplied,
        "Rejected request with invalid or missing API key"
    );
    Err(Rejection::new(
        state.config.credit_text.clone(),
        RejectReason::InvalidApiKey,
    ))
}

/// First non-empty candidate among `?key=`, `?Key=`, `?KEY=`, then the `X-API-Key` header.
pub fn extract_api_key<'a>(params: &'a [(String, String)], headers: &'a HeaderMap) -> Option<&'a str> {
    QUERY_KEY_NAMES
        .iter()
        .find_map(|name| {
            params
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str())
                .filter(|v| !v.is_empty())
        })
        .or_else(|| {
            headers
                .get(API_KEY_HEADER)
                .and_then(|h| h.to_str().ok())
                .filter(|v| !v.is_empty())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn query_names_checked_in_order() {
        let headers = HeaderMap::new();
        let p = params(&[("KEY", "upper"), ("Key", "mixed"), ("key", "lower")]);
        assert_eq!(extract_api_key(&p, &headers), Some("lower"));

        let p = params(&[("KEY", "upper"), ("Key", "mixed")]);
        assert_eq!(extract_api_key(&p, &headers), Some("mixed"));

        let p = params(&[("KEY", "upper")]);
        assert_eq!(extract_api_key(&p, &headers), Some("upper"));
    }

    #[test]
    fn empty_value_falls_through() {
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, HeaderValue::from_static("from-header"));

        let p = params(&[("key", ""), ("Key", "mixed")]);
        assert_eq!(extract_api_key(&p, &headers), Some("mixed"));

        let p = params(&[("key", "")]);
        assert_eq!(extract_api_key(&p, &headers), Some("from-header"));
    }

    #[test]
    fn query_wins_over_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-api-key", HeaderValue::from_static("from-header"));
        let p = params(&[("key", "from-query")]);
        assert_eq!(extract_api_key(&p, &headers), Some("from-query"));
    }

    #[test]
    fn nothing_supplied() {
        assert_eq!(extract_api_key(&[], &HeaderMap::new()), None);
        let p = params(&[("kEy", "odd-case"), ("uid", "12345678")]);
        assert_eq!(extract_api_key(&p, &HeaderMap::new()), None);
    }
}
