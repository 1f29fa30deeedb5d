use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, REFERER, USER_AGENT};
use serde_json::{Map, Value};

use crate::config::Config;
use crate::error::BanCheckError;

const ACCEPT_VALUE: &str = "application/json, text/plain, */*";
const ACCEPT_LANGUAGE_VALUE: &str = "tr-TR,tr;q=0.9,en-US;q=0.8,en;q=0.7";
const REFERER_VALUE: &str = "https://ff.garena.com/en/support/";

pub struct BanCheckService {
    client: reqwest::Client,
    base_url: String,
    lang: String,
    headers: HeaderMap,
}

impl BanCheckService {
    pub fn new(client: reqwest::Client, config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            client,
            base_url: config.ban_check_url.clone(),
            lang: config.default_lang.clone(),
            headers: browser_headers(config)?,
        })
    }

    /// Asks the ban-status API about `uid`. Exactly one request, no retries.
    pub async fn check(&self, uid: &str) -> Result<Map<String, Value>, BanCheckError> {
        let resp = self
            .client
            .get(&self.base_url)
            .headers(self.headers.clone())
            .query(&[("lang", self.lang.as_str()), ("uid", uid)])
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(BanCheckError::from_reqwest)?;

        let body: Value = resp.json().await.map_err(BanCheckError::from_reqwest)?;
        match body {
            Value::Object(map) => Ok(map),
            other => {
                tracing::error!(uid, "Ban check returned non-object JSON: {}", other);
                Err(BanCheckError::Internal)
            }
        }
    }
}

fn browser_headers(config: &Config) -> anyhow::Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE));
    headers.insert(REFERER, HeaderValue::from_static(REFERER_VALUE));
    headers.insert(USER_AGENT, HeaderValue::from_str(&config.user_agent)?);
    headers.insert("x-requested-with", HeaderValue::from_str(&config.x_requested_with)?);
    Ok(headers)
}
