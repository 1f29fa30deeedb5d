use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;

pub const DEFAULT_BAN_CHECK_URL: &str = "https://ff.garena.com/api/antihack/check_banned";
pub const DEFAULT_PLAYER_INFO_URL: &str = "https://flash-info-cbw4.vercel.app/info";

/// Process-wide settings, read once at startup and never mutated.
#[derive(Clone, Debug)]
pub struct Config {
    pub ban_check_url: String,
    pub player_info_url: String,
    pub player_info_key: String,
    pub default_lang: String,
    pub request_timeout: Duration,
    pub x_requested_with: String,
    pub user_agent: String,
    pub credit_text: String,
    pub api_key: String,
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ban_check_url: DEFAULT_BAN_CHECK_URL.to_string(),
            player_info_url: DEFAULT_PLAYER_INFO_URL.to_string(),
            player_info_key: "Flash".to_string(),
            default_lang: "en".to_string(),
            request_timeout: Duration::from_secs(10),
            x_requested_with: "B6FksShzIgjfrYImLpTsadjS86sddhFH".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string(),
            credit_text: "developed and making this API by @sulav_don1 main channel @sulav_don2"
                .to_string(),
            api_key: "Sulav".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let request_timeout = match env::var("REQUEST_TIMEOUT") {
            Ok(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("REQUEST_TIMEOUT must be a number of seconds, got {raw:?}"))?;
                if secs == 0 {
                    anyhow::bail!("REQUEST_TIMEOUT must be greater than zero");
                }
                Duration::from_secs(secs)
            }
            Err(_) => defaults.request_timeout,
        };

        let port = match env::var("SERVER_PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("SERVER_PORT must be a port number, got {raw:?}"))?,
            Err(_) => defaults.port,
        };

        Ok(Self {
            ban_check_url: env_or("BAN_CHECK_URL", defaults.ban_check_url),
            player_info_url: env_or("PLAYER_INFO_URL", defaults.player_info_url),
            player_info_key: env_or("PLAYER_INFO_KEY", defaults.player_info_key),
            default_lang: env_or("DEFAULT_LANG", defaults.default_lang),
            request_timeout,
            x_requested_with: env_or("X_REQUESTED_WITH", defaults.x_requested_with),
            user_agent: env_or("USER_AGENT", defaults.user_agent),
            credit_text: env_or("CREDIT_TEXT", defaults.credit_text),
            api_key: env_or("API_KEY", defaults.api_key),
            host: env_or("SERVER_HOST", defaults.host),
            port,
        })
    }

    pub fn listen_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

fn env_or(name: &str, default: String) -> String {
    env::var(name).unwrap_or(default)
}
