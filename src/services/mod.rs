pub mod ban_check;
pub mod player_info;

use crate::config::Config;

/// One pooled HTTP client shared by every upstream call, bounded by the configured timeout.
pub fn build_http_client(config: &Config) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
}
