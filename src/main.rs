use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use ff_ban_gateway::{config::Config, create_app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    let addr = config.listen_addr()?;
    tracing::info!(
        ban_check_url = %config.ban_check_url,
        player_info_url = %config.player_info_url,
        timeout_secs = config.request_timeout.as_secs(),
        "Starting ban-check gateway"
    );

    let app = create_app(config)?;

    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
