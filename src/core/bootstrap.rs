use anyhow::{Context, Result};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::{app_state::AppState, config::Config, db};

const DEFAULT_FILTER: &str = "info,tower_http=debug";

/// Loads `.env` and then installs the subscriber, so `RUST_LOG` from the file applies.
pub fn init() {
    let env_file = dotenvy::dotenv();
    init_tracing();
    match env_file {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(err) => tracing::debug!("No .env file loaded: {}", err),
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(env_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Builds the connection pool, attaches shared state and serves `app` until shutdown.
pub async fn bootstrap(service_name: &str, app: Router<AppState>, config: Config) -> Result<()> {
    let db_pool = db::create_pool(&config.database).await?;
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(db_pool, config);

    let app = app.layer(TraceLayer::new_for_http()).with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("{} listening on {}", service_name, addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("{} stopped", service_name);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::filter::LevelFilter;

    use super::*;

    #[test]
    fn rust_log_directives_win_over_the_default() {
        assert_eq!(env_filter(Some("warn")).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(env_filter(None).max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn unparsable_directives_fall_back_to_the_default() {
        assert_eq!(
            env_filter(Some("agrimarket=notalevel")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }
}
