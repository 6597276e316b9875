use anyhow::Context;
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use checkgate::config::Config;
use checkgate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "checkgate=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let state = AppState::new(&config);

    let mut app = checkgate::build_app(state).layer(TraceLayer::new_for_http());

    // The storefront calls us cross-origin with the admin cookie attached,
    // so credentials must be allowed; wildcard origins are not valid then.
    if let Some(origin) = &config.cors_allowed_origin {
        let origin: HeaderValue = origin
            .parse()
            .context("CORS_ALLOWED_ORIGIN is not a valid origin")?;
        app = app.layer(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST, Method::PUT])
                .allow_headers([header::CONTENT_TYPE])
                .allow_credentials(true),
        );
    }

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, store = %config.store_hash, "checkgate listening");

    axum::serve(listener, app).await?;

    Ok(())
}
