use gallery_shared::config::GalleryConfig;
use gallery_shared::GalleryState;
use lambda_http::{run, service_fn, Error, Request};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod http_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .without_time()
        .init();

    // Fail the cold start instead of letting every request hit a provider auth error
    let config = GalleryConfig::from_env().map_err(|e| {
        tracing::error!("Invalid gallery configuration: {}", e);
        e
    })?;
    tracing::info!(
        folder = config.folder.as_deref().unwrap_or("<all uploads>"),
        timeout_secs = config.upstream_timeout.as_secs(),
        "Gallery Lambda starting"
    );

    let state = GalleryState::from_config(config)?;

    run(service_fn(move |event: Request| {
        let state = Arc::clone(&state);
        async move { http_handler::function_handler(event, state).await }
    }))
    .await
}
