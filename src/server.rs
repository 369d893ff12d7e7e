//! HTTP server assembly.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::{info, warn};

use crate::auth::{Authenticator, StaticAuthenticator};
use crate::config::RelayConfig;
use crate::dispatch::{DispatchQueue, OutboundSender, WebhookSender};
use crate::error::Result;
use crate::routes::{AppState, relay_routes};

/// Wire the queue, authenticator and routes from configuration.
///
/// Returns the router and the queue so callers can inspect it.
pub fn build_app(config: RelayConfig) -> (Router, Arc<DispatchQueue>) {
    let sender: Arc<dyn OutboundSender> = Arc::new(WebhookSender::new(config.webhook_url_base));
    let queue = DispatchQueue::new(sender, config.dispatch_interval);
    let users = StaticAuthenticator::new(config.users);
    if users.is_empty() {
        warn!("API_USERS is empty; every shopping list will be rejected");
    } else {
        info!(users = users.len(), "Loaded API users");
    }
    let auth: Arc<dyn Authenticator> = Arc::new(users);

    let state = AppState {
        queue: Arc::clone(&queue),
        auth,
    };

    let mut app = relay_routes(state).layer(CorsLayer::permissive());
    if let Some(dir) = config.static_dir {
        info!(dir = %dir.display(), "Serving static files");
        app = app.fallback_service(ServeDir::new(dir));
    }

    (app, queue)
}

/// Bind to `0.0.0.0:{port}` and serve until the process exits.
pub async fn run(config: RelayConfig) -> Result<()> {
    let port = config.port;
    let (app, _queue) = build_app(config);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!(port = listener.local_addr()?.port(), "App now running");

    axum::serve(listener, app).await?;
    Ok(())
}
