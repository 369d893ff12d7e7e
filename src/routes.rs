//! REST endpoints: shopping-list intake, queue status, health.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::auth::Authenticator;
use crate::dispatch::{DispatchJob, DispatchQueue, WebhookPayload};
use crate::error::ApiError;
use crate::shopping::split_on_and;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub queue: Arc<DispatchQueue>,
    pub auth: Arc<dyn Authenticator>,
}

/// Body of `POST /api/ifttt/shopping/and`.
///
/// Field names follow the IFTTT applet; `identity`, `secret` and `list` are
/// accepted as aliases.
#[derive(Debug, Default)]
pub struct ShoppingListRequest {
    pub username: Option<String>,
    pub key: Option<String>,
    pub shopping_items: Option<String>,
}

impl ShoppingListRequest {
    /// Read the request leniently, whatever the content type.
    ///
    /// A body that is not a JSON object reads as an empty request, and a
    /// field that is not a string reads as absent, so both end up as the
    /// usual missing-field rejections.
    pub fn from_body(body: &[u8]) -> Self {
        let value: Value = serde_json::from_slice(body).unwrap_or_default();
        Self {
            username: string_field(&value, &["username", "identity"]),
            key: string_field(&value, &["key", "secret"]),
            shopping_items: string_field(&value, &["shoppingItems", "list"]),
        }
    }

    /// Returns `(list, username, key)`, checked in that order.
    /// Empty strings count as missing.
    fn required_fields(&self) -> Result<(&str, &str, &str), ApiError> {
        let list = present(&self.shopping_items).ok_or(ApiError::MissingList)?;
        let username = present(&self.username).ok_or(ApiError::MissingIdentity)?;
        let key = present(&self.key).ok_or(ApiError::MissingSecret)?;
        Ok((list, username, key))
    }
}

fn string_field(value: &Value, names: &[&str]) -> Option<String> {
    names
        .iter()
        .find_map(|name| value.get(name).and_then(Value::as_str))
        .map(str::to_string)
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ShoppingListResponse {
    pub items: Vec<String>,
}

/// Build the relay's REST routes.
pub fn relay_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/queue", get(queue_status))
        .route("/api/ifttt/shopping/and", post(shopping_and))
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "shopping-relay"
    }))
}

async fn queue_status(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.queue.status().await)
}

/// POST /api/ifttt/shopping/and
///
/// Splits the list on "and", queues one webhook call per item, and answers
/// with the parsed items straight away. Delivery happens later, paced.
async fn shopping_and(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ShoppingListResponse>, ApiError> {
    let body = ShoppingListRequest::from_body(&body);
    debug!(
        username = ?body.username,
        shopping_items = ?body.shopping_items,
        "Shopping list request received"
    );

    let (list, username, key) = body.required_fields()?;

    let destination = state
        .auth
        .authenticate(username, key)
        .ok_or(ApiError::Unauthorized)?;

    let items = split_on_and(Some(list));
    info!(username = %username, count = items.len(), "Parsed shopping list");

    for item in &items {
        let job = DispatchJob::new(WebhookPayload::for_item(item), destination.clone());
        state.queue.enqueue(job).await;
    }

    Ok(Json(ShoppingListResponse { items }))
}
