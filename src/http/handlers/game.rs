//! Save/load endpoint handlers

use crate::http::errors::HttpResult;
use crate::http::handlers::{require_user, AppState};
use crate::http::models::UserQuery;
use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;
use tracing::error;

/// POST /api/game/save - Store a user's save document
///
/// The body is optional; an absent body stores an empty object. Each save
/// fully replaces the prior document.
pub async fn save_game(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
    payload: Option<Json<Value>>,
) -> HttpResult<&'static str> {
    let key = require_user(&query)?;

    state
        .store
        .save(&key, payload.map(|Json(doc)| doc))
        .await
        .map_err(|e| {
            error!(key = %key, "save failed: {}", e);
            e
        })?;

    Ok("OK")
}

/// GET /api/game/load - Fetch a user's save document
///
/// Responds with `null` when the user has never saved; absence is not an
/// error.
pub async fn load_game(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> HttpResult<Json<Value>> {
    let key = require_user(&query)?;

    let doc = state.store.load(&key).await.map_err(|e| {
        error!(key = %key, "load failed: {}", e);
        e
    })?;

    Ok(Json(doc.unwrap_or(Value::Null)))
}
