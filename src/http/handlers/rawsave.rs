//! Raw save file access handlers for administrative inspection

use crate::http::errors::{HttpError, HttpResult};
use crate::http::handlers::{require_user, AppState};
use crate::http::models::{OkResponse, UserQuery};
use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;

/// GET /api/game/rawsave - Read a save document, 404 when absent
pub async fn get_rawsave(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> HttpResult<Json<Value>> {
    let key = require_user(&query)?;
    let doc = state.store.raw_read(&key).await?;
    Ok(Json(doc))
}

/// PUT /api/game/rawsave - Overwrite a save document
///
/// The body must be a JSON object; anything else is rejected before any
/// filesystem access.
pub async fn put_rawsave(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
    payload: Option<Json<Value>>,
) -> HttpResult<Json<OkResponse>> {
    let key = require_user(&query)?;

    let doc = match payload {
        Some(Json(doc)) if doc.is_object() => doc,
        _ => {
            return Err(HttpError::BadRequest(
                "Missing or invalid data".to_string(),
            ))
        }
    };

    state.store.raw_write(&key, &doc).await?;
    Ok(Json(OkResponse::new(format!("Save file written for {}", key))))
}

/// DELETE /api/game/rawsave - Remove a save document, 404 when absent
pub async fn delete_rawsave(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> HttpResult<Json<OkResponse>> {
    let key = require_user(&query)?;
    state.store.delete(&key).await?;
    Ok(Json(OkResponse::new(format!("Save file deleted for {}", key))))
}
