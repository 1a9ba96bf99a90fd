//! Save directory inspection handlers

use crate::core::{DiskInfo, FileInfo};
use crate::http::errors::HttpResult;
use crate::http::handlers::AppState;
use axum::{extract::State, Json};
use tracing::error;

/// GET /api/game/list - List all stored user keys
pub async fn list_keys(State(state): State<AppState>) -> HttpResult<Json<Vec<String>>> {
    let keys = state.store.list_keys().await.map_err(|e| {
        error!("directory listing failed: {}", e);
        e
    })?;
    Ok(Json(keys))
}

/// GET /api/game/files - List every file in the save directory with metadata
pub async fn list_files(State(state): State<AppState>) -> HttpResult<Json<Vec<FileInfo>>> {
    let files = state.store.list_files().await.map_err(|e| {
        error!("directory listing failed: {}", e);
        e
    })?;
    Ok(Json(files))
}

/// GET /api/game/disk-info - Report save directory state; never fails
pub async fn disk_info(State(state): State<AppState>) -> Json<DiskInfo> {
    Json(state.store.disk_info().await)
}
