//! HTTP endpoint handlers

pub mod admin;
pub mod game;
pub mod rawsave;
pub mod status;

use crate::core::{SaveStore, UserKey};
use crate::http::errors::{HttpError, HttpResult};
use crate::http::models::UserQuery;
use std::sync::Arc;

/// Shared state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SaveStore>,
}

impl AppState {
    pub fn new(store: Arc<SaveStore>) -> Self {
        Self { store }
    }
}

/// Derive a user key from the `user` query parameter.
///
/// A missing parameter and one that sanitizes to the empty key are both
/// rejected; the store never sees the unsanitized identifier.
pub(crate) fn require_user(query: &UserQuery) -> HttpResult<UserKey> {
    let key = UserKey::sanitize(query.user.as_deref().unwrap_or(""));
    if key.is_empty() {
        return Err(HttpError::BadRequest("Missing user parameter".to_string()));
    }
    Ok(key)
}
