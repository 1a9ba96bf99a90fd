//! Request and response models for the HTTP API

use serde::{Deserialize, Serialize};

/// Query parameters carrying the user identifier
#[derive(Debug, Deserialize, Clone)]
pub struct UserQuery {
    pub user: Option<String>,
}

/// Acknowledgement response for raw write/delete operations
#[derive(Debug, Serialize, Clone)]
pub struct OkResponse {
    pub ok: bool,
    pub message: String,
}

impl OkResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Clone)]
pub struct PingResponse {
    pub status: String,
}
