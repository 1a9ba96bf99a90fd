//! HTTP boundary: routing, handlers, and error conversion

pub mod errors;
pub mod handlers;
pub mod models;
pub mod server;

pub use server::{create_router, SaveServer};
