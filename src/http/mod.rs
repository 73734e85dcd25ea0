//! HTTP layer: server setup, request handlers, and HTML rendering.

pub mod handlers;
pub mod server;
pub mod templates;

pub use server::{bind_listener, AppState, WikiServer};
pub use templates::TemplateSet;
