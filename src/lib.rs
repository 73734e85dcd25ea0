//! Minimal Wiki Server Library

pub mod config;
pub mod http;
pub mod links;
pub mod page;
pub mod routing;
pub mod store;

pub use config::WikiConfig;
pub use http::WikiServer;
pub use page::Page;
