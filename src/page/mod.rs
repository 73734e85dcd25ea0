//! The wiki page entity.
//!
//! # Responsibilities
//! - Hold a page title and its raw body bytes
//! - Nothing else: pages are constructed per request and dropped after
//!
//! # Design Decisions
//! - The title charset (`[A-Za-z0-9]+`) is enforced by the route resolver
//!   before a `Page` is ever built, so `Page` itself carries no validation
//! - Body is raw bytes, not `String`; content round-trips exactly as saved

/// A single wiki page. Identity is the title; titles are unique per store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub body: Vec<u8>,
}

impl Page {
    /// Create a page with the given title and body.
    pub fn new(title: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Create a page with an empty body. Used by the edit handler when the
    /// requested title does not exist yet, so that editing acts as create.
    pub fn empty(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: Vec::new(),
        }
    }
}
