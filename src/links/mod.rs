//! Wiki link rewriting.
//!
//! # Responsibilities
//! - Turn `[Word]` tokens in a page body into `/view/Word` anchor tags
//!
//! # Design Decisions
//! - Operates on bytes, matching the raw body the store hands back
//! - Single left-to-right pass; inserted anchors are never rescanned
//! - No HTML escaping: bodies render verbatim, links included. Page
//!   content is trusted input by assumption, not a safety guarantee
//! - The pattern is compiled once into the struct, not a global static

use regex::bytes::{Captures, Regex};

/// Rewrites bracketed alphanumeric tokens into view links.
#[derive(Debug, Clone)]
pub struct LinkRewriter {
    pattern: Regex,
}

impl Default for LinkRewriter {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkRewriter {
    pub fn new() -> Self {
        // Bracket, one or more alphanumerics, bracket. Matches never nest.
        let pattern = Regex::new(r"\[([A-Za-z0-9]+)\]").expect("link pattern is valid");
        Self { pattern }
    }

    /// Replace every `[Name]` token with `<a href="/view/Name">Name</a>`.
    /// Non-matching text passes through unchanged.
    pub fn rewrite(&self, body: &[u8]) -> Vec<u8> {
        self.pattern
            .replace_all(body, |caps: &Captures<'_>| {
                let name = String::from_utf8_lossy(&caps[1]);
                format!("<a href=\"/view/{name}\">{name}</a>").into_bytes()
            })
            .into_owned()
    }
}
