//! Path-to-action resolution.
//!
//! # Responsibilities
//! - Match request paths against `^/(|edit|save|view)/([A-Za-z0-9]+)$`
//! - Extract the action and page title on a match
//! - Fall back to viewing a fixed default title on any non-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - The title charset is enforced here, once, so downstream code never
//!   sees a title outside `[A-Za-z0-9]+`
//! - Non-matching paths do NOT 404: they resolve to the fallback title.
//!   Existing clients depend on this, so it must not be "fixed" to an
//!   error response

use regex::Regex;

/// What a resolved request should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    View,
    Edit,
    Save,
}

/// A resolved route: the action to run and the title to run it on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub action: Action,
    pub title: String,
}

/// Resolves request paths into routes. Built once at startup and shared.
#[derive(Debug, Clone)]
pub struct RouteResolver {
    pattern: Regex,
    fallback_title: String,
}

impl RouteResolver {
    /// Create a resolver with the given fallback title. The fallback is
    /// used whenever a path does not fit the wiki URL shape.
    pub fn new(fallback_title: impl Into<String>) -> Self {
        // Empty first group means the bare "/<title>" form, treated as view.
        let pattern =
            Regex::new(r"^/(|edit|save|view)/([A-Za-z0-9]+)$").expect("route pattern is valid");
        Self {
            pattern,
            fallback_title: fallback_title.into(),
        }
    }

    /// Resolve a request path. Never fails; malformed paths fall back to
    /// viewing the configured default page.
    pub fn resolve(&self, path: &str) -> RouteMatch {
        match self.pattern.captures(path) {
            Some(caps) => {
                let action = match &caps[1] {
                    "edit" => Action::Edit,
                    "save" => Action::Save,
                    _ => Action::View,
                };
                RouteMatch {
                    action,
                    title: caps[2].to_string(),
                }
            }
            None => RouteMatch {
                action: Action::View,
                title: self.fallback_title.clone(),
            },
        }
    }
}
