//! Request routing.
//!
//! Maps a request path to a wiki action and page title.

pub mod resolver;

pub use resolver::{Action, RouteMatch, RouteResolver};
