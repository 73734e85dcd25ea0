//! HTML rendering for the view and edit pages.
//!
//! # Design Decisions
//! - Templates are embedded at compile time and substituted with plain
//!   `{{title}}` / `{{body}}` slots; no template engine dependency
//! - No escaping anywhere: bodies render verbatim, matching the link
//!   rewriter's contract. Page content is trusted input by assumption
//! - The set is constructed once at startup and owned by server state, not
//!   held in a global

use crate::page::Page;

const VIEW_TEMPLATE: &str = include_str!("../../templates/view.html");
const EDIT_TEMPLATE: &str = include_str!("../../templates/edit.html");

/// The server's template set.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    view: &'static str,
    edit: &'static str,
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateSet {
    pub fn new() -> Self {
        Self {
            view: VIEW_TEMPLATE,
            edit: EDIT_TEMPLATE,
        }
    }

    /// Render the view page for an already link-rewritten body.
    pub fn render_view(&self, page: &Page) -> String {
        render(self.view, page)
    }

    /// Render the edit form. The body appears raw inside the textarea.
    pub fn render_edit(&self, page: &Page) -> String {
        render(self.edit, page)
    }
}

fn render(template: &str, page: &Page) -> String {
    template
        .replace("{{title}}", &page.title)
        .replace("{{body}}", &String::from_utf8_lossy(&page.body))
}
