//! Wiki request handlers.
//!
//! # Responsibilities
//! - Resolve the request path into an action and title
//! - view: load, rewrite links, render; redirect to edit when missing
//! - edit: load (or start empty), render the form
//! - save: persist the form body, redirect back to view
//!
//! # Design Decisions
//! - One dispatch handler behind a catch-all route; the resolver owns the
//!   URL shape, including the fallback-title quirk for malformed paths
//! - Redirects are literal 302 Found, which existing clients expect
//! - A missing or unparsable save form reads as an empty body rather than
//!   an error

use axum::body::Body;
use axum::extract::{Form, FromRequest, Request, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use crate::http::server::AppState;
use crate::page::Page;
use crate::routing::Action;

/// The edit form's single field.
#[derive(Debug, Default, Deserialize)]
pub struct SaveForm {
    #[serde(default)]
    pub body: String,
}

/// Entry point for every request.
pub async fn dispatch(State(state): State<AppState>, request: Request) -> Response {
    let route = state.resolver.resolve(request.uri().path());

    tracing::debug!(
        path = %request.uri().path(),
        action = ?route.action,
        title = %route.title,
        "dispatching"
    );

    match route.action {
        Action::View => view(&state, &route.title).await,
        Action::Edit => edit(&state, &route.title).await,
        Action::Save => save(&state, &route.title, request).await,
    }
}

async fn view(state: &AppState, title: &str) -> Response {
    match state.store.load(title).await {
        Ok(mut page) => {
            page.body = state.rewriter.rewrite(&page.body);
            Html(state.templates.render_view(&page)).into_response()
        }
        Err(err) => {
            tracing::debug!(title = %title, error = %err, "page unavailable, redirecting to edit");
            found(&format!("/edit/{title}"))
        }
    }
}

async fn edit(state: &AppState, title: &str) -> Response {
    let page = match state.store.load(title).await {
        Ok(page) => page,
        // Editing a page that does not exist yet acts as create.
        Err(_) => Page::empty(title),
    };
    Html(state.templates.render_edit(&page)).into_response()
}

async fn save(state: &AppState, title: &str, request: Request) -> Response {
    let form = match Form::<SaveForm>::from_request(request, &()).await {
        Ok(Form(form)) => form,
        Err(_) => SaveForm::default(),
    };

    let page = Page::new(title, form.body.into_bytes());
    match state.store.save(&page).await {
        Ok(()) => found(&format!("/view/{title}")),
        Err(err) => {
            tracing::error!(title = %title, error = %err, "save failed");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}

/// A 302 Found redirect. Titles are alphanumeric, so the location header
/// value is always well-formed.
fn found(location: &str) -> Response {
    match axum::http::Response::builder()
        .status(StatusCode::FOUND)
        .header(header::LOCATION, location)
        .body(Body::empty())
    {
        Ok(response) => response.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
