//! Request routing.

use std::path::{Component, Path};
use std::sync::Arc;

use gstatus_core::{DiffService, LogService, QueryError, View, translate};
use tracing::error;

use super::AppState;
use super::http::{Request, Response, percent_decode};
use super::render;

/// Where a request path leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// History page.
    Index { page: usize },
    /// Diff between two commits.
    Diff { old: String, new: String },
    /// File under the static directory, relative path.
    Static(String),
    NotFound,
}

/// Match a (still percent-encoded) request path.
#[must_use]
pub fn route(path: &str) -> Route {
    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();

    match segments.as_slice() {
        [""] => Route::Index { page: 0 },
        ["page", n] => n
            .parse()
            .map_or(Route::NotFound, |page| Route::Index { page }),
        ["commit", old, new] => match (percent_decode(old), percent_decode(new)) {
            (Some(old), Some(new)) if !old.is_empty() && !new.is_empty() => {
                Route::Diff { old, new }
            }
            _ => Route::NotFound,
        },
        ["static", rest @ ..] if !rest.is_empty() => {
            let decoded: Option<Vec<String>> = rest.iter().map(|s| percent_decode(s)).collect();
            decoded.map_or(Route::NotFound, |parts| Route::Static(parts.join("/")))
        }
        _ => Route::NotFound,
    }
}

/// Produce the response for one request.
pub async fn respond(request: &Request, state: Arc<AppState>) -> Response {
    if request.method != "GET" {
        return Response::error(405);
    }

    match route(&request.path) {
        Route::Index { page } => {
            let view = query(state, move |s| {
                translate(LogService::new(&s.repo, s.page_size).fetch_page(page))
            })
            .await;
            present(&view, request.wants_json())
        }
        Route::Diff { old, new } => {
            let view = query(state, move |s| {
                translate(DiffService::new(&s.repo, &s.highlighter).diff_commits(&old, &new))
            })
            .await;
            present(&view, request.wants_json())
        }
        Route::Static(path) => serve_static(&state.static_dir, &path).await,
        Route::NotFound => Response::error(404),
    }
}

/// Run a blocking git query off the async workers.
async fn query<F>(state: Arc<AppState>, f: F) -> View
where
    F: FnOnce(&AppState) -> View + Send + 'static,
{
    match tokio::task::spawn_blocking(move || f(&state)).await {
        Ok(view) => view,
        Err(e) => {
            error!(error = %e, "query task failed");
            View::Error(QueryError {
                error_msg: "internal error".into(),
            })
        }
    }
}

fn present(view: &View, json: bool) -> Response {
    if !json {
        return Response::html(render::page(view));
    }

    match view.to_json() {
        Ok(body) => Response::json(body),
        Err(e) => {
            error!(error = %e, "failed to serialize view");
            Response::error(500)
        }
    }
}

/// Serve a file from `root`, refusing anything that could escape it.
async fn serve_static(root: &Path, relative: &str) -> Response {
    let relative = Path::new(relative);
    if !relative
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
    {
        return Response::error(404);
    }

    match tokio::fs::read(root.join(relative)).await {
        Ok(bytes) => Response::bytes(content_type(relative), bytes),
        Err(_) => Response::error(404),
    }
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("html") => "text/html; charset=utf-8",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}
