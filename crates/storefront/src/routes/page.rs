//! Full-page and snapshot handlers.

use axum::{Json, extract::State, response::Html};

use crate::dom::{DomNode, Snapshot};
use crate::html::{PageOptions, render_page};
use crate::state::AppState;

/// Document title.
pub const TITLE: &str = "Hollixton";

/// Wrap `root` in the page shell, with an optional blocking notice.
pub fn page(root: &DomNode, notice: Option<String>) -> Html<String> {
    let opts = PageOptions::new(root.clone(), TITLE).with_notice(notice);
    Html(render_page(&opts))
}

/// Render the current tree as a full HTML page.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    page(&state.shop().current_view(), None)
}

/// The current tree as JSON.
pub async fn snapshot(State(state): State<AppState>) -> Json<Snapshot> {
    let root = DomNode::clone(&state.shop().current_view());
    Json(Snapshot { root })
}
