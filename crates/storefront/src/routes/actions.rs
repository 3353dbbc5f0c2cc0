//! Shopper interactions posted back by the page.

use axum::{
    Form,
    extract::{Path, State},
    response::{Html, Redirect},
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::html::render_to_html;
use crate::shop::Action;
use crate::state::AppState;

/// Search form data.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search: String,
}

/// Parse and apply a named action; respond with the re-rendered app.
#[instrument(skip(state))]
pub async fn dispatch(
    State(state): State<AppState>,
    Path(action): Path<String>,
) -> Result<Html<String>> {
    let action: Action = action.parse()?;
    let view = state.shop().dispatch(action).await?;
    Ok(Html(render_to_html(&view)))
}

/// Submit the search modal.
#[instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Redirect> {
    state.shop().dispatch(Action::Search(form.search)).await?;
    Ok(Redirect::to("/"))
}
