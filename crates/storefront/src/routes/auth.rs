//! Sign-in form handler.
//!
//! Sign-out is an ordinary action (`sign-out`).

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use secrecy::SecretString;
use serde::Deserialize;
use tracing::instrument;

use super::page::page;
use crate::error::AppError;
use crate::state::AppState;

/// Sign-in form data.
#[derive(Deserialize)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

/// Check the credentials and sign the customer in.
///
/// A mismatch re-renders the page with the notice and leaves the state
/// alone, sign-in modal still open.
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn sign_in(State(state): State<AppState>, Form(form): Form<SignInForm>) -> Response {
    let result = state
        .shop()
        .sign_in(&form.email, SecretString::from(form.password))
        .await;

    match result.map_err(AppError::from) {
        Ok(()) => Redirect::to("/").into_response(),
        Err(AppError::Unauthorized(notice)) => {
            tracing::info!("Sign-in rejected");
            let view = state.shop().current_view();
            (StatusCode::UNAUTHORIZED, page(&view, Some(notice))).into_response()
        }
        Err(e) => e.into_response(),
    }
}
