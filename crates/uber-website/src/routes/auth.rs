//! Account connection flow.

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;
use uuid::Uuid;

use crate::cookies;
use crate::error::Result;
use crate::html;
use crate::state::AppState;

/// Scopes requested when connecting an account.
const SCOPES: [&str; 3] = ["profile", "history_lite", "request"];

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let state_token = Uuid::new_v4().to_string();
    let url = state.auth.authorize_url(
        &SCOPES,
        Some(&state_token),
        Some(&state.config.redirect_url),
    );
    let body = format!(
        "<p>Rider pages need your own Uber access token.</p>\
         <p><a href=\"{}\">Sign in with Uber</a></p>",
        html::escape(&url)
    );
    html::page("Connect", &body)
}

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    #[serde(default)]
    pub code: Option<String>,
}

pub async fn callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Result<Response> {
    let Some(code) = params.code.filter(|code| !code.trim().is_empty()) else {
        return Ok(Redirect::to("/auth").into_response());
    };

    let token = state
        .auth
        .exchange_code(&code, &state.config.redirect_url)
        .await?;
    let Some(token) = token else {
        tracing::warn!("Authorization code was declined");
        return Ok(Redirect::to("/auth").into_response());
    };
    if token.access_token.trim().is_empty() {
        return Ok(Redirect::to("/auth").into_response());
    }

    let cookie = cookies::store_access_token(&token)?;
    let body = "<p>Your account is linked. Try <a href=\"/user\">your profile</a> or \
                <a href=\"/requests\">your requests</a>.</p>";
    Ok((
        [(header::SET_COOKIE, cookie)],
        html::page("Connected", body),
    )
        .into_response())
}
