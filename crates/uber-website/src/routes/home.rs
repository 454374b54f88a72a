//! Landing page.

use axum::http::HeaderMap;
use axum::response::Html;

use crate::cookies;
use crate::html;

pub async fn index(headers: HeaderMap) -> Html<String> {
    let status = if cookies::access_token(&headers).is_some() {
        "<p>Your Uber account is connected. Head over to <a href=\"/requests\">Requests</a> to ride.</p>".to_string()
    } else {
        "<p><a href=\"/auth\">Connect your Uber account</a> to request rides and view your profile.</p>"
            .to_string()
    };
    let body = format!(
        "<p>Browse products and fare estimates with the server token, or connect \
         your account for rider features.</p>\
         {status}"
    );
    html::page("Home", &body)
}
