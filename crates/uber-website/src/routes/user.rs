//! Rider profile page.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Redirect, Response};

use crate::cookies;
use crate::error::Result;
use crate::html;
use crate::state::AppState;

pub async fn profile(State(state): State<AppState>, headers: HeaderMap) -> Result<Response> {
    let Some(token) = cookies::access_token(&headers) else {
        return Ok(Redirect::to("/auth").into_response());
    };

    let rider = state.rider(&token.access_token)?;
    let response = rider.user().profile().await?;

    let body = match response.into_result() {
        Ok(profile) => format!(
            "<h2>{} {}</h2>\
             <p>Email: {}</p>\
             <p>Promo code: {}</p>\
             <p>Rider id: {}</p>",
            html::escape(&profile.first_name),
            html::escape(&profile.last_name),
            html::escape(&profile.email),
            html::escape(&profile.promo_code),
            html::escape(&profile.uuid),
        ),
        Err(error) => html::remote_error(&error),
    };
    Ok(html::page("Profile", &body).into_response())
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;
    use wiremock::matchers::{header as header_match, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::routes::test_support;

    #[tokio::test]
    async fn profile_requires_a_connected_account() {
        let router = test_support::router_for("http://127.0.0.1:9");

        let response = router
            .oneshot(Request::builder().uri("/user").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/auth");
    }

    #[tokio::test]
    async fn profile_uses_the_rider_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/me"))
            .and(header_match("authorization", "Bearer rider-access-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "first_name": "Morgan",
                "last_name": "Rider",
                "email": "morgan@example.com",
                "picture": "https://img.example/morgan.png",
                "promo_code": "morgan20",
                "uuid": "rider-uuid-1"
            })))
            .mount(&server)
            .await;
        let router = test_support::router_for(&server.uri());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/user")
                    .header(header::COOKIE, test_support::rider_cookie())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let page = String::from_utf8(body.to_vec()).unwrap();
        assert!(page.contains("Morgan Rider"));
        assert!(page.contains("morgan@example.com"));
    }
}
