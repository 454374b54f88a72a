//! Fare and pickup-time estimate pages.

use axum::extract::State;
use axum::response::Html;
use axum::Form;
use serde::Deserialize;

use crate::error::Result;
use crate::html;
use crate::routes::{DEFAULT_END, DEFAULT_START};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PriceForm {
    pub start_latitude: f64,
    pub start_longitude: f64,
    pub end_latitude: f64,
    pub end_longitude: f64,
}

#[derive(Debug, Deserialize)]
pub struct TimeForm {
    pub start_latitude: f64,
    pub start_longitude: f64,
}

pub async fn price_form() -> Html<String> {
    let (start_lat, start_lng) = DEFAULT_START;
    let (end_lat, end_lng) = DEFAULT_END;
    let body = format!(
        "<form method=\"post\" action=\"/price\">\
         <label>Start latitude <input name=\"start_latitude\" value=\"{start_lat}\"></label>\
         <label>Start longitude <input name=\"start_longitude\" value=\"{start_lng}\"></label>\
         <label>End latitude <input name=\"end_latitude\" value=\"{end_lat}\"></label>\
         <label>End longitude <input name=\"end_longitude\" value=\"{end_lng}\"></label>\
         <button type=\"submit\">Estimate</button>\
         </form>"
    );
    html::page("Price estimates", &body)
}

pub async fn price_results(
    State(state): State<AppState>,
    Form(form): Form<PriceForm>,
) -> Result<Html<String>> {
    let response = state
        .server
        .estimates()
        .price(
            form.start_latitude,
            form.start_longitude,
            form.end_latitude,
            form.end_longitude,
        )
        .await?;

    let body = match response.into_result() {
        Ok(collection) => {
            let rows: String = collection
                .prices
                .iter()
                .map(|price| {
                    format!(
                        "<tr><td>{}</td><td>{}</td><td>{:.1}x</td><td>{} min</td><td>{:.1} mi</td></tr>",
                        html::escape(&price.display_name),
                        html::escape(&price.estimate),
                        price.surge_multiplier,
                        price.duration / 60,
                        price.distance,
                    )
                })
                .collect();
            format!(
                "<table>\
                 <tr><th>Product</th><th>Estimate</th><th>Surge</th><th>Duration</th><th>Distance</th></tr>\
                 {rows}\
                 </table>"
            )
        }
        Err(error) => html::remote_error(&error),
    };
    Ok(html::page("Price estimates", &body))
}

pub async fn time_form() -> Html<String> {
    let (start_lat, start_lng) = DEFAULT_START;
    let body = format!(
        "<form method=\"post\" action=\"/time\">\
         <label>Latitude <input name=\"start_latitude\" value=\"{start_lat}\"></label>\
         <label>Longitude <input name=\"start_longitude\" value=\"{start_lng}\"></label>\
         <button type=\"submit\">Estimate</button>\
         </form>"
    );
    html::page("Pickup times", &body)
}

pub async fn time_results(
    State(state): State<AppState>,
    Form(form): Form<TimeForm>,
) -> Result<Html<String>> {
    let response = state
        .server
        .estimates()
        .time(form.start_latitude, form.start_longitude)
        .await?;

    let body = match response.into_result() {
        Ok(collection) => {
            let rows: String = collection
                .times
                .iter()
                .map(|time| {
                    format!(
                        "<tr><td>{}</td><td>{} min</td></tr>",
                        html::escape(&time.display_name),
                        time.estimate / 60,
                    )
                })
                .collect();
            format!("<table><tr><th>Product</th><th>Pickup in</th></tr>{rows}</table>")
        }
        Err(error) => html::remote_error(&error),
    };
    Ok(html::page("Pickup times", &body))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::routes::test_support;

    #[tokio::test]
    async fn price_form_prefills_both_ends() {
        let router = test_support::router_for("http://127.0.0.1:9");

        let response = router
            .oneshot(Request::builder().uri("/price").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let page = String::from_utf8(body.to_vec()).unwrap();
        assert!(page.contains("value=\"-37.8602828\""));
        assert!(page.contains("value=\"-38.3436789\""));
        assert!(page.contains("value=\"144.7430275\""));
    }

    #[tokio::test]
    async fn price_results_render_fares() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/estimates/price"))
            .and(query_param("start_latitude", "-37.8602828"))
            .and(query_param("end_latitude", "-38.3436789"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "prices": [
                    {
                        "product_id": "prod-1",
                        "currency_code": "AUD",
                        "display_name": "uberX",
                        "estimate": "$120-140",
                        "low_estimate": 120,
                        "high_estimate": 140,
                        "surge_multiplier": 1.0,
                        "duration": 5_400,
                        "distance": 57.3
                    }
                ]
            })))
            .mount(&server)
            .await;
        let router = test_support::router_for(&server.uri());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/price")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(
                        "start_latitude=-37.8602828&start_longitude=145.079616\
                         &end_latitude=-38.3436789&end_longitude=144.7430275",
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let page = String::from_utf8(body.to_vec()).unwrap();
        assert!(page.contains("$120-140"));
        assert!(page.contains("90 min"));
    }

    #[tokio::test]
    async fn time_results_render_pickup_minutes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/estimates/time"))
            .and(query_param("start_latitude", "-37.8602828"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "times": [
                    { "product_id": "prod-1", "display_name": "uberX", "estimate": 300 }
                ]
            })))
            .mount(&server)
            .await;
        let router = test_support::router_for(&server.uri());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/time")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("start_latitude=-37.8602828&start_longitude=145.079616"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let page = String::from_utf8(body.to_vec()).unwrap();
        assert!(page.contains("uberX"));
        assert!(page.contains("5 min"));
    }
}
