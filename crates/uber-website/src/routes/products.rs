//! Product listing pages.

use axum::extract::State;
use axum::response::Html;
use axum::Form;
use serde::Deserialize;

use crate::error::Result;
use crate::html;
use crate::routes::DEFAULT_START;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProductsForm {
    pub latitude: f64,
    pub longitude: f64,
}

pub async fn form() -> Html<String> {
    let (latitude, longitude) = DEFAULT_START;
    let body = format!(
        "<form method=\"post\" action=\"/products\">\
         <label>Latitude <input name=\"latitude\" value=\"{latitude}\"></label>\
         <label>Longitude <input name=\"longitude\" value=\"{longitude}\"></label>\
         <button type=\"submit\">Look up</button>\
         </form>"
    );
    html::page("Products", &body)
}

pub async fn results(
    State(state): State<AppState>,
    Form(form): Form<ProductsForm>,
) -> Result<Html<String>> {
    let response = state
        .server
        .products()
        .list(form.latitude, form.longitude)
        .await?;

    let body = match response.into_result() {
        Ok(collection) if collection.products.is_empty() => {
            "<p>No products serve this location.</p>".to_string()
        }
        Ok(collection) => {
            let rows: String = collection
                .products
                .iter()
                .map(|product| {
                    format!(
                        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                        html::escape(&product.display_name),
                        html::escape(&product.description),
                        product.capacity,
                        html::escape(&product.product_id),
                    )
                })
                .collect();
            format!(
                "<table>\
                 <tr><th>Name</th><th>Description</th><th>Capacity</th><th>Product id</th></tr>\
                 {rows}\
                 </table>"
            )
        }
        Err(error) => html::remote_error(&error),
    };
    Ok(html::page("Products", &body))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;
    use wiremock::matchers::{header as header_match, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::routes::test_support;

    #[tokio::test]
    async fn form_prefills_default_pickup() {
        let router = test_support::router_for("http://127.0.0.1:9");

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/products")
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
        assert!(page.contains("value=\"-37.8602828\""));
        assert!(page.contains("value=\"145.079616\""));
    }

    #[tokio::test]
    async fn results_render_product_table() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/products"))
            .and(query_param("latitude", "-37.8602828"))
            .and(query_param("longitude", "145.079616"))
            .and(header_match("authorization", "Token server-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "products": [
                    {
                        "product_id": "prod-1",
                        "description": "The low-cost Uber",
                        "display_name": "uberX",
                        "capacity": 4,
                        "image": "https://img.example/uberx.png"
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
                    .uri("/products")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("latitude=-37.8602828&longitude=145.079616"))
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
        assert!(page.contains("The low-cost Uber"));
    }

    #[tokio::test]
    async fn results_render_remote_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/products"))
            .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
                "message": "Latitude is out of range",
                "code": "validation_failed"
            })))
            .mount(&server)
            .await;
        let router = test_support::router_for(&server.uri());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/products")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("latitude=95.0&longitude=145.0"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let page = String::from_utf8(body.to_vec()).unwrap();
        assert!(page.contains("Latitude is out of range"));
        assert!(page.contains("validation_failed"));
    }
}
