//! Trip request pages: history, creation, live details and sandbox controls.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use uber_client::RequestParams;
use uber_oauth::AccessToken;

use crate::cookies;
use crate::error::Result;
use crate::html;
use crate::routes::{DEFAULT_END, DEFAULT_START};
use crate::state::AppState;

/// Statuses the sandbox will accept for a request.
const SANDBOX_STATUSES: [&str; 5] = [
    "accepted",
    "arriving",
    "in_progress",
    "driver_canceled",
    "completed",
];

/// History page size.
const HISTORY_PAGE: i32 = 50;

#[derive(Debug, Deserialize)]
pub struct CreateForm {
    pub product_id: String,
    pub start_latitude: f64,
    pub start_longitude: f64,
    pub end_latitude: f64,
    pub end_longitude: f64,
}

#[derive(Debug, Deserialize)]
pub struct StatusForm {
    pub value: String,
}

fn connect_redirect() -> Response {
    Redirect::to("/auth").into_response()
}

fn token_from(headers: &HeaderMap) -> Option<AccessToken> {
    cookies::access_token(headers)
}

pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Result<Response> {
    let Some(token) = token_from(&headers) else {
        return Ok(connect_redirect());
    };

    let rider = state.rider(&token.access_token)?;
    let response = rider.user().activity(0, HISTORY_PAGE).await?;

    let body = match response.into_result() {
        Ok(activity) if activity.history.is_empty() => {
            "<p>No trips yet.</p>\
             <p><a href=\"/requests/new\">Request a ride</a></p>"
                .to_string()
        }
        Ok(activity) => {
            let rows: String = activity
                .history
                .iter()
                .map(|trip| {
                    format!(
                        "<tr><td><a href=\"/requests/{0}\">{0}</a></td>\
                         <td>{1}</td><td>{2}</td><td>{3:.1} mi</td></tr>",
                        html::escape(&trip.uuid),
                        html::unix_to_utc(trip.request_time),
                        html::escape(&trip.status),
                        trip.distance,
                    )
                })
                .collect();
            format!(
                "<p>{} trips on record. <a href=\"/requests/new\">Request a ride</a></p>\
                 <table>\
                 <tr><th>Trip</th><th>Requested</th><th>Status</th><th>Distance</th></tr>\
                 {rows}\
                 </table>",
                activity.count
            )
        }
        Err(error) => html::remote_error(&error),
    };
    Ok(html::page("Requests", &body).into_response())
}

pub async fn new_form(State(state): State<AppState>, headers: HeaderMap) -> Result<Response> {
    let Some(token) = token_from(&headers) else {
        return Ok(connect_redirect());
    };

    let (start_lat, start_lng) = DEFAULT_START;
    let rider = state.rider(&token.access_token)?;
    let response = rider.products().list(start_lat, start_lng).await?;

    let body = match response.into_result() {
        Ok(collection) if collection.products.is_empty() => {
            "<p>No products serve the pickup location.</p>".to_string()
        }
        Ok(collection) => {
            let options: String = collection
                .products
                .iter()
                .map(|product| {
                    format!(
                        "<option value=\"{}\">{}</option>",
                        html::escape(&product.product_id),
                        html::escape(&product.display_name),
                    )
                })
                .collect();
            let (end_lat, end_lng) = DEFAULT_END;
            format!(
                "<form method=\"post\" action=\"/requests\">\
                 <label>Product <select name=\"product_id\">{options}</select></label>\
                 <label>Pickup latitude <input name=\"start_latitude\" value=\"{start_lat}\"></label>\
                 <label>Pickup longitude <input name=\"start_longitude\" value=\"{start_lng}\"></label>\
                 <label>Drop-off latitude <input name=\"end_latitude\" value=\"{end_lat}\"></label>\
                 <label>Drop-off longitude <input name=\"end_longitude\" value=\"{end_lng}\"></label>\
                 <button type=\"submit\">Request</button>\
                 </form>"
            )
        }
        Err(error) => html::remote_error(&error),
    };
    Ok(html::page("Request a ride", &body).into_response())
}

pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<CreateForm>,
) -> Result<Response> {
    let Some(token) = token_from(&headers) else {
        return Ok(connect_redirect());
    };

    let params = RequestParams {
        product_id: form.product_id,
        start_latitude: form.start_latitude,
        start_longitude: form.start_longitude,
        end_latitude: form.end_latitude,
        end_longitude: form.end_longitude,
        surge_confirmation_id: None,
    };
    let rider = state.rider(&token.access_token)?;
    let response = rider.requests().create(&params).await?;

    match response.into_result() {
        Ok(request) => {
            tracing::info!(request_id = %request.request_id, "Ride requested");
            Ok(Redirect::to(&format!("/requests/{}", request.request_id)).into_response())
        }
        Err(error) => {
            let body = html::remote_error(&error);
            Ok(html::page("Request a ride", &body).into_response())
        }
    }
}

pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response> {
    let Some(token) = token_from(&headers) else {
        return Ok(connect_redirect());
    };

    let rider = state.rider(&token.access_token)?;
    let response = rider.requests().details(&id).await?;

    let body = match response.into_result() {
        Ok(details) => {
            let eta = details
                .eta
                .map(|eta| format!("{eta} min"))
                .unwrap_or_else(|| "-".to_string());
            let driver = details
                .driver
                .map(|driver| {
                    format!(
                        "{} ({})",
                        html::escape(&driver.name),
                        html::escape(&driver.phone_number)
                    )
                })
                .unwrap_or_else(|| "not assigned".to_string());
            let vehicle = details
                .vehicle
                .map(|vehicle| {
                    format!(
                        "{} {}, plate {}",
                        html::escape(&vehicle.make),
                        html::escape(&vehicle.model),
                        html::escape(&vehicle.license_plate)
                    )
                })
                .unwrap_or_else(|| "not assigned".to_string());
            let options: String = SANDBOX_STATUSES
                .iter()
                .map(|status| format!("<option value=\"{status}\">{status}</option>"))
                .collect();
            let id = html::escape(&details.request_id);
            format!(
                "<h2>Request {id}</h2>\
                 <p>Status: {}</p>\
                 <p>Pickup in: {eta}</p>\
                 <p>Driver: {driver}</p>\
                 <p>Vehicle: {vehicle}</p>\
                 <p><a href=\"/requests/{id}/map\">Live map</a></p>\
                 <form method=\"post\" action=\"/requests/{id}/status\">\
                 <label>Sandbox status <select name=\"value\">{options}</select></label>\
                 <button type=\"submit\">Update</button>\
                 </form>\
                 <form method=\"post\" action=\"/requests/{id}/cancel\">\
                 <button type=\"submit\">Cancel request</button>\
                 </form>",
                html::escape(&details.status),
            )
        }
        Err(error) => html::remote_error(&error),
    };
    Ok(html::page("Request", &body).into_response())
}

pub async fn map(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response> {
    let Some(token) = token_from(&headers) else {
        return Ok(connect_redirect());
    };

    let rider = state.rider(&token.access_token)?;
    let response = rider.requests().map(&id).await?;

    match response.into_result() {
        Ok(map) => Ok(Redirect::to(&map.href).into_response()),
        Err(error) => {
            let body = html::remote_error(&error);
            Ok(html::page("Live map", &body).into_response())
        }
    }
}

pub async fn cancel(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response> {
    let Some(token) = token_from(&headers) else {
        return Ok(connect_redirect());
    };

    let rider = state.rider(&token.access_token)?;
    let response = rider.requests().cancel(&id).await?;

    match response.into_result() {
        Ok(_) => {
            tracing::info!(request_id = %id, "Ride canceled");
            Ok(Redirect::to("/requests").into_response())
        }
        Err(error) => {
            let body = html::remote_error(&error);
            Ok(html::page("Request", &body).into_response())
        }
    }
}

pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Form(form): Form<StatusForm>,
) -> Result<Response> {
    let Some(token) = token_from(&headers) else {
        return Ok(connect_redirect());
    };

    let rider = state.rider(&token.access_token)?;
    let accepted = rider.update_request_status(&id, Some(&form.value)).await?;

    if accepted {
        Ok(Redirect::to(&format!("/requests/{id}")).into_response())
    } else {
        let body = format!(
            "<p>The sandbox declined the status change.</p>\
             <p><a href=\"/requests/{}\">Back to the request</a></p>",
            html::escape(&id)
        );
        Ok(html::page("Request", &body).into_response())
    }
}
