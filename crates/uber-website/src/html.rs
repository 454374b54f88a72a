//! HTML rendering helpers.
//!
//! The pages are small enough that `format!` templates beat a template
//! engine. Every interpolated value goes through [`escape`].

use axum::response::Html;
use uber_client::UberError;

/// Wrap page content in the shared shell.
pub fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!doctype html>\n\
         <html lang=\"en\">\n\
         <head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
         <body>\n\
         <nav><a href=\"/\">Home</a> | <a href=\"/products\">Products</a> | \
         <a href=\"/price\">Price</a> | <a href=\"/time\">Time</a> | \
         <a href=\"/user\">Profile</a> | <a href=\"/requests\">Requests</a> | \
         <a href=\"/auth\">Connect</a></nav>\n\
         <h1>{title}</h1>\n\
         {body}\n\
         </body>\n\
         </html>\n",
        title = escape(title),
        body = body,
    ))
}

/// Escape a value for interpolation into HTML text or attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the remote error from a response envelope.
pub fn remote_error(error: &UberError) -> String {
    format!(
        "<p class=\"error\">The API declined the call: {} (code {})</p>",
        escape(&error.message),
        escape(&error.code),
    )
}

/// Render a unix timestamp as a UTC date-time, `-` when out of range.
pub fn unix_to_utc(unix: i64) -> String {
    match chrono::DateTime::from_timestamp(unix, 0) {
        Some(datetime) => datetime.format("%Y-%m-%d %H:%M UTC").to_string(),
        None => "-".to_string(),
    }
}
