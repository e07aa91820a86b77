//! Endpoint index served at `/`

use axum::{http::header::HeaderMap, response::Html};

const ENDPOINTS: &[(&str, &str)] = &[
    ("GET", "/health"),
    ("GET", "/members"),
    ("POST", "/members"),
    ("GET", "/members/:id"),
    ("DELETE", "/members/:id"),
];

pub async fn sitemap(headers: HeaderMap) -> Html<String> {
    let host = headers
        .get("Host")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("localhost");

    Html(render(host))
}

fn render(host: &str) -> String {
    let items: String = ENDPOINTS
        .iter()
        .map(|(method, path)| {
            // Only parameterless GET routes are directly clickable
            if *method == "GET" && !path.contains(':') {
                format!(
                    "<li>{} <a href=\"http://{}{}\">{}</a></li>",
                    method, host, path, path
                )
            } else {
                format!("<li>{} {}</li>", method, path)
            }
        })
        .collect();

    format!(
        "<html><head><title>Family API</title></head><body>\
         <h1>Family API</h1><p>Endpoints:</p><ul>{}</ul></body></html>",
        items
    )
}
