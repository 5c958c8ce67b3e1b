//! Fixed demo routes that do not touch storage.

use axum::extract::Path;
use axum::response::Html;
use axum::Json;
use serde_json::{json, Value};

pub async fn index() -> Html<&'static str> {
    Html("<html><body>Hello!</body></html>")
}

pub async fn hello() -> &'static str {
    "Hello!"
}

pub async fn hello_name(Path(name): Path<String>) -> String {
    format!("Hello, {}!", name)
}

pub async fn goodbye() -> &'static str {
    "Goodbye!"
}

pub async fn birthday() -> &'static str {
    "Happy Birthday!"
}

pub async fn birthday_name(Path(name): Path<String>) -> String {
    format!("Happy Birthday, {}!", name)
}

pub async fn time() -> Html<String> {
    let now = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
    Html(format!("<html><body>Server time: {}</body></html>", now))
}

pub async fn pi() -> Json<Value> {
    Json(json!([{ "pi": 3.14159 }]))
}
