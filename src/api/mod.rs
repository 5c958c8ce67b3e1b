pub mod greetings;
pub mod health;
pub mod items;
pub mod pages;
pub mod views;

use crate::config::Config;
use crate::db::Repository;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Config,
}

impl AppState {
    pub fn new(repo: Arc<Repository>, config: Config) -> Self {
        Self { repo, config }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/", get(greetings::index))
        .route("/hello", get(greetings::hello))
        .route("/hello/:name", get(greetings::hello_name))
        .route("/goodbye", get(greetings::goodbye))
        .route("/birthday", get(greetings::birthday))
        .route("/birthday/:name", get(greetings::birthday_name))
        .route("/time", get(greetings::time))
        .route("/api/pi", get(greetings::pi))
        .route(
            "/api/items",
            get(items::list_items).post(items::create_item),
        )
        .route(
            "/api/items/:id",
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
        .route("/items", get(pages::list_page))
        .route(
            "/items/create",
            get(pages::create_page).post(pages::create_submit),
        )
        .route(
            "/items/update/:id",
            get(pages::update_page).post(pages::update_submit),
        )
        .route("/items/delete/:id", get(pages::delete_submit))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
