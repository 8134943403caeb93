use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::AppState;
use crate::handlers::currencies::get_currencies;
use crate::handlers::greeting::{home, return_greeting};

/// Static GET routes only; anything else falls through to axum's default 404.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/hello", get(return_greeting))
        .route("/getCurrencies", get(get_currencies))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
