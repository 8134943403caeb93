use axum::{response::IntoResponse, Json};
use tracing::info;

use crate::models::base_response::BaseResponse;

pub async fn home() -> &'static str {
    info!("Endpoint Hit: home");
    "Welcome to the Home!"
}

pub async fn return_greeting() -> impl IntoResponse {
    info!("Endpoint Hit: returnGreeting");
    Json(BaseResponse {
        status: 200,
        message: "Hello world".into(),
    })
}
