use axum::{extract::State, Json};
use tracing::info;

use crate::config::AppState;
use crate::services::currency_service::relay_currencies;
use crate::types::external::CurrencyData;
use crate::utils::error::ApiError;

pub async fn get_currencies(State(state): State<AppState>) -> Result<Json<CurrencyData>, ApiError> {
    info!("Endpoint Hit: getCurrencies");
    let data = relay_currencies(&state).await?;
    Ok(Json(data))
}
