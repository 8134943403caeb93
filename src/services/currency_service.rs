use axum::body::Bytes;
use reqwest::Client;
use tracing::warn;

use crate::config::AppState;
use crate::types::external::CurrencyData;
use crate::utils::error::ApiError;

/// Single GET against the enumeration API, returning the raw body.
///
/// The response lives only in this scope, so the connection is released on
/// every return path.
pub async fn fetch_currencies(http: Client, url: String) -> Result<Bytes, ApiError> {
    let resp = http
        .get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Upstream(format!("Could not reach {}: {}", url, e)))?;

    let status = resp.status();
    if !status.is_success() {
        // Body is still relayed; the envelope carries its own status.
        warn!("currency upstream answered {}", status);
    }

    resp.bytes()
        .await
        .map_err(|e| ApiError::Upstream(format!("Could not read currencies body: {}", e)))
}

/// Runs the fetch on its own task and waits for its one result, then decodes it.
pub async fn relay_currencies(state: &AppState) -> Result<CurrencyData, ApiError> {
    let fetch = tokio::spawn(fetch_currencies(
        state.http.clone(),
        state.currencies_url.clone(),
    ));

    let body = fetch
        .await
        .map_err(|e| ApiError::Internal(format!("currency fetch task did not complete: {}", e)))??;

    serde_json::from_slice::<CurrencyData>(&body)
        .map_err(|e| ApiError::Decode(format!("currency body is not valid CurrencyData: {}", e)))
}
