use axum::{http::StatusCode, response::{IntoResponse, Response}};
use thiserror::Error;
use tracing::error;

/// Body sent to the client for every relay failure. Details stay in the logs.
pub const GENERIC_FAILURE: &str = "Something went wrong!";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("upstream_unavailable: {0}")]
    Upstream(String),
    #[error("upstream_malformed: {0}")]
    Decode(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("{}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn display_carries_kind_and_detail() {
        let err = ApiError::Decode("expected value at line 1".into());
        assert_eq!(err.to_string(), "upstream_malformed: expected value at line 1");
    }

    #[tokio::test]
    async fn every_variant_renders_generic_500() {
        for err in [
            ApiError::Upstream("connection refused".into()),
            ApiError::Decode("expected value".into()),
            ApiError::Internal("task panicked".into()),
        ] {
            let resp = err.into_response();
            assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
            let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
            assert_eq!(&body[..], GENERIC_FAILURE.as_bytes());
        }
    }
}
