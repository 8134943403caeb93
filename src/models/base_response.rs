use serde::{Deserialize, Serialize};

/// Minimal `{status, message}` envelope.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BaseResponse {
    pub status: u16,
    pub message: String,
}
