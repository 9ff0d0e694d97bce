use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Health Status Response
///
/// Reports the service as operational. The payload is a fixed literal so
/// monitoring probes can match it byte-for-byte.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "healthy",
///   "service": "email-validator"
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            service: "email-validator".to_string(),
        }
    }
}
