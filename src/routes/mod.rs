use actix_web::middleware::DefaultHeaders;
use actix_web::web;

/// # Health Check Endpoint
///
/// Returns a fixed payload identifying the service and reporting it
/// healthy, for any request method.
///
/// ## Response
/// - **200 OK**: `{"status":"healthy","service":"email-validator"}`
pub mod health;

/// # Email Validation Endpoint
///
/// Validates an email address by delegating to the verifier capability
/// (syntax, mail-host resolution, optional SMTP probe).
///
/// ## Request
/// - Method: POST
/// - Body: JSON object with `email` field
///
/// ## Responses
/// - **200 OK**: validation ran; body carries the verdict
/// - **400 Bad Request**: body was not decodable JSON
/// - **405 Method Not Allowed**: method other than POST/OPTIONS
pub mod email;

/// # Route Configuration
///
/// Registers both endpoints at the server root.
///
/// ```text
/// POST /validate - Email validation endpoint
/// GET  /health   - Service health status
/// ```
///
/// Every response carries the permissive CORS headers, so browser
/// clients on any origin can call the API directly.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(email::configure_routes)
        .configure(health::configure_routes);
}

/// CORS headers attached to every response on both routes.
pub(crate) fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Methods", "POST, OPTIONS"))
        .add(("Access-Control-Allow-Headers", "Content-Type"))
}
