/// # Health Status Response
///
/// Fixed payload identifying the service and reporting it healthy.
/// Used as the response format for the health check endpoint.
pub mod health;

/// # Validation Request and Response
///
/// Wire types for the validation endpoint: the decoded `{ "email": ... }`
/// request body and the `{ "valid", "email", "message" }` response.
pub mod email;
