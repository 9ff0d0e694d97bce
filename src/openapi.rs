use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Defines the API contract using OpenAPI 3.0 format with utoipa
/// procedural macros, generated at compile time from the route and schema
/// annotations. Served through Swagger UI at `/swagger-ui/` with the raw
/// document at `/api-docs/openapi.json`.
///
/// # Endpoints
/// - Health Check: `GET /health`
/// - Email Validation: `POST /validate`
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::email::validate,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::email::ValidateRequest,
            crate::models::email::ValidateResponse
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Email Validation", description = "Email address validation endpoints")
    ),
    info(
        description = "Validates whether an email address is well-formed and deliverable",
        title = "Email Validator API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
