use crate::models::health::HealthResponse;
use actix_web::{HttpResponse, Responder, web};

/// # Health Check Endpoint
///
/// Returns the fixed health payload. Responds to any method so load
/// balancers and uptime probes can use whatever verb they prefer.
///
/// ## Example Response
/// ```json
/// {
///   "status": "healthy",
///   "service": "email-validator"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health Check"
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::healthy())
}

/// # Route Configuration
///
/// Registers the health endpoint with CORS headers on every response.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/health")
            .route(web::route().to(health))
            .wrap(super::cors_headers()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn test_health_endpoint() {
        let app = test::init_service(App::new().configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        assert_eq!(
            resp.headers()
                .get("Access-Control-Allow-Origin")
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );

        let body = test::read_body(resp).await;
        assert_eq!(
            std::str::from_utf8(&body).unwrap(),
            r#"{"status":"healthy","service":"email-validator"}"#
        );
    }

    #[actix_web::test]
    async fn test_health_accepts_any_method() {
        let app = test::init_service(App::new().configure(configure_routes)).await;

        for req in [
            test::TestRequest::post().uri("/health").to_request(),
            test::TestRequest::delete().uri("/health").to_request(),
            test::TestRequest::with_uri("/health")
                .method(actix_web::http::Method::OPTIONS)
                .to_request(),
        ] {
            let resp = test::call_service(&app, req).await;
            assert!(resp.status().is_success());
        }
    }

    #[actix_web::test]
    async fn test_health_ignores_query_parameters() {
        let app = test::init_service(App::new().configure(configure_routes)).await;

        let req = test::TestRequest::get()
            .uri("/health?verbose=true")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        let body = test::read_body(resp).await;
        assert_eq!(
            std::str::from_utf8(&body).unwrap(),
            r#"{"status":"healthy","service":"email-validator"}"#
        );
    }
}
