use actix_web::{App, HttpServer, middleware, web::Data};
use email_validator::config::Settings;
use email_validator::openapi::ApiDoc;
use email_validator::verifier::{EmailVerifier, VerifierConfig, VerifyEmail};
use flexi_logger::Logger;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Email Validator Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Validation and health endpoints at the server root
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
/// - A process-wide verifier injected into the request handlers
///
/// # Endpoints
/// - Validation: `POST /validate`
/// - Health: `GET /health`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - `PORT`, `VERIFIER_EMAIL`, `SMTP_SAFE_CHECK` environment variables
///   (see [`Settings`]); any invalid value aborts startup
/// - Log level via `RUST_LOG` (default `info`)
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let _logger = Logger::try_with_env_or_str("info")
        .and_then(|logger| logger.start())
        .map_err(|e| std::io::Error::other(format!("logger init failed: {e}")))?;

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let config = match VerifierConfig::new(&settings.verifier_email, settings.smtp_safe_check) {
        Ok(config) => config,
        Err(e) => {
            log::error!("invalid verifier configuration: {e}");
            std::process::exit(1);
        }
    };

    let verifier: Arc<dyn VerifyEmail> = Arc::new(EmailVerifier::new(config));
    let verifier = Data::from(verifier);

    log::info!(
        "email validator service starting on port {} (smtp_safe_check: {})",
        settings.port,
        settings.smtp_safe_check
    );

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .wrap(middleware::Logger::default())
            .app_data(verifier.clone())
            .configure(email_validator::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind(("0.0.0.0", settings.port))?
    .run()
    .await
}
