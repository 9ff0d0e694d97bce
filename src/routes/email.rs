use crate::models::email::{ValidateRequest, ValidateResponse};
use crate::verifier::VerifyEmail;
use actix_web::error::InternalError;
use actix_web::{HttpResponse, Responder, guard, web};

/// # Email Validation Endpoint
///
/// Decodes the request body and delegates the decision to the verifier
/// capability. The verifier may perform network I/O (DNS lookups, SMTP
/// probing) with its own internal timeouts, so it runs on the blocking
/// thread pool; this handler adds no timeout of its own.
///
/// ## Request
/// - Method: POST
/// - Body: JSON object with `email` field
///
/// ## Responses
/// - **200 OK**: validation ran; `valid` carries the verdict and `email`
///   echoes the input verbatim
/// - **400 Bad Request**: body was not decodable JSON; the verifier is
///   never invoked
/// - **405 Method Not Allowed**: method other than POST/OPTIONS
///
/// ## Example Request
/// ```json
/// { "email": "user@example.com" }
/// ```
#[utoipa::path(
    post,
    path = "/validate",
    request_body = ValidateRequest,
    responses(
        (status = 200, description = "Validation completed", body = ValidateResponse),
        (status = 400, description = "Invalid JSON body"),
        (status = 405, description = "Method not allowed")
    ),
    tag = "Email Validation"
)]
pub async fn validate(
    req: web::Json<ValidateRequest>,
    verifier: web::Data<dyn VerifyEmail>,
) -> Result<impl Responder, actix_web::Error> {
    let email = req.into_inner().email;

    let verifier = verifier.into_inner();
    let target = email.clone();
    let verdict = web::block(move || verifier.verify(&target))
        .await
        .map_err(|e| {
            actix_web::error::ErrorInternalServerError(format!("validation task failed: {e}"))
        })?;

    if !verdict.is_deliverable() {
        log::debug!("rejected {email:?}: {verdict:?}");
    }

    Ok(HttpResponse::Ok().json(ValidateResponse::new(email, verdict.is_deliverable())))
}

/// CORS preflight: browsers send OPTIONS before the cross-origin POST.
/// The CORS headers come from the resource middleware; the body stays
/// empty.
pub async fn preflight() -> impl Responder {
    HttpResponse::Ok().finish()
}

pub async fn method_not_allowed() -> impl Responder {
    HttpResponse::MethodNotAllowed().body("Method not allowed")
}

/// Decode failures all collapse to a generic 400; the response never
/// names the field or position that failed.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        InternalError::from_response(err, HttpResponse::BadRequest().body("Invalid JSON")).into()
    })
}

/// # Route Configuration
///
/// Registers the validation endpoint: POST runs validation, OPTIONS
/// answers preflight, anything else is 405. CORS headers are attached to
/// every response.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/validate")
            .app_data(json_config())
            .route(web::post().to(validate))
            .route(web::route().guard(guard::Options()).to(preflight))
            .default_service(web::route().to(method_not_allowed))
            .wrap(super::cors_headers()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::email::{INVALID_MESSAGE, VALID_MESSAGE};
    use crate::verifier::{MockVerifyEmail, Rejection, Verdict};
    use actix_web::http::Method;
    use actix_web::{App, test, web::Data};
    use serde_json::json;
    use std::sync::Arc;

    // Routes run against a mocked verifier, so none of these tests touch
    // the network.
    async fn test_app(
        mock: MockVerifyEmail,
    ) -> impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    > {
        let verifier: Arc<dyn VerifyEmail> = Arc::new(mock);
        test::init_service(
            App::new()
                .app_data(Data::from(verifier))
                .configure(crate::routes::configure),
        )
        .await
    }

    #[actix_web::test]
    async fn test_deliverable_email() {
        let mut mock = MockVerifyEmail::new();
        mock.expect_verify()
            .withf(|email| email == "user@example.com")
            .return_const(Verdict::Deliverable);

        let app = test_app(mock).await;
        let req = test::TestRequest::post()
            .uri("/validate")
            .set_json(json!({ "email": "user@example.com" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["valid"], true);
        assert_eq!(body["email"], "user@example.com");
        assert_eq!(body["message"], VALID_MESSAGE);
    }

    #[actix_web::test]
    async fn test_undeliverable_email() {
        let mut mock = MockVerifyEmail::new();
        mock.expect_verify()
            .return_const(Verdict::Undeliverable(Rejection::Syntax));

        let app = test_app(mock).await;
        let req = test::TestRequest::post()
            .uri("/validate")
            .set_json(json!({ "email": "not-an-email" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["valid"], false);
        assert_eq!(body["email"], "not-an-email");
        assert_eq!(body["message"], INVALID_MESSAGE);
    }

    #[actix_web::test]
    async fn test_echo_is_verbatim() {
        // The input reaches the verifier and comes back untrimmed
        let mut mock = MockVerifyEmail::new();
        mock.expect_verify()
            .withf(|email| email == "  spaced@example.com  ")
            .return_const(Verdict::Undeliverable(Rejection::Syntax));

        let app = test_app(mock).await;
        let req = test::TestRequest::post()
            .uri("/validate")
            .set_json(json!({ "email": "  spaced@example.com  " }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["email"], "  spaced@example.com  ");
    }

    #[actix_web::test]
    async fn test_indeterminate_reads_as_invalid_on_the_wire() {
        let mut mock = MockVerifyEmail::new();
        mock.expect_verify().return_const(Verdict::Indeterminate);

        let app = test_app(mock).await;
        let req = test::TestRequest::post()
            .uri("/validate")
            .set_json(json!({ "email": "user@example.com" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["valid"], false);
        assert_eq!(body["message"], INVALID_MESSAGE);
    }

    #[actix_web::test]
    async fn test_malformed_json_never_reaches_the_verifier() {
        let mut mock = MockVerifyEmail::new();
        mock.expect_verify().times(0);

        let app = test_app(mock).await;
        let req = test::TestRequest::post()
            .uri("/validate")
            .insert_header(("content-type", "application/json"))
            .set_payload("not json")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);

        let body = test::read_body(resp).await;
        assert_eq!(std::str::from_utf8(&body).unwrap(), "Invalid JSON");
    }

    #[actix_web::test]
    async fn test_missing_email_field_is_a_decode_error() {
        let mut mock = MockVerifyEmail::new();
        mock.expect_verify().times(0);

        let app = test_app(mock).await;
        let req = test::TestRequest::post()
            .uri("/validate")
            .set_json(json!({ "address": "user@example.com" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);
    }

    #[actix_web::test]
    async fn test_wrong_method_is_rejected() {
        let mut mock = MockVerifyEmail::new();
        mock.expect_verify().times(0);

        let app = test_app(mock).await;

        for method in [Method::GET, Method::PUT, Method::DELETE] {
            let req = test::TestRequest::with_uri("/validate")
                .method(method.clone())
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status().as_u16(), 405, "expected 405 for {method}");
        }
    }

    #[actix_web::test]
    async fn test_preflight() {
        let app = test_app(MockVerifyEmail::new()).await;

        let req = test::TestRequest::with_uri("/validate")
            .method(Method::OPTIONS)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 200);
        let headers = resp.headers().clone();
        assert_eq!(headers.get("Access-Control-Allow-Origin").unwrap(), "*");
        assert_eq!(
            headers.get("Access-Control-Allow-Methods").unwrap(),
            "POST, OPTIONS"
        );
        assert_eq!(
            headers.get("Access-Control-Allow-Headers").unwrap(),
            "Content-Type"
        );

        let body = test::read_body(resp).await;
        assert!(body.is_empty());
    }

    #[actix_web::test]
    async fn test_cors_headers_on_validation_responses() {
        let mut mock = MockVerifyEmail::new();
        mock.expect_verify().return_const(Verdict::Deliverable);

        let app = test_app(mock).await;
        let req = test::TestRequest::post()
            .uri("/validate")
            .set_json(json!({ "email": "user@example.com" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.headers().get("Access-Control-Allow-Origin").unwrap(),
            "*"
        );

        // Error responses carry them too
        let req = test::TestRequest::get().uri("/validate").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 405);
        assert_eq!(
            resp.headers().get("Access-Control-Allow-Origin").unwrap(),
            "*"
        );
    }
}
