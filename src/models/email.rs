use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message returned when the address passed validation.
pub const VALID_MESSAGE: &str = "Email validation completed";

/// Message returned when the address was rejected or could not be
/// confirmed deliverable.
pub const INVALID_MESSAGE: &str = "Email is not valid or deliverable";

/// # Validation Request Body
///
/// The JSON body of a validation request. No shape checks beyond JSON
/// well-formedness; whatever string arrives is handed to the verifier
/// unchanged.
///
/// ## Example JSON
/// ```json
/// { "email": "user@example.com" }
/// ```
#[derive(Deserialize, ToSchema)]
pub struct ValidateRequest {
    pub email: String,
}

/// # Validation Response Body
///
/// ## Fields
/// - `valid`: the verifier's decision
/// - `email`: the input address, echoed verbatim
/// - `message`: fixed human-readable string chosen by `valid`
///
/// ## Example JSON
/// ```json
/// {
///   "valid": true,
///   "email": "user@example.com",
///   "message": "Email validation completed"
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct ValidateResponse {
    pub valid: bool,
    pub email: String,
    pub message: String,
}

impl ValidateResponse {
    pub fn new(email: String, valid: bool) -> Self {
        let message = if valid { VALID_MESSAGE } else { INVALID_MESSAGE };
        Self {
            valid,
            email,
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request_deserialization() {
        let json = r#"{"email": "user@example.com"}"#;
        let request: ValidateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.email, "user@example.com");
    }

    #[test]
    fn test_missing_email_field() {
        let result: Result<ValidateRequest, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_email_type() {
        let result: Result<ValidateRequest, _> = serde_json::from_str(r#"{"email": 123}"#);
        assert!(result.is_err());

        let result: Result<ValidateRequest, _> = serde_json::from_str(r#"{"email": null}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_email_string_is_accepted() {
        let request: ValidateRequest = serde_json::from_str(r#"{"email": ""}"#).unwrap();
        assert_eq!(request.email, "");
    }

    #[test]
    fn test_whitespace_is_preserved() {
        let request: ValidateRequest =
            serde_json::from_str(r#"{"email": "  user@example.com  "}"#).unwrap();
        assert_eq!(request.email, "  user@example.com  ");
    }

    #[test]
    fn test_unicode_email() {
        let request: ValidateRequest =
            serde_json::from_str(r#"{"email": "tëst@example.com"}"#).unwrap();
        assert_eq!(request.email, "tëst@example.com");
    }

    #[test]
    fn test_extra_fields_ignored() {
        let json = r#"{"email": "user@example.com", "extra": "ignored"}"#;
        let request: ValidateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.email, "user@example.com");
    }

    #[test]
    fn test_malformed_json() {
        let result: Result<ValidateRequest, _> =
            serde_json::from_str(r#"{"email": "user@example.com""#);
        assert!(result.is_err());

        let result: Result<ValidateRequest, _> = serde_json::from_str(r#"["user@example.com"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_response_message_tracks_validity() {
        let response = ValidateResponse::new("user@example.com".to_string(), true);
        assert!(response.valid);
        assert_eq!(response.email, "user@example.com");
        assert_eq!(response.message, VALID_MESSAGE);

        let response = ValidateResponse::new("not-an-email".to_string(), false);
        assert!(!response.valid);
        assert_eq!(response.email, "not-an-email");
        assert_eq!(response.message, INVALID_MESSAGE);
    }

    #[test]
    fn test_response_serialization_field_order() {
        let response = ValidateResponse::new("user@example.com".to_string(), true);
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(
            json,
            r#"{"valid":true,"email":"user@example.com","message":"Email validation completed"}"#
        );
    }
}
