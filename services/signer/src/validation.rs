//! Input validation for sign and verify requests

use crate::models::{SignRequest, VerifyRequest};

pub const BEARER_FORMAT_MESSAGE: &str = "authorization header format must be Bearer {token}";

/// Validate a sign request, returning the answers on success
pub fn validate_sign_request(req: &SignRequest) -> Result<&[String], String> {
    if req.user_id.is_empty() {
        return Err("user id cannot be null".to_string());
    }

    match req.answers.as_deref() {
        Some(answers) if !answers.is_empty() => Ok(answers),
        _ => Err("answers are required".to_string()),
    }
}

/// Validate a verify request
pub fn validate_verify_request(req: &VerifyRequest) -> Result<(), String> {
    if req.user_id.is_empty() {
        return Err("userId required".to_string());
    }

    if req.signature.is_empty() {
        return Err("signature required".to_string());
    }

    Ok(())
}

/// Validate the shape of an `Authorization` header value
///
/// Only the `Bearer <token>` form is accepted. The token is not inspected.
pub fn validate_bearer_present(auth_header: Option<&str>) -> Result<(), String> {
    let auth_header = match auth_header {
        Some(value) if !value.is_empty() => value,
        _ => return Err("authorization header is required".to_string()),
    };

    let parts: Vec<&str> = auth_header.split(' ').collect();
    if parts.len() != 2 || parts[0] != "Bearer" {
        return Err(BEARER_FORMAT_MESSAGE.to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign_request(user_id: &str, answers: Option<Vec<&str>>) -> SignRequest {
        SignRequest {
            user_id: user_id.to_string(),
            answers: answers.map(|a| a.into_iter().map(String::from).collect()),
        }
    }

    #[test]
    fn test_validate_sign_request() {
        assert!(validate_sign_request(&sign_request("user1", Some(vec!["answer1"]))).is_ok());

        assert_eq!(
            validate_sign_request(&sign_request("", Some(vec!["answer1"]))),
            Err("user id cannot be null".to_string())
        );
        assert_eq!(
            validate_sign_request(&sign_request("user1", Some(vec![]))),
            Err("answers are required".to_string())
        );
        assert_eq!(
            validate_sign_request(&sign_request("user1", None)),
            Err("answers are required".to_string())
        );
    }

    #[test]
    fn test_empty_user_id_is_reported_first() {
        assert_eq!(
            validate_sign_request(&sign_request("", None)),
            Err("user id cannot be null".to_string())
        );
    }

    #[test]
    fn test_validate_verify_request() {
        let valid = VerifyRequest {
            user_id: "user1".to_string(),
            signature: "signature1".to_string(),
        };
        assert!(validate_verify_request(&valid).is_ok());

        let missing_user = VerifyRequest {
            user_id: String::new(),
            ..valid.clone()
        };
        assert_eq!(
            validate_verify_request(&missing_user),
            Err("userId required".to_string())
        );

        let missing_signature = VerifyRequest {
            signature: String::new(),
            ..valid
        };
        assert_eq!(
            validate_verify_request(&missing_signature),
            Err("signature required".to_string())
        );
    }

    #[test]
    fn test_validate_bearer_present() {
        assert!(validate_bearer_present(None).is_err());
        assert!(validate_bearer_present(Some("")).is_err());
        assert!(validate_bearer_present(Some("Basic token")).is_err());
        assert!(validate_bearer_present(Some("Bearer")).is_err());
        assert!(validate_bearer_present(Some("Bearer a b")).is_err());
        assert!(validate_bearer_present(Some("bearer token")).is_err());
        assert!(validate_bearer_present(Some("Bearer token")).is_ok());
    }
}
