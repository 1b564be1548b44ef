//! Early-access registration: wire types and input validation.
//!
//! The actual POST lives in `chirp_web`; this half is pure so the rules can
//! be tested natively. Field names follow the backend's camelCase wire
//! format.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    /// Seconds to wait before retrying, when the backend rate-limits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u32>,
}

impl RegistrationResponse {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }
}

/// The messages are shown to the user verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name and email are required")]
    MissingFields,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Name must be between 2 and 100 characters")]
    NameLength,
}

/// Normalizes (trim, lowercase the email) and validates the form input.
pub fn validate_registration(
    name: &str,
    email: &str,
) -> Result<RegistrationRequest, ValidationError> {
    if name.is_empty() || email.is_empty() {
        return Err(ValidationError::MissingFields);
    }

    let name = name.trim();
    let email = email.trim().to_lowercase();

    if !email_looks_valid(&email) {
        return Err(ValidationError::InvalidEmail);
    }
    if name.len() < 2 || name.len() > 100 {
        return Err(ValidationError::NameLength);
    }

    Ok(RegistrationRequest {
        name: name.to_string(),
        email,
    })
}

/// Structural check only: one `@`, no whitespace, and a dot inside the
/// domain with characters on both sides. Deliverability is the backend's
/// problem.
fn email_looks_valid(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.find('.') {
        Some(i) => i > 0 && i < domain.len() - 1,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_normalizes_valid_input() {
        let req = validate_registration("  Ada Lovelace ", " Ada@Example.COM")
            .expect("input is valid");
        assert_eq!(req.name, "Ada Lovelace");
        assert_eq!(req.email, "ada@example.com");
    }

    #[test]
    fn empty_fields_are_rejected_first() {
        assert_eq!(
            validate_registration("", "ada@example.com"),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            validate_registration("Ada", ""),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in [
            "plainaddress",
            "@example.com",
            "ada@",
            "ada@example",
            "ada@.com",
            "ada@example.",
            "ada@exa mple.com",
            "ada@@example.com",
        ] {
            assert_eq!(
                validate_registration("Ada", email),
                Err(ValidationError::InvalidEmail),
                "email {email:?}"
            );
        }
    }

    #[test]
    fn name_length_bounds() {
        assert_eq!(
            validate_registration("A", "ada@example.com"),
            Err(ValidationError::NameLength)
        );
        let long = "x".repeat(101);
        assert_eq!(
            validate_registration(&long, "ada@example.com"),
            Err(ValidationError::NameLength)
        );
        assert!(validate_registration(&"x".repeat(100), "ada@example.com").is_ok());
    }

    #[test]
    fn response_wire_format_is_camel_case() {
        let parsed: RegistrationResponse = serde_json::from_str(
            r#"{"success":false,"error":"Too many requests","retryAfter":30}"#,
        )
        .expect("valid json");
        assert!(!parsed.success);
        assert_eq!(parsed.retry_after, Some(30));
        assert_eq!(parsed.error.as_deref(), Some("Too many requests"));

        let round = serde_json::to_string(&parsed).expect("serializes");
        assert!(round.contains("retryAfter"));
        assert!(!round.contains("user_id"));
    }

    #[test]
    fn absent_optionals_default_to_none() {
        let parsed: RegistrationResponse =
            serde_json::from_str(r#"{"success":true}"#).expect("valid json");
        assert!(parsed.success);
        assert_eq!(parsed, RegistrationResponse {
            success: true,
            ..RegistrationResponse::default()
        });
    }
}
