//! Credential and account form schemas.
//!
//! The password/confirmation refinement is deliberately evaluated after every
//! per-field check, and only when both values are structurally strings; its
//! failure is attached to `confirmPassword` since that is the field the user
//! should correct.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::fields;
use super::FieldError;

const PASSWORDS_DONT_MATCH: &str = "Passwords don't match";

/// Sign-in form payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

impl LoginInput {
    pub fn validate(raw: &Value) -> Result<Self, Vec<FieldError>> {
        let mut errors = Vec::new();

        let email = fields::required_email(raw, "email", &mut errors);
        let password = fields::non_empty_string(raw, "password", "Password is required", &mut errors);

        match (email, password) {
            (Some(email), Some(password)) if errors.is_empty() => Ok(Self { email, password }),
            _ => Err(errors),
        }
    }
}

/// Account registration payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl RegisterInput {
    pub fn validate(raw: &Value) -> Result<Self, Vec<FieldError>> {
        let mut errors = Vec::new();

        let email = fields::required_email(raw, "email", &mut errors);
        let password_raw = fields::required_string(raw, "password", &mut errors);
        let password =
            password_raw.and_then(|value| fields::password_rules(value, "password", &mut errors));
        let confirm_raw = fields::required_string(raw, "confirmPassword", &mut errors);
        let first_name = fields::optional_string(raw, "firstName", &mut errors);
        let last_name = fields::optional_string(raw, "lastName", &mut errors);

        if let (Some(password), Some(confirm)) = (password_raw, confirm_raw) {
            if password != confirm {
                errors.push(FieldError::new("confirmPassword", PASSWORDS_DONT_MATCH));
            }
        }

        match (email, password, confirm_raw, first_name, last_name) {
            (Some(email), Some(password), Some(confirm), Some(first_name), Some(last_name))
                if errors.is_empty() =>
            {
                Ok(Self {
                    email,
                    password,
                    confirm_password: confirm.to_string(),
                    first_name,
                    last_name,
                })
            }
            _ => {
                tracing::debug!(schema = "register", count = errors.len(), "form input rejected");
                Err(errors)
            }
        }
    }
}

/// Forgot-password request payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgotPasswordInput {
    pub email: String,
}

impl ForgotPasswordInput {
    pub fn validate(raw: &Value) -> Result<Self, Vec<FieldError>> {
        let mut errors = Vec::new();

        match fields::required_email(raw, "email", &mut errors) {
            Some(email) if errors.is_empty() => Ok(Self { email }),
            _ => Err(errors),
        }
    }
}

/// Password-reset payload. The token and email are optional because the reset
/// flow reaches this schema from both the emailed link and the signed-in
/// settings page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordInput {
    pub token: Option<String>,
    pub email: Option<String>,
    pub password: String,
    pub confirm_password: String,
}

impl ResetPasswordInput {
    pub fn validate(raw: &Value) -> Result<Self, Vec<FieldError>> {
        let mut errors = Vec::new();

        let token = fields::optional_string(raw, "token", &mut errors);
        let email = fields::optional_email(raw, "email", &mut errors);
        let password_raw = fields::required_string(raw, "password", &mut errors);
        let password =
            password_raw.and_then(|value| fields::password_rules(value, "password", &mut errors));
        let confirm_raw = fields::required_string(raw, "confirmPassword", &mut errors);

        if let (Some(password), Some(confirm)) = (password_raw, confirm_raw) {
            if password != confirm {
                errors.push(FieldError::new("confirmPassword", PASSWORDS_DONT_MATCH));
            }
        }

        match (token, email, password, confirm_raw) {
            (Some(token), Some(email), Some(password), Some(confirm)) if errors.is_empty() => {
                Ok(Self {
                    token,
                    email,
                    password,
                    confirm_password: confirm.to_string(),
                })
            }
            _ => {
                tracing::debug!(
                    schema = "reset_password",
                    count = errors.len(),
                    "form input rejected"
                );
                Err(errors)
            }
        }
    }
}
