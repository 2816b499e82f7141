//! Scenarios for the credential form schemas.

use casaport_core::validation::{
    ForgotPasswordInput, LoginInput, RegisterInput, ResetPasswordInput,
};
use serde_json::json;

#[test]
fn registration_accepts_a_complete_submission() {
    let raw = json!({
        "email": "new.agent@casaport.example",
        "password": "Abcdefg1",
        "confirmPassword": "Abcdefg1",
        "firstName": "Dana",
        "lastName": "Okafor"
    });

    let input = RegisterInput::validate(&raw).expect("valid registration");
    assert_eq!(input.email, "new.agent@casaport.example");
    assert_eq!(input.first_name.as_deref(), Some("Dana"));
    assert_eq!(input.password, input.confirm_password);
}

#[test]
fn mismatched_confirmation_reports_exactly_one_error_on_confirm_password() {
    let raw = json!({
        "email": "a@b.com",
        "password": "Abcdefg1",
        "confirmPassword": "Abcdefg2"
    });

    let errors = RegisterInput::validate(&raw).expect_err("mismatch must fail");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].path, "confirmPassword");
    assert_eq!(errors[0].message, "Passwords don't match");
}

#[test]
fn weak_but_equal_passwords_fail_rules_without_the_mismatch_error() {
    let raw = json!({
        "email": "a@b.com",
        "password": "short",
        "confirmPassword": "short"
    });

    let errors = RegisterInput::validate(&raw).expect_err("weak password must fail");
    assert!(errors
        .iter()
        .any(|e| e.path == "password" && e.message == "Password must be at least 8 characters"));
    assert!(errors.iter().all(|e| e.message != "Passwords don't match"));
}

#[test]
fn refinement_still_runs_when_a_character_rule_fails() {
    // Both values are structurally strings, so the mismatch is reported even
    // though the password also fails its own rules.
    let raw = json!({
        "email": "a@b.com",
        "password": "short",
        "confirmPassword": "different"
    });

    let errors = RegisterInput::validate(&raw).expect_err("must fail");
    assert!(errors
        .iter()
        .any(|e| e.path == "confirmPassword" && e.message == "Passwords don't match"));
    // Field errors come first; the refinement error is appended last.
    assert_eq!(
        errors.last().map(|e| e.path.as_str()),
        Some("confirmPassword")
    );
}

#[test]
fn refinement_skipped_when_confirmation_is_not_a_string() {
    let raw = json!({
        "email": "a@b.com",
        "password": "Abcdefg1",
        "confirmPassword": 42
    });

    let errors = RegisterInput::validate(&raw).expect_err("must fail");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].path, "confirmPassword");
    assert_eq!(errors[0].message, "Expected string, received number");
}

#[test]
fn wrong_typed_optional_name_is_an_error_not_ignored() {
    let raw = json!({
        "email": "a@b.com",
        "password": "Abcdefg1",
        "confirmPassword": "Abcdefg1",
        "firstName": 123
    });

    let errors = RegisterInput::validate(&raw).expect_err("must fail");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].path, "firstName");
}

#[test]
fn registration_collects_independent_field_errors_in_one_pass() {
    let raw = json!({
        "email": "not-an-email",
        "password": "Abcdefg1",
        "confirmPassword": "Abcdefg1",
        "lastName": false
    });

    let errors = RegisterInput::validate(&raw).expect_err("must fail");
    let paths: Vec<&str> = errors.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(paths, vec!["email", "lastName"]);
    assert_eq!(errors[0].message, "Invalid email address");
}

#[test]
fn login_requires_a_password_value() {
    let raw = json!({ "email": "a@b.com", "password": "" });
    let errors = LoginInput::validate(&raw).expect_err("empty password");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].path, "password");
    assert_eq!(errors[0].message, "Password is required");

    let raw = json!({ "email": "a@b.com", "password": "hunter2" });
    assert!(LoginInput::validate(&raw).is_ok());
}

#[test]
fn login_reports_both_fields_in_one_pass() {
    let raw = json!({ "email": "nope", "password": "" });
    let errors = LoginInput::validate(&raw).expect_err("both invalid");
    let paths: Vec<&str> = errors.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(paths, vec!["email", "password"]);
}

#[test]
fn forgot_password_only_checks_the_email() {
    let raw = json!({ "email": "someone@casaport.example" });
    let input = ForgotPasswordInput::validate(&raw).expect("valid");
    assert_eq!(input.email, "someone@casaport.example");

    let raw = json!({});
    let errors = ForgotPasswordInput::validate(&raw).expect_err("missing email");
    assert_eq!(errors[0].message, "Required");
}

#[test]
fn reset_accepts_optional_token_and_email() {
    let raw = json!({
        "password": "Abcdefg1",
        "confirmPassword": "Abcdefg1"
    });
    let input = ResetPasswordInput::validate(&raw).expect("valid without token");
    assert_eq!(input.token, None);
    assert_eq!(input.email, None);

    let raw = json!({
        "token": "reset-3f2c",
        "email": "a@b.com",
        "password": "Abcdefg1",
        "confirmPassword": "Abcdefg1"
    });
    let input = ResetPasswordInput::validate(&raw).expect("valid with token");
    assert_eq!(input.token.as_deref(), Some("reset-3f2c"));
}

#[test]
fn reset_validates_email_when_present() {
    let raw = json!({
        "email": "broken",
        "password": "Abcdefg1",
        "confirmPassword": "Abcdefg1"
    });
    let errors = ResetPasswordInput::validate(&raw).expect_err("bad email");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].path, "email");
}

#[test]
fn validation_is_idempotent() {
    let raw = json!({
        "email": "nope",
        "password": "short",
        "confirmPassword": "different"
    });
    assert_eq!(
        RegisterInput::validate(&raw),
        RegisterInput::validate(&raw)
    );
}
