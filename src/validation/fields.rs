//! Shared field validators over raw JSON values.
//!
//! Every helper pushes its failures into the caller's error list and returns
//! `None` on failure, so schemas can check all fields before deciding the
//! overall outcome. No helper trims, coerces, or otherwise rewrites input.

use serde_json::Value;

use super::FieldError;

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A string field that must be present. Missing fields report "Required";
/// present non-strings report the received type.
pub(super) fn required_string<'v>(
    raw: &'v Value,
    path: &str,
    errors: &mut Vec<FieldError>,
) -> Option<&'v str> {
    match raw.get(path) {
        None => {
            errors.push(FieldError::new(path, "Required"));
            None
        }
        Some(Value::String(value)) => Some(value),
        Some(other) => {
            errors.push(FieldError::new(
                path,
                format!("Expected string, received {}", json_type_name(other)),
            ));
            None
        }
    }
}

/// A string field that may be absent entirely; a present value must still be
/// a string.
pub(super) fn optional_string(
    raw: &Value,
    path: &str,
    errors: &mut Vec<FieldError>,
) -> Option<Option<String>> {
    match raw.get(path) {
        None => Some(None),
        Some(Value::String(value)) => Some(Some(value.clone())),
        Some(other) => {
            errors.push(FieldError::new(
                path,
                format!("Expected string, received {}", json_type_name(other)),
            ));
            None
        }
    }
}

/// A string field with a schema-level default. The default is only used for
/// absent fields; a supplied value goes through the same type check.
pub(super) fn string_or_default(
    raw: &Value,
    path: &str,
    default: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match raw.get(path) {
        None => Some(default.to_string()),
        Some(Value::String(value)) => Some(value.clone()),
        Some(other) => {
            errors.push(FieldError::new(
                path,
                format!("Expected string, received {}", json_type_name(other)),
            ));
            None
        }
    }
}

pub(super) fn string_min(
    raw: &Value,
    path: &str,
    min: usize,
    message: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let value = required_string(raw, path, errors)?;
    if value.chars().count() < min {
        errors.push(FieldError::new(path, message));
        return None;
    }
    Some(value.to_string())
}

pub(super) fn non_empty_string(
    raw: &Value,
    path: &str,
    message: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    string_min(raw, path, 1, message, errors)
}

/// A numeric field. Strings, booleans, and null never coerce; non-finite
/// values are rejected rather than read as zero.
pub(super) fn required_number(
    raw: &Value,
    path: &str,
    errors: &mut Vec<FieldError>,
) -> Option<f64> {
    match raw.get(path) {
        None => {
            errors.push(FieldError::new(path, "Required"));
            None
        }
        Some(Value::Number(number)) => match number.as_f64() {
            Some(value) if value.is_finite() => Some(value),
            _ => {
                errors.push(FieldError::new(path, "Expected a finite number"));
                None
            }
        },
        Some(other) => {
            errors.push(FieldError::new(
                path,
                format!("Expected number, received {}", json_type_name(other)),
            ));
            None
        }
    }
}

pub(super) fn positive_number(
    raw: &Value,
    path: &str,
    message: &str,
    errors: &mut Vec<FieldError>,
) -> Option<f64> {
    let value = required_number(raw, path, errors)?;
    if value <= 0.0 {
        errors.push(FieldError::new(path, message));
        return None;
    }
    Some(value)
}

pub(super) fn non_negative_number(
    raw: &Value,
    path: &str,
    errors: &mut Vec<FieldError>,
) -> Option<f64> {
    let value = required_number(raw, path, errors)?;
    if value < 0.0 {
        errors.push(FieldError::new(
            path,
            "Number must be greater than or equal to 0",
        ));
        return None;
    }
    Some(value)
}

pub(super) fn non_negative_integer(
    raw: &Value,
    path: &str,
    errors: &mut Vec<FieldError>,
) -> Option<u32> {
    let value = required_number(raw, path, errors)?;
    if value.fract() != 0.0 {
        errors.push(FieldError::new(path, "Expected integer, received float"));
        return None;
    }
    if value < 0.0 {
        errors.push(FieldError::new(
            path,
            "Number must be greater than or equal to 0",
        ));
        return None;
    }
    if value > f64::from(u32::MAX) {
        errors.push(FieldError::new(
            path,
            format!("Number must be less than or equal to {}", u32::MAX),
        ));
        return None;
    }
    Some(value as u32)
}

/// Membership in a closed, case-sensitive variant set.
pub(super) fn closed_enum<T: Copy>(
    raw: &Value,
    path: &str,
    variants: &[(&str, T)],
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    let value = required_string(raw, path, errors)?;
    if let Some((_, parsed)) = variants.iter().find(|(name, _)| *name == value) {
        return Some(*parsed);
    }

    let expected = variants
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(" | ");
    errors.push(FieldError::new(
        path,
        format!("Invalid enum value. Expected {expected}, received '{value}'"),
    ));
    None
}

pub(super) fn required_email(
    raw: &Value,
    path: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let value = required_string(raw, path, errors)?;
    if !is_valid_email(value) {
        errors.push(FieldError::new(path, "Invalid email address"));
        return None;
    }
    Some(value.to_string())
}

pub(super) fn optional_email(
    raw: &Value,
    path: &str,
    errors: &mut Vec<FieldError>,
) -> Option<Option<String>> {
    match optional_string(raw, path, errors)? {
        None => Some(None),
        Some(value) => {
            if !is_valid_email(&value) {
                errors.push(FieldError::new(path, "Invalid email address"));
                return None;
            }
            Some(Some(value))
        }
    }
}

/// Full password complexity contract. Each failed rule is reported as its own
/// error so the user sees the complete list at once.
pub(super) fn password_rules(
    value: &str,
    path: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let mut ok = true;

    if value.chars().count() < 8 {
        errors.push(FieldError::new(
            path,
            "Password must be at least 8 characters",
        ));
        ok = false;
    }
    if !value.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push(FieldError::new(
            path,
            "Password must contain at least one uppercase letter",
        ));
        ok = false;
    }
    if !value.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push(FieldError::new(
            path,
            "Password must contain at least one lowercase letter",
        ));
        ok = false;
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        errors.push(FieldError::new(
            path,
            "Password must contain at least one number",
        ));
        ok = false;
    }

    ok.then(|| value.to_string())
}

fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = value.splitn(2, '@');
    let (local, domain) = match (parts.next(), parts.next()) {
        (Some(local), Some(domain)) => (local, domain),
        _ => return false,
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}
