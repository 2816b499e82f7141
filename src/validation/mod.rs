//! Declarative validation contracts for form submissions.
//!
//! Each schema is an associated `validate` function on its output record,
//! taking raw JSON and returning either the typed record or every field error
//! found in one pass. Per-field checks run for all fields before any
//! cross-field refinement, so a single submission surfaces all of its
//! problems at once rather than failing on the first.

mod fields;

pub mod account;
pub mod listing;

use serde::{Deserialize, Serialize};

pub use account::{ForgotPasswordInput, LoginInput, RegisterInput, ResetPasswordInput};
pub use listing::{ListingDraft, PropertyType, TransactionType};

/// A single validation failure, addressed to the raw JSON field it concerns.
///
/// Refinement failures (password mismatch) are attached to the field the user
/// should correct, not to the rule's other operand.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("{path}: {message}")]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

impl FieldError {
    pub(crate) fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}
