//! Core contracts for the Casaport listing platform.
//!
//! Two concerns live here: deriving what an authenticated session may see and
//! do (`access`), and validating raw form input into well-typed records
//! (`validation`). Both are pure, synchronous functions over their inputs; the
//! surrounding web tier owns session retrieval, rendering, and persistence.

pub mod access;
pub mod config;
pub mod telemetry;
pub mod validation;

pub use access::{evaluate, AccessDecision, Role, Session, Unauthenticated, UserIdentity};
pub use validation::FieldError;
