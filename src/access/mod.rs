//! Session-derived access decisions for the dashboard and feature gates.
//!
//! The role/verification rules were previously re-derived inline wherever the
//! UI branched on them; this module centralizes them as a single pure policy
//! function so callers branch on named booleans instead.

mod policy;
mod session;

pub use policy::{evaluate, verification_notice, AccessDecision, Unauthenticated};
pub use session::{Role, Session, UserIdentity};
