use serde::Serialize;

use super::session::{Role, Session};

/// Raised when no session is present; callers redirect to sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no authenticated session")]
pub struct Unauthenticated;

/// Capabilities granted to the current session, recomputed on every read.
///
/// Purely a function of the session; nothing here is persisted or cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessDecision {
    pub can_post_listing: bool,
    pub can_message: bool,
    pub can_administer: bool,
    pub needs_verification_banner: bool,
}

/// Derive the capability set for a (possibly absent) session.
///
/// Only verified agents may post listings; messaging requires verification
/// regardless of role; administration is role-gated only.
pub fn evaluate(session: Option<&Session>) -> Result<AccessDecision, Unauthenticated> {
    let session = session.ok_or(Unauthenticated)?;
    let user = &session.user;

    let decision = AccessDecision {
        can_post_listing: user.role == Role::Agent && user.is_verified,
        can_message: user.is_verified,
        can_administer: user.role == Role::Admin,
        needs_verification_banner: !user.is_verified,
    };

    tracing::debug!(
        role = user.role.label(),
        verified = user.is_verified,
        "evaluated access decision"
    );

    Ok(decision)
}

/// Banner copy for unverified sessions.
///
/// Agents get an extra sentence about the listing gate. This is presentation
/// only and never changes the booleans in [`AccessDecision`].
pub fn verification_notice(session: &Session) -> Option<String> {
    if session.user.is_verified {
        return None;
    }

    let mut notice =
        String::from("You need to verify your identity before you can access all features.");
    if session.user.role == Role::Agent {
        notice.push_str(" Agents must be verified to post listings.");
    }

    Some(notice)
}
