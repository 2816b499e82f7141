use serde::{Deserialize, Serialize};

/// Account roles recognized by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    Agent,
    Admin,
}

impl Role {
    pub const fn label(self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Agent => "AGENT",
            Role::Admin => "ADMIN",
        }
    }
}

/// Identity attributes resolved for an authenticated request.
///
/// Role and verification are independent axes; every combination is a valid
/// session state and must produce a decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    pub role: Role,
    pub is_verified: bool,
}

impl UserIdentity {
    /// Display name for dashboard headers, falling back to the email address.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }

    /// Short badge text for the navigation bar.
    pub const fn verification_badge(&self) -> &'static str {
        if self.is_verified {
            "\u{2713} Verified"
        } else {
            "\u{26a0} Verification Required"
        }
    }
}

/// The authenticated-identity record produced by the external session layer.
///
/// Consumed read-only; verification transitions are owned by the identity
/// workflow and only observed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: UserIdentity,
}
