use serde::{Deserialize, Serialize};

/// Marketplace role the signed-in user acts as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Farmer,
    Labour,
    Transporter,
}

impl UserRole {
    pub const fn label(self) -> &'static str {
        match self {
            UserRole::Farmer => "farmer",
            UserRole::Labour => "labour",
            UserRole::Transporter => "transporter",
        }
    }
}

/// The authenticated session. Identity issuance happens upstream; the core
/// only holds the resulting record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub name: String,
    pub phone: String,
    pub role: UserRole,
    pub token: String,
}

/// Partial update merged into the current session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub role: Option<UserRole>,
    pub token: Option<String>,
}

impl Session {
    pub fn apply(&mut self, patch: SessionPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(token) = patch.token {
            self.token = token;
        }
    }
}
