use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use strum_macros::EnumIter;
use uuid::Uuid;

/// Global role assignments for a user account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Operator,
    Manager,
    Admin,
    Auditor,
}

impl UserRole {
    /// Return the canonical string representation expected by persistence layers.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Operator => "operator",
            Self::Manager => "manager",
            Self::Admin => "admin",
            Self::Auditor => "auditor",
        }
    }

    /// Human-readable label used by the role selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Operator => "Operator",
            Self::Manager => "Manager",
            Self::Admin => "Admin",
            Self::Auditor => "Auditor",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "operator" => Ok(Self::Operator),
            "manager" => Ok(Self::Manager),
            "admin" => Ok(Self::Admin),
            "auditor" => Ok(Self::Auditor),
            _ => Err("unknown user role"),
        }
    }
}

/// A user account as projected by `GET /api/config/users`.
///
/// Credential material never leaves the backend; this projection carries no
/// password fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: Uuid,

    /// The user's username.
    pub username: String,

    /// The user's global role.
    pub role: UserRole,

    /// Whether the account may sign in.
    pub active: bool,
}

/// A partial update to a single user's configuration.
///
/// Only the staged fields are serialized, so a batch body is exactly
/// `[{"id": ..., "role"?: ..., "active"?: ...}, ...]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigUserUpdate {
    /// The user being updated.
    pub id: Uuid,

    /// New role, if staged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,

    /// New active flag, if staged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl ConfigUserUpdate {
    /// An update with nothing staged yet.
    #[must_use]
    pub fn empty(id: Uuid) -> Self {
        Self {
            id,
            role: None,
            active: None,
        }
    }

    /// Merge another partial update for the same user into this one.
    ///
    /// Staged fields in `other` overwrite the corresponding fields here;
    /// fields `other` leaves unstaged are preserved.
    pub fn merge(&mut self, other: &Self) {
        if let Some(role) = other.role {
            self.role = Some(role);
        }
        if let Some(active) = other.active {
            self.active = Some(active);
        }
    }
}

/// Response of `GET /api/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MeResponse {
    /// The authenticated user.
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_role_roundtrip() {
        for (text, role) in [
            ("operator", UserRole::Operator),
            ("manager", UserRole::Manager),
            ("admin", UserRole::Admin),
            ("auditor", UserRole::Auditor),
        ] {
            assert_eq!(role.as_str(), text);
            assert_eq!(role.to_string(), text);
            assert_eq!(UserRole::from_str(text).unwrap(), role);
        }
    }

    #[test]
    fn user_role_invalid() {
        assert!(UserRole::from_str("guest").is_err());
        assert!(UserRole::from_str("Admin").is_err());
    }

    #[test]
    fn user_deserializes_backend_projection() {
        let json = r#"{
            "id": "f47ac10b-58cc-4372-a567-0e02b2c3d479",
            "username": "thandi",
            "role": "auditor",
            "active": true
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.username, "thandi");
        assert_eq!(user.role, UserRole::Auditor);
        assert!(user.active);
    }

    #[test]
    fn update_serializes_only_staged_fields() {
        let id = Uuid::parse_str("f47ac10b-58cc-4372-a567-0e02b2c3d479").unwrap();

        let role_only = ConfigUserUpdate {
            id,
            role: Some(UserRole::Manager),
            active: None,
        };
        let json = serde_json::to_string(&role_only).unwrap();
        assert!(json.contains("\"role\":\"manager\""));
        assert!(!json.contains("active"));

        let active_only = ConfigUserUpdate {
            id,
            role: None,
            active: Some(false),
        };
        let json = serde_json::to_string(&active_only).unwrap();
        assert!(json.contains("\"active\":false"));
        assert!(!json.contains("role"));
    }

    #[test]
    fn update_merge_is_field_wise() {
        let id = Uuid::new_v4();
        let mut edit = ConfigUserUpdate {
            id,
            role: Some(UserRole::Operator),
            active: None,
        };

        edit.merge(&ConfigUserUpdate {
            id,
            role: None,
            active: Some(true),
        });
        assert_eq!(edit.role, Some(UserRole::Operator));
        assert_eq!(edit.active, Some(true));

        edit.merge(&ConfigUserUpdate {
            id,
            role: Some(UserRole::Auditor),
            active: None,
        });
        assert_eq!(edit.role, Some(UserRole::Auditor));
        assert_eq!(edit.active, Some(true));
    }

    #[test]
    fn update_roundtrip() {
        let update = ConfigUserUpdate {
            id: Uuid::new_v4(),
            role: Some(UserRole::Admin),
            active: Some(true),
        };
        let json = serde_json::to_string(&update).unwrap();
        let back: ConfigUserUpdate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, update);
    }
}
