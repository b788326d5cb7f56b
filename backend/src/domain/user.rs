//! User Entity
//!
//! Account record shown in the admin view. Authentication itself is the
//! hosted platform's job; this is only the manageable profile.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Role determines access to the admin view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    Member,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Member => "member",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "admin" => UserRole::Admin,
            _ => UserRole::Member,
        }
    }
}

/// An application user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: Option<i64>,
}

impl User {
    pub fn new(id: u32, name: String, email: String, role: UserRole) -> Self {
        Self {
            id,
            name,
            email,
            role,
            created_at: None,
        }
    }
}

impl Entity for User {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        assert_eq!(UserRole::Admin.as_str(), "admin");
        assert_eq!(UserRole::from_str("admin"), UserRole::Admin);
        assert_eq!(UserRole::from_str("anything"), UserRole::Member);
    }
}
