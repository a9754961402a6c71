use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity - an account that can author posts.
///
/// Email and username are each globally unique. `password_hash` never leaves
/// the server; outbound representations use an explicit field allow-list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub date_joined: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
    pub is_admin: bool,
    pub is_staff: bool,
    pub is_active: bool,
    pub is_superuser: bool,
}

/// Writable fields of a user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub is_staff: bool,
    pub is_active: bool,
    pub is_superuser: bool,
}

impl NewUser {
    /// A regular, active account with no privileges.
    pub fn new(email: String, username: String, password_hash: String) -> Self {
        Self {
            email,
            username,
            password_hash,
            is_admin: false,
            is_staff: false,
            is_active: true,
            is_superuser: false,
        }
    }
}

impl User {
    /// Permission checks pass for admins only, regardless of the permission.
    pub fn has_perm(&self, _perm: &str) -> bool {
        self.is_admin
    }

    pub fn has_module_perms(&self, _app_label: &str) -> bool {
        true
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.username, self.email)
    }
}
