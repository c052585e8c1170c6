//! User Entity

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    credits::Credits, email::Email, user_id::UserId, user_role::UserRole,
};

/// User entity
///
/// A platform account. The credit balance gates contest creation;
/// the role gates every mutating operation.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    /// Display name
    pub user_name: String,
    /// Unique, stored lowercase
    pub email: Email,
    /// Avatar URL; storage is external, only the URL is kept
    pub image_url: String,
    /// Role (user, creator, admin); defaults to user
    pub role: UserRole,
    /// Credit balance, never negative
    pub credits: Credits,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with the default role and zero credits
    pub fn new(user_name: impl Into<String>, email: Email, image_url: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            user_id: UserId::new(),
            user_name: user_name.into(),
            email,
            image_url: image_url.into(),
            role: UserRole::default(),
            credits: Credits::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a profile update
    pub fn update_profile(&mut self, user_name: Option<String>, image_url: Option<String>) {
        if let Some(name) = user_name {
            self.user_name = name;
        }
        if let Some(url) = image_url {
            self.image_url = url;
        }
        self.updated_at = Utc::now();
    }

    /// Change the role (admin moderation path)
    pub fn change_role(&mut self, role: UserRole) {
        self.role = role;
        self.updated_at = Utc::now();
    }
}
