//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in the
//! infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::IdentityResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user; returns false when the email already exists
    /// (the insert is a no-op in that case)
    async fn create(&self, user: &User) -> IdentityResult<bool>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> IdentityResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &Email) -> IdentityResult<Option<User>>;

    /// Update user profile fields and role
    async fn update(&self, user: &User) -> IdentityResult<()>;

    /// Atomically add credits to a balance; returns the new balance
    async fn grant_credits(&self, user_id: &UserId, amount: i64) -> IdentityResult<i64>;

    /// List users, newest first, with total count
    async fn list(&self, offset: i64, limit: i64) -> IdentityResult<(Vec<User>, i64)>;
}
