//! Identity Bounded Context
//!
//! Holds user records (role, credits, profile) and the access policy
//! consulted before every mutating operation on the platform.
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, value objects, access policy, repository trait
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL repository
//! - `presentation/` - HTTP handlers, token middleware

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::IdentityConfig;
pub use domain::entity::user::User;
pub use domain::policy::{AccessDenied, authorize};
pub use domain::repository::UserRepository;
pub use domain::value_object::user_role::UserRole;
pub use error::{IdentityError, IdentityResult};
pub use infra::postgres::PgIdentityRepository;
pub use presentation::middleware::{Caller, resolve_caller};
pub use presentation::router::{auth_router, user_router};
