//! Contest Bounded Context
//!
//! Contest records and the lifecycle service around them: paid creation,
//! participant registration, winner declaration, moderation, and the
//! public ranking surfaces.
//!
//! Clean Architecture structure:
//! - `domain/` - Contest entity, value objects, read models, repository trait
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL repository
//! - `presentation/` - HTTP handlers, DTOs, router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::ContestConfig;
pub use domain::entity::Contest;
pub use domain::repository::ContestRepository;
pub use error::{ContestError, ContestResult};
pub use infra::PgContestRepository;
pub use presentation::router::contest_router;
