//! Task Bounded Context
//!
//! Submission records: one entry per participant per contest.
//!
//! Clean Architecture structure:
//! - `domain/` - Task entity, repository trait
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL repository
//! - `presentation/` - HTTP handlers, DTOs, router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use domain::entity::Task;
pub use domain::repository::TaskRepository;
pub use error::{TaskError, TaskResult};
pub use infra::PgTaskRepository;
pub use presentation::router::task_router;
