pub mod config;
pub mod grant_credits;
pub mod issue_token;
pub mod list_users;
pub mod register_user;
pub mod update_user;

pub use grant_credits::{GrantCreditsInput, GrantCreditsUseCase};
pub use issue_token::IssueTokenUseCase;
pub use list_users::{ListUsersInput, ListUsersUseCase};
pub use register_user::{RegisterUserInput, RegisterUserUseCase};
pub use update_user::{UpdateUserInput, UpdateUserUseCase};
