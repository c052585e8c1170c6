//! Create Contest Use Case

use std::sync::Arc;

use chrono::{DateTime, Utc};
use identity::{UserRepository, UserRole, authorize};

use crate::application::caller::resolve_caller;
use crate::application::config::ContestConfig;
use crate::domain::entity::Contest;
use crate::domain::repository::ContestRepository;
use crate::domain::value_object::{category::Category, draft::ContestDraft};
use crate::error::{ContestError, ContestResult};

/// Create contest input
pub struct CreateContestInput {
    pub caller_email: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub instructions: String,
    pub image_url: String,
    pub prize_money: i64,
    pub entry_fee: i64,
    pub deadline: DateTime<Utc>,
}

/// Create contest use case
///
/// Publishing costs a fixed number of credits. The debit and the insert
/// are one repository operation, so a failed debit never leaves a
/// contest behind and a failed insert never leaves credits missing.
/// The call is not retry-safe: retrying a timed-out request may create
/// a second contest and a second debit.
pub struct CreateContestUseCase<C, U>
where
    C: ContestRepository,
    U: UserRepository,
{
    contests: Arc<C>,
    users: Arc<U>,
    config: Arc<ContestConfig>,
}

impl<C, U> CreateContestUseCase<C, U>
where
    C: ContestRepository,
    U: UserRepository,
{
    pub fn new(contests: Arc<C>, users: Arc<U>, config: Arc<ContestConfig>) -> Self {
        Self {
            contests,
            users,
            config,
        }
    }

    pub async fn execute(&self, input: CreateContestInput) -> ContestResult<Contest> {
        let caller = resolve_caller(self.users.as_ref(), &input.caller_email).await?;
        authorize(caller.role, &[UserRole::Creator])?;

        let category = Category::from_code(&input.category)
            .ok_or_else(|| ContestError::Validation(format!("Unknown category: {}", input.category)))?;

        let draft = ContestDraft::new(
            input.title,
            category,
            input.description,
            input.instructions,
            input.image_url,
            input.prize_money,
            input.entry_fee,
            input.deadline,
        )?;

        let contest = Contest::from_draft(draft, caller.user_id);
        self.contests
            .create(&contest, self.config.creation_cost)
            .await?;

        tracing::info!(
            contest_id = %contest.contest_id,
            creator_id = %caller.user_id,
            cost = self.config.creation_cost,
            "Contest created"
        );

        Ok(contest)
    }
}
