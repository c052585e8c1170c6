//! Update Contest Use Case

use std::sync::Arc;

use chrono::{DateTime, Utc};
use identity::{UserRepository, UserRole, authorize};

use crate::application::caller::resolve_caller;
use crate::domain::entity::Contest;
use crate::domain::repository::ContestRepository;
use crate::domain::value_object::{
    category::Category, contest_status::ContestStatus, draft::ContestDraft,
};
use crate::domain::value_object::contest_id::ContestId;
use crate::error::{ContestError, ContestResult};

/// Update contest input; absent fields keep their stored value
pub struct UpdateContestInput {
    pub caller_email: String,
    pub contest_id: ContestId,
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub instructions: Option<String>,
    pub image_url: Option<String>,
    pub prize_money: Option<i64>,
    pub entry_fee: Option<i64>,
    pub deadline: Option<DateTime<Utc>>,
    /// Moderation transition; admin only
    pub status: Option<String>,
}

/// Update contest use case
///
/// Creators edit their own contests; admins may edit any contest and
/// are the only role allowed to change the moderation status.
pub struct UpdateContestUseCase<C, U>
where
    C: ContestRepository,
    U: UserRepository,
{
    contests: Arc<C>,
    users: Arc<U>,
}

impl<C, U> UpdateContestUseCase<C, U>
where
    C: ContestRepository,
    U: UserRepository,
{
    pub fn new(contests: Arc<C>, users: Arc<U>) -> Self {
        Self { contests, users }
    }

    pub async fn execute(&self, input: UpdateContestInput) -> ContestResult<Contest> {
        let caller = resolve_caller(self.users.as_ref(), &input.caller_email).await?;
        authorize(caller.role, &[UserRole::Creator, UserRole::Admin])?;

        let mut contest = self
            .contests
            .find_by_id(&input.contest_id)
            .await?
            .ok_or(ContestError::ContestNotFound)?;

        if !caller.role.is_admin() && !contest.is_owned_by(&caller.user_id) {
            return Err(ContestError::AccessDenied);
        }

        let category = match input.category {
            Some(code) => Category::from_code(&code)
                .ok_or_else(|| ContestError::Validation(format!("Unknown category: {code}")))?,
            None => contest.category,
        };

        // Merge and re-validate; partial edits go through the same rules
        // as creation.
        let draft = ContestDraft::new(
            input.title.unwrap_or_else(|| contest.title.clone()),
            category,
            input
                .description
                .unwrap_or_else(|| contest.description.clone()),
            input
                .instructions
                .unwrap_or_else(|| contest.instructions.clone()),
            input
                .image_url
                .unwrap_or_else(|| contest.image_url.clone()),
            input
                .prize_money
                .unwrap_or_else(|| contest.prize_money.amount()),
            input.entry_fee.unwrap_or_else(|| contest.entry_fee.amount()),
            input.deadline.unwrap_or(contest.deadline),
        )?;
        contest.apply_draft(draft);

        if let Some(code) = input.status {
            if !caller.role.is_admin() {
                return Err(ContestError::AccessDenied);
            }
            let status = ContestStatus::from_code(&code)
                .ok_or_else(|| ContestError::Validation(format!("Unknown status: {code}")))?;
            contest.set_status(status);
        }

        self.contests.update(&contest).await?;

        tracing::info!(
            contest_id = %contest.contest_id,
            caller_id = %caller.user_id,
            "Contest updated"
        );

        Ok(contest)
    }
}
