//! Contest Entity

use chrono::{DateTime, Utc};
use identity::domain::value_object::user_id::UserId;

use crate::domain::value_object::{
    category::Category, contest_id::ContestId, contest_status::ContestStatus, draft::ContestDraft,
    money::Money,
};

/// Contest entity
///
/// Owned by its creator. The winner slot starts empty, can only be
/// filled after the deadline, and never changes once set.
#[derive(Debug, Clone)]
pub struct Contest {
    pub contest_id: ContestId,
    pub title: String,
    pub category: Category,
    pub description: String,
    /// What participants are asked to do
    pub instructions: String,
    /// Banner URL; storage is external, only the URL is kept
    pub image_url: String,
    pub prize_money: Money,
    pub entry_fee: Money,
    pub status: ContestStatus,
    pub creator_id: UserId,
    pub winner_id: Option<UserId>,
    pub deadline: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contest {
    /// Create a new pending contest from a validated draft
    pub fn from_draft(draft: ContestDraft, creator_id: UserId) -> Self {
        let now = Utc::now();
        Self {
            contest_id: ContestId::new(),
            title: draft.title,
            category: draft.category,
            description: draft.description,
            instructions: draft.instructions,
            image_url: draft.image_url,
            prize_money: draft.prize_money,
            entry_fee: draft.entry_fee,
            status: ContestStatus::default(),
            creator_id,
            winner_id: None,
            deadline: draft.deadline,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the submission window has closed
    pub fn is_closed(&self, now: DateTime<Utc>) -> bool {
        now >= self.deadline
    }

    /// Whether a winner has already been declared
    pub fn has_winner(&self) -> bool {
        self.winner_id.is_some()
    }

    /// Whether the given user owns this contest
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.creator_id == user_id
    }

    /// Replace the editable fields from a draft
    pub fn apply_draft(&mut self, draft: ContestDraft) {
        self.title = draft.title;
        self.category = draft.category;
        self.description = draft.description;
        self.instructions = draft.instructions;
        self.image_url = draft.image_url;
        self.prize_money = draft.prize_money;
        self.entry_fee = draft.entry_fee;
        self.deadline = draft.deadline;
        self.updated_at = Utc::now();
    }

    /// Moderation transition
    pub fn set_status(&mut self, status: ContestStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_draft(deadline: DateTime<Utc>) -> ContestDraft {
        ContestDraft::new(
            "Logo design".to_string(),
            Category::Business,
            "Design a fresh logo for our bakery, including color palette and typography."
                .to_string(),
            "Submit a link to your portfolio entry.".to_string(),
            String::new(),
            100,
            5,
            deadline,
        )
        .unwrap()
    }

    #[test]
    fn test_new_contest_is_pending_without_winner() {
        let contest = Contest::from_draft(sample_draft(Utc::now()), UserId::new());
        assert_eq!(contest.status, ContestStatus::Pending);
        assert!(!contest.has_winner());
    }

    #[test]
    fn test_is_closed_at_and_after_deadline() {
        let deadline = Utc::now();
        let contest = Contest::from_draft(sample_draft(deadline), UserId::new());
        assert!(contest.is_closed(deadline));
        assert!(contest.is_closed(deadline + Duration::seconds(1)));
        assert!(!contest.is_closed(deadline - Duration::seconds(1)));
    }

    #[test]
    fn test_ownership() {
        let creator = UserId::new();
        let contest = Contest::from_draft(sample_draft(Utc::now()), creator);
        assert!(contest.is_owned_by(&creator));
        assert!(!contest.is_owned_by(&UserId::new()));
    }
}
