//! Use-case tests against in-memory repositories
//!
//! The fakes reproduce the store's concurrency-sensitive semantics
//! (conditional debit, unique roster insert, fill-once winner slot) so
//! the lifecycle rules can be exercised without a database.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use identity::domain::value_object::{credits::Credits, email::Email, user_id::UserId};
use identity::{User, UserRepository, UserRole};

use crate::application::{
    AdminListContestsInput, AdminListContestsUseCase, BestCreatorsUseCase, BrowseContestsUseCase,
    ContestConfig, CreateContestInput, CreateContestUseCase, CreatorContestDetailInput,
    CreatorContestDetailUseCase, DeclareWinnerInput, DeclareWinnerUseCase, DeleteContestInput,
    DeleteContestUseCase, LeaderboardUseCase, ListCreatorContestsInput,
    ListCreatorContestsUseCase, PopularContestsUseCase, RegisterParticipantInput,
    RegisterParticipantUseCase, RegisteredContestsUseCase, UpdateContestInput,
    UpdateContestUseCase, UserStatsUseCase, WinningContestsUseCase,
};
use crate::domain::entity::Contest;
use crate::domain::read_model::{
    AdminContestRow, ContestDetail, ContestSummary, CreatorRanking, LeaderboardEntry,
    ParticipantSubmission, ParticipationRow, PublicProfile, WinnerSummary,
};
use crate::domain::repository::ContestRepository;
use crate::domain::value_object::contest_id::ContestId;
use crate::error::{ContestError, ContestResult};

#[derive(Default)]
struct StoreState {
    users: Vec<User>,
    contests: Vec<Contest>,
    rosters: HashMap<ContestId, Vec<(UserId, DateTime<Utc>)>>,
}

/// Shared in-memory store acting as both repositories
#[derive(Default)]
struct InMemoryStore {
    state: Mutex<StoreState>,
}

impl InMemoryStore {
    fn add_user(&self, user: User) {
        self.state.lock().unwrap().users.push(user);
    }

    fn credits_of(&self, user_id: &UserId) -> i64 {
        let state = self.state.lock().unwrap();
        state
            .users
            .iter()
            .find(|u| &u.user_id == user_id)
            .map(|u| u.credits.amount())
            .unwrap()
    }

    fn contest_count(&self) -> usize {
        self.state.lock().unwrap().contests.len()
    }
}

fn profile(user: &User) -> PublicProfile {
    PublicProfile {
        user_id: user.user_id,
        user_name: user.user_name.clone(),
        email: user.email.as_str().to_string(),
        image_url: user.image_url.clone(),
    }
}

fn roster_len(state: &StoreState, contest_id: &ContestId) -> i64 {
    state.rosters.get(contest_id).map_or(0, |r| r.len() as i64)
}

impl UserRepository for InMemoryStore {
    async fn create(&self, user: &User) -> identity::IdentityResult<bool> {
        let mut state = self.state.lock().unwrap();
        if state.users.iter().any(|u| u.email == user.email) {
            return Ok(false);
        }
        state.users.push(user.clone());
        Ok(true)
    }

    async fn find_by_id(&self, user_id: &UserId) -> identity::IdentityResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|u| &u.user_id == user_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> identity::IdentityResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|u| &u.email == email).cloned())
    }

    async fn update(&self, user: &User) -> identity::IdentityResult<()> {
        let mut state = self.state.lock().unwrap();
        if let Some(stored) = state.users.iter_mut().find(|u| u.user_id == user.user_id) {
            *stored = user.clone();
        }
        Ok(())
    }

    async fn grant_credits(&self, user_id: &UserId, amount: i64) -> identity::IdentityResult<i64> {
        let mut state = self.state.lock().unwrap();
        let user = state
            .users
            .iter_mut()
            .find(|u| &u.user_id == user_id)
            .ok_or(identity::IdentityError::UserNotFound)?;
        user.credits = Credits::from_db(user.credits.amount() + amount);
        Ok(user.credits.amount())
    }

    async fn list(&self, offset: i64, limit: i64) -> identity::IdentityResult<(Vec<User>, i64)> {
        let state = self.state.lock().unwrap();
        let total = state.users.len() as i64;
        let users = state
            .users
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect();
        Ok((users, total))
    }
}

impl ContestRepository for InMemoryStore {
    async fn create(&self, contest: &Contest, creation_cost: i64) -> ContestResult<()> {
        let mut state = self.state.lock().unwrap();
        let creator = state
            .users
            .iter_mut()
            .find(|u| u.user_id == contest.creator_id)
            .ok_or(ContestError::UserNotFound)?;
        if !creator.credits.can_afford(creation_cost) {
            return Err(ContestError::InsufficientCredits);
        }
        creator.credits = Credits::from_db(creator.credits.amount() - creation_cost);
        state.contests.push(contest.clone());
        Ok(())
    }

    async fn find_by_id(&self, contest_id: &ContestId) -> ContestResult<Option<Contest>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .contests
            .iter()
            .find(|c| &c.contest_id == contest_id)
            .cloned())
    }

    async fn update(&self, contest: &Contest) -> ContestResult<()> {
        let mut state = self.state.lock().unwrap();
        if let Some(stored) = state
            .contests
            .iter_mut()
            .find(|c| c.contest_id == contest.contest_id)
        {
            let winner = stored.winner_id;
            *stored = contest.clone();
            stored.winner_id = winner;
        }
        Ok(())
    }

    async fn delete(&self, contest_id: &ContestId) -> ContestResult<()> {
        let mut state = self.state.lock().unwrap();
        state.contests.retain(|c| &c.contest_id != contest_id);
        state.rosters.remove(contest_id);
        Ok(())
    }

    async fn add_participant(
        &self,
        contest_id: &ContestId,
        user_id: &UserId,
    ) -> ContestResult<bool> {
        let mut state = self.state.lock().unwrap();
        let roster = state.rosters.entry(*contest_id).or_default();
        if roster.iter().any(|(id, _)| id == user_id) {
            return Ok(false);
        }
        roster.push((*user_id, Utc::now()));
        Ok(true)
    }

    async fn is_participant(
        &self,
        contest_id: &ContestId,
        user_id: &UserId,
    ) -> ContestResult<bool> {
        let state = self.state.lock().unwrap();
        Ok(state
            .rosters
            .get(contest_id)
            .is_some_and(|r| r.iter().any(|(id, _)| id == user_id)))
    }

    async fn set_winner_if_unset(
        &self,
        contest_id: &ContestId,
        winner_id: &UserId,
    ) -> ContestResult<bool> {
        let mut state = self.state.lock().unwrap();
        let contest = state
            .contests
            .iter_mut()
            .find(|c| &c.contest_id == contest_id)
            .ok_or(ContestError::ContestNotFound)?;
        if contest.winner_id.is_some() {
            return Ok(false);
        }
        contest.winner_id = Some(*winner_id);
        Ok(true)
    }

    async fn list_by_creator(
        &self,
        creator_id: &UserId,
        offset: i64,
        limit: i64,
    ) -> ContestResult<(Vec<ContestSummary>, i64)> {
        let state = self.state.lock().unwrap();
        let matching: Vec<_> = state
            .contests
            .iter()
            .filter(|c| &c.creator_id == creator_id)
            .collect();
        let total = matching.len() as i64;
        let contests = matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(|c| ContestSummary {
                contest: c.clone(),
                participant_count: roster_len(&state, &c.contest_id),
            })
            .collect();
        Ok((contests, total))
    }

    async fn list_all(
        &self,
        offset: i64,
        limit: i64,
    ) -> ContestResult<(Vec<AdminContestRow>, i64)> {
        let state = self.state.lock().unwrap();
        let total = state.contests.len() as i64;
        let contests = state
            .contests
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(|c| {
                let creator = state
                    .users
                    .iter()
                    .find(|u| u.user_id == c.creator_id)
                    .unwrap();
                AdminContestRow {
                    contest: c.clone(),
                    creator: profile(creator),
                }
            })
            .collect();
        Ok((contests, total))
    }

    async fn browse_accepted(&self, search: Option<&str>) -> ContestResult<Vec<ContestSummary>> {
        let state = self.state.lock().unwrap();
        let mut summaries: Vec<_> = state
            .contests
            .iter()
            .filter(|c| c.status.is_accepted())
            .filter(|c| search.is_none_or(|s| c.category.code().eq_ignore_ascii_case(s)))
            .map(|c| ContestSummary {
                contest: c.clone(),
                participant_count: roster_len(&state, &c.contest_id),
            })
            .collect();
        summaries.sort_by(|a, b| b.participant_count.cmp(&a.participant_count));
        Ok(summaries)
    }

    async fn detail(&self, contest_id: &ContestId) -> ContestResult<Option<ContestDetail>> {
        let state = self.state.lock().unwrap();
        let Some(contest) = state.contests.iter().find(|c| &c.contest_id == contest_id) else {
            return Ok(None);
        };
        let creator = state
            .users
            .iter()
            .find(|u| u.user_id == contest.creator_id)
            .unwrap();
        let winner = contest
            .winner_id
            .and_then(|id| state.users.iter().find(|u| u.user_id == id))
            .map(profile);
        Ok(Some(ContestDetail {
            contest: contest.clone(),
            creator: profile(creator),
            winner,
            participant_count: roster_len(&state, contest_id),
        }))
    }

    async fn participant_grid(
        &self,
        contest_id: &ContestId,
    ) -> ContestResult<Vec<ParticipantSubmission>> {
        let state = self.state.lock().unwrap();
        let Some(roster) = state.rosters.get(contest_id) else {
            return Ok(Vec::new());
        };
        Ok(roster
            .iter()
            .map(|(user_id, registered_at)| {
                let user = state.users.iter().find(|u| &u.user_id == user_id).unwrap();
                ParticipantSubmission {
                    participant: profile(user),
                    registered_at: *registered_at,
                    submission: None,
                }
            })
            .collect())
    }

    async fn registered_for(&self, user_id: &UserId) -> ContestResult<Vec<ContestSummary>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .contests
            .iter()
            .filter(|c| c.status.is_accepted())
            .filter(|c| {
                state
                    .rosters
                    .get(&c.contest_id)
                    .is_some_and(|r| r.iter().any(|(id, _)| id == user_id))
            })
            .map(|c| ContestSummary {
                contest: c.clone(),
                participant_count: roster_len(&state, &c.contest_id),
            })
            .collect())
    }

    async fn won_by(&self, user_id: &UserId) -> ContestResult<Vec<ContestSummary>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .contests
            .iter()
            .filter(|c| c.status.is_accepted() && c.winner_id.as_ref() == Some(user_id))
            .map(|c| ContestSummary {
                contest: c.clone(),
                participant_count: roster_len(&state, &c.contest_id),
            })
            .collect())
    }

    async fn participations(&self, user_id: &UserId) -> ContestResult<Vec<ParticipationRow>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .contests
            .iter()
            .filter(|c| c.status.is_accepted())
            .filter(|c| {
                state
                    .rosters
                    .get(&c.contest_id)
                    .is_some_and(|r| r.iter().any(|(id, _)| id == user_id))
            })
            .map(|c| ParticipationRow {
                entry_fee: c.entry_fee.amount(),
                prize_money: c.prize_money.amount(),
                won: c.winner_id.as_ref() == Some(user_id),
            })
            .collect())
    }

    async fn popular(&self, limit: i64) -> ContestResult<Vec<ContestSummary>> {
        let mut summaries = self.browse_accepted(None).await?;
        summaries.truncate(limit as usize);
        Ok(summaries)
    }

    async fn best_creators(&self, limit: i64) -> ContestResult<Vec<CreatorRanking>> {
        let state = self.state.lock().unwrap();
        let mut totals: HashMap<UserId, (i64, i64, Contest)> = HashMap::new();
        for contest in state.contests.iter().filter(|c| c.status.is_accepted()) {
            let entry = totals
                .entry(contest.creator_id)
                .or_insert_with(|| (0, 0, contest.clone()));
            entry.0 += contest.prize_money.amount();
            entry.1 += 1;
            if contest.created_at < entry.2.created_at {
                entry.2 = contest.clone();
            }
        }
        let mut rankings: Vec<_> = totals
            .into_iter()
            .map(|(creator_id, (total_prize_money, contest_count, first_contest))| {
                let user = state
                    .users
                    .iter()
                    .find(|u| u.user_id == creator_id)
                    .unwrap();
                CreatorRanking {
                    creator: profile(user),
                    total_prize_money,
                    contest_count,
                    first_contest,
                }
            })
            .collect();
        rankings.sort_by(|a, b| b.total_prize_money.cmp(&a.total_prize_money));
        rankings.truncate(limit as usize);
        Ok(rankings)
    }

    async fn leaderboard(&self, limit: i64) -> ContestResult<Vec<LeaderboardEntry>> {
        let state = self.state.lock().unwrap();
        let mut totals: HashMap<UserId, (i64, i64)> = HashMap::new();
        for contest in state.contests.iter().filter(|c| c.status.is_accepted()) {
            let Some(winner_id) = contest.winner_id else {
                continue;
            };
            let entry = totals.entry(winner_id).or_default();
            entry.0 += contest.prize_money.amount();
            entry.1 += 1;
        }
        let mut entries: Vec<_> = totals
            .into_iter()
            .map(|(winner_id, (total_prize_money, wins))| {
                let user = state.users.iter().find(|u| u.user_id == winner_id).unwrap();
                LeaderboardEntry {
                    winner: profile(user),
                    total_prize_money,
                    wins,
                }
            })
            .collect();
        entries.sort_by(|a, b| b.total_prize_money.cmp(&a.total_prize_money));
        entries.truncate(limit as usize);
        Ok(entries)
    }

    async fn winners(&self) -> ContestResult<Vec<WinnerSummary>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .contests
            .iter()
            .filter(|c| c.status.is_accepted())
            .filter_map(|c| {
                let winner_id = c.winner_id?;
                let user = state.users.iter().find(|u| u.user_id == winner_id)?;
                Some(WinnerSummary {
                    contest_id: c.contest_id,
                    title: c.title.clone(),
                    image_url: c.image_url.clone(),
                    prize_money: c.prize_money.amount(),
                    participant_count: roster_len(&state, &c.contest_id),
                    winner: profile(user),
                })
            })
            .collect())
    }
}

fn user_with(name: &str, email: &str, role: UserRole, credits: i64) -> User {
    let mut user = User::new(name, Email::new(email).unwrap(), String::new());
    user.role = role;
    user.credits = Credits::from_db(credits);
    user
}

fn store() -> Arc<InMemoryStore> {
    Arc::new(InMemoryStore::default())
}

fn config() -> Arc<ContestConfig> {
    Arc::new(ContestConfig::default())
}

const DESCRIPTION: &str =
    "Design a fresh logo for our bakery, including color palette and typography.";
const INSTRUCTIONS: &str = "Submit a link to your portfolio entry.";

fn create_input(caller_email: &str, deadline: DateTime<Utc>) -> CreateContestInput {
    CreateContestInput {
        caller_email: caller_email.to_string(),
        title: "Logo design".to_string(),
        category: "business".to_string(),
        description: DESCRIPTION.to_string(),
        instructions: INSTRUCTIONS.to_string(),
        image_url: String::new(),
        prize_money: 100,
        entry_fee: 5,
        deadline,
    }
}

async fn seed_contest(
    store: &Arc<InMemoryStore>,
    creator_email: &str,
    deadline: DateTime<Utc>,
) -> Contest {
    CreateContestUseCase::new(Arc::clone(store), Arc::clone(store), config())
        .execute(create_input(creator_email, deadline))
        .await
        .unwrap()
}

fn accept(store: &Arc<InMemoryStore>, contest_id: &ContestId) {
    let mut state = store.state.lock().unwrap();
    let contest = state
        .contests
        .iter_mut()
        .find(|c| &c.contest_id == contest_id)
        .unwrap();
    contest.set_status(crate::domain::value_object::contest_status::ContestStatus::Accepted);
}

#[tokio::test]
async fn create_contest_debits_creation_cost() {
    let store = store();
    let creator = user_with("Ada", "ada@example.com", UserRole::Creator, 80);
    let creator_id = creator.user_id;
    store.add_user(creator);

    let contest = seed_contest(&store, "ada@example.com", Utc::now()).await;

    assert_eq!(store.credits_of(&creator_id), 30);
    assert_eq!(contest.creator_id, creator_id);
    assert!(!contest.has_winner());
}

#[tokio::test]
async fn create_contest_rejects_insufficient_credits() {
    let store = store();
    store.add_user(user_with("Ada", "ada@example.com", UserRole::Creator, 49));

    let result = CreateContestUseCase::new(Arc::clone(&store), Arc::clone(&store), config())
        .execute(create_input("ada@example.com", Utc::now()))
        .await;

    assert!(matches!(result, Err(ContestError::InsufficientCredits)));
    // Nothing persisted and nothing debited.
    assert_eq!(store.contest_count(), 0);
    let state = store.state.lock().unwrap();
    assert_eq!(state.users[0].credits.amount(), 49);
}

#[tokio::test]
async fn create_contest_requires_creator_role() {
    let store = store();
    store.add_user(user_with("Bob", "bob@example.com", UserRole::User, 500));

    let result = CreateContestUseCase::new(Arc::clone(&store), Arc::clone(&store), config())
        .execute(create_input("bob@example.com", Utc::now()))
        .await;

    assert!(matches!(result, Err(ContestError::AccessDenied)));
}

#[tokio::test]
async fn create_contest_validates_draft_fields() {
    let store = store();
    store.add_user(user_with("Ada", "ada@example.com", UserRole::Creator, 500));
    let use_case = CreateContestUseCase::new(Arc::clone(&store), Arc::clone(&store), config());

    let mut short_description = create_input("ada@example.com", Utc::now());
    short_description.description = "Too short".to_string();
    assert!(matches!(
        use_case.execute(short_description).await,
        Err(ContestError::Validation(_))
    ));

    let mut bad_category = create_input("ada@example.com", Utc::now());
    bad_category.category = "cooking".to_string();
    assert!(matches!(
        use_case.execute(bad_category).await,
        Err(ContestError::Validation(_))
    ));

    let mut zero_fee = create_input("ada@example.com", Utc::now());
    zero_fee.entry_fee = 0;
    assert!(matches!(
        use_case.execute(zero_fee).await,
        Err(ContestError::Validation(_))
    ));
}

#[tokio::test]
async fn register_participant_is_unique_per_contest() {
    let store = store();
    store.add_user(user_with("Ada", "ada@example.com", UserRole::Creator, 100));
    store.add_user(user_with("Bob", "bob@example.com", UserRole::User, 0));
    let contest = seed_contest(&store, "ada@example.com", Utc::now() + Duration::days(7)).await;

    let use_case = RegisterParticipantUseCase::new(Arc::clone(&store), Arc::clone(&store));
    let input = || RegisterParticipantInput {
        caller_email: "bob@example.com".to_string(),
        contest_id: contest.contest_id,
    };

    assert!(use_case.execute(input()).await.is_ok());
    assert!(matches!(
        use_case.execute(input()).await,
        Err(ContestError::AlreadyRegistered)
    ));
}

#[tokio::test]
async fn register_participant_roster_keeps_registration_order() {
    let store = store();
    store.add_user(user_with("Ada", "ada@example.com", UserRole::Creator, 100));
    let bob = user_with("Bob", "bob@example.com", UserRole::User, 0);
    let cara = user_with("Cara", "cara@example.com", UserRole::User, 0);
    let (bob_id, cara_id) = (bob.user_id, cara.user_id);
    store.add_user(bob);
    store.add_user(cara);
    let contest = seed_contest(&store, "ada@example.com", Utc::now() + Duration::days(7)).await;

    let use_case = RegisterParticipantUseCase::new(Arc::clone(&store), Arc::clone(&store));
    for email in ["bob@example.com", "cara@example.com"] {
        use_case
            .execute(RegisterParticipantInput {
                caller_email: email.to_string(),
                contest_id: contest.contest_id,
            })
            .await
            .unwrap();
    }

    let grid = store.participant_grid(&contest.contest_id).await.unwrap();
    assert_eq!(grid.len(), 2);
    assert_eq!(grid[0].participant.user_id, bob_id);
    assert_eq!(grid[1].participant.user_id, cara_id);
}

#[tokio::test]
async fn register_participant_requires_existing_contest() {
    let store = store();
    store.add_user(user_with("Bob", "bob@example.com", UserRole::User, 0));

    let result = RegisterParticipantUseCase::new(Arc::clone(&store), Arc::clone(&store))
        .execute(RegisterParticipantInput {
            caller_email: "bob@example.com".to_string(),
            contest_id: ContestId::new(),
        })
        .await;

    assert!(matches!(result, Err(ContestError::ContestNotFound)));
}

async fn winner_fixture(deadline: DateTime<Utc>) -> (Arc<InMemoryStore>, Contest, UserId) {
    let store = store();
    store.add_user(user_with("Ada", "ada@example.com", UserRole::Creator, 100));
    let participant = user_with("Bob", "bob@example.com", UserRole::User, 0);
    let participant_id = participant.user_id;
    store.add_user(participant);
    let contest = seed_contest(&store, "ada@example.com", deadline).await;
    store
        .add_participant(&contest.contest_id, &participant_id)
        .await
        .unwrap();
    (store, contest, participant_id)
}

#[tokio::test]
async fn declare_winner_rejected_before_deadline() {
    let (store, contest, participant_id) = winner_fixture(Utc::now() + Duration::days(1)).await;

    let result = DeclareWinnerUseCase::new(Arc::clone(&store), Arc::clone(&store))
        .execute(DeclareWinnerInput {
            caller_email: "ada@example.com".to_string(),
            contest_id: contest.contest_id,
            winner_id: participant_id,
        })
        .await;

    assert!(matches!(result, Err(ContestError::DeadlineNotReached)));
}

#[tokio::test]
async fn declare_winner_requires_owning_creator() {
    let (store, contest, participant_id) = winner_fixture(Utc::now() - Duration::days(1)).await;
    store.add_user(user_with(
        "Eve",
        "eve@example.com",
        UserRole::Creator,
        100,
    ));

    let result = DeclareWinnerUseCase::new(Arc::clone(&store), Arc::clone(&store))
        .execute(DeclareWinnerInput {
            caller_email: "eve@example.com".to_string(),
            contest_id: contest.contest_id,
            winner_id: participant_id,
        })
        .await;

    assert!(matches!(result, Err(ContestError::AccessDenied)));
}

#[tokio::test]
async fn declare_winner_requires_roster_membership() {
    let (store, contest, _) = winner_fixture(Utc::now() - Duration::days(1)).await;
    let outsider = user_with("Eve", "eve@example.com", UserRole::User, 0);
    let outsider_id = outsider.user_id;
    store.add_user(outsider);

    let result = DeclareWinnerUseCase::new(Arc::clone(&store), Arc::clone(&store))
        .execute(DeclareWinnerInput {
            caller_email: "ada@example.com".to_string(),
            contest_id: contest.contest_id,
            winner_id: outsider_id,
        })
        .await;

    assert!(matches!(result, Err(ContestError::WinnerNotParticipant)));
}

#[tokio::test]
async fn declare_winner_is_final() {
    let (store, contest, participant_id) = winner_fixture(Utc::now() - Duration::days(1)).await;
    let use_case = DeclareWinnerUseCase::new(Arc::clone(&store), Arc::clone(&store));
    let input = || DeclareWinnerInput {
        caller_email: "ada@example.com".to_string(),
        contest_id: contest.contest_id,
        winner_id: participant_id,
    };

    let declared = use_case.execute(input()).await.unwrap();
    assert_eq!(declared.winner_id, Some(participant_id));

    assert!(matches!(
        use_case.execute(input()).await,
        Err(ContestError::WinnerAlreadyDeclared)
    ));
}

#[tokio::test]
async fn update_contest_status_is_admin_only() {
    let store = store();
    store.add_user(user_with("Ada", "ada@example.com", UserRole::Creator, 100));
    store.add_user(user_with("Mod", "mod@example.com", UserRole::Admin, 0));
    let contest = seed_contest(&store, "ada@example.com", Utc::now() + Duration::days(7)).await;

    let use_case = UpdateContestUseCase::new(Arc::clone(&store), Arc::clone(&store));
    let status_input = |caller: &str| UpdateContestInput {
        caller_email: caller.to_string(),
        contest_id: contest.contest_id,
        title: None,
        category: None,
        description: None,
        instructions: None,
        image_url: None,
        prize_money: None,
        entry_fee: None,
        deadline: None,
        status: Some("accepted".to_string()),
    };

    assert!(matches!(
        use_case.execute(status_input("ada@example.com")).await,
        Err(ContestError::AccessDenied)
    ));

    let updated = use_case.execute(status_input("mod@example.com")).await.unwrap();
    assert!(updated.status.is_accepted());
}

#[tokio::test]
async fn update_contest_rejects_foreign_creator() {
    let store = store();
    store.add_user(user_with("Ada", "ada@example.com", UserRole::Creator, 100));
    store.add_user(user_with("Eve", "eve@example.com", UserRole::Creator, 100));
    let contest = seed_contest(&store, "ada@example.com", Utc::now() + Duration::days(7)).await;

    let result = UpdateContestUseCase::new(Arc::clone(&store), Arc::clone(&store))
        .execute(UpdateContestInput {
            caller_email: "eve@example.com".to_string(),
            contest_id: contest.contest_id,
            title: Some("Hijacked".to_string()),
            category: None,
            description: None,
            instructions: None,
            image_url: None,
            prize_money: None,
            entry_fee: None,
            deadline: None,
            status: None,
        })
        .await;

    assert!(matches!(result, Err(ContestError::AccessDenied)));
}

#[tokio::test]
async fn delete_contest_allows_owner_and_admin_only() {
    let store = store();
    store.add_user(user_with("Ada", "ada@example.com", UserRole::Creator, 200));
    store.add_user(user_with("Eve", "eve@example.com", UserRole::Creator, 200));
    store.add_user(user_with("Mod", "mod@example.com", UserRole::Admin, 0));
    let first = seed_contest(&store, "ada@example.com", Utc::now()).await;
    let second = seed_contest(&store, "ada@example.com", Utc::now()).await;

    let use_case = DeleteContestUseCase::new(Arc::clone(&store), Arc::clone(&store));

    assert!(matches!(
        use_case
            .execute(DeleteContestInput {
                caller_email: "eve@example.com".to_string(),
                contest_id: first.contest_id,
            })
            .await,
        Err(ContestError::AccessDenied)
    ));

    use_case
        .execute(DeleteContestInput {
            caller_email: "ada@example.com".to_string(),
            contest_id: first.contest_id,
        })
        .await
        .unwrap();
    use_case
        .execute(DeleteContestInput {
            caller_email: "mod@example.com".to_string(),
            contest_id: second.contest_id,
        })
        .await
        .unwrap();

    assert_eq!(store.contest_count(), 0);
}

#[tokio::test]
async fn browse_excludes_pending_contests() {
    let store = store();
    store.add_user(user_with("Ada", "ada@example.com", UserRole::Creator, 200));
    let pending = seed_contest(&store, "ada@example.com", Utc::now()).await;
    let accepted = seed_contest(&store, "ada@example.com", Utc::now()).await;
    accept(&store, &accepted.contest_id);

    let contests = BrowseContestsUseCase::new(Arc::clone(&store))
        .execute(None)
        .await
        .unwrap();

    assert_eq!(contests.len(), 1);
    assert_eq!(contests[0].contest.contest_id, accepted.contest_id);
    assert_ne!(contests[0].contest.contest_id, pending.contest_id);
}

#[tokio::test]
async fn popular_orders_by_roster_size() {
    let store = store();
    store.add_user(user_with("Ada", "ada@example.com", UserRole::Creator, 200));
    let quiet = seed_contest(&store, "ada@example.com", Utc::now()).await;
    let busy = seed_contest(&store, "ada@example.com", Utc::now()).await;
    accept(&store, &quiet.contest_id);
    accept(&store, &busy.contest_id);

    for email in ["p1@example.com", "p2@example.com", "p3@example.com"] {
        let participant = user_with(email, email, UserRole::User, 0);
        let id = participant.user_id;
        store.add_user(participant);
        store.add_participant(&busy.contest_id, &id).await.unwrap();
    }

    let popular = PopularContestsUseCase::new(Arc::clone(&store), config())
        .execute()
        .await
        .unwrap();

    assert_eq!(popular[0].contest.contest_id, busy.contest_id);
    assert_eq!(popular[0].participant_count, 3);
    assert_eq!(popular[1].contest.contest_id, quiet.contest_id);
}

#[tokio::test]
async fn best_creators_carry_their_first_contest() {
    let store = store();
    let ada = user_with("Ada", "ada@example.com", UserRole::Creator, 200);
    let bea = user_with("Bea", "bea@example.com", UserRole::Creator, 100);
    let (ada_id, bea_id) = (ada.user_id, bea.user_id);
    store.add_user(ada);
    store.add_user(bea);

    let ada_first = seed_contest(&store, "ada@example.com", Utc::now()).await;
    let ada_second = seed_contest(&store, "ada@example.com", Utc::now()).await;
    let bea_only = seed_contest(&store, "bea@example.com", Utc::now()).await;
    for id in [&ada_first.contest_id, &ada_second.contest_id, &bea_only.contest_id] {
        accept(&store, id);
    }

    let rankings = BestCreatorsUseCase::new(Arc::clone(&store), config())
        .execute()
        .await
        .unwrap();

    assert_eq!(rankings.len(), 2);
    assert_eq!(rankings[0].creator.user_id, ada_id);
    assert_eq!(rankings[0].total_prize_money, 200);
    assert_eq!(rankings[0].contest_count, 2);
    assert_eq!(rankings[0].first_contest.contest_id, ada_first.contest_id);
    assert_eq!(rankings[1].creator.user_id, bea_id);
    assert_eq!(rankings[1].first_contest.contest_id, bea_only.contest_id);
}

#[tokio::test]
async fn leaderboard_excludes_contests_without_winner() {
    let store = store();
    store.add_user(user_with("Ada", "ada@example.com", UserRole::Creator, 200));
    let winner = user_with("Bob", "bob@example.com", UserRole::User, 0);
    let winner_id = winner.user_id;
    store.add_user(winner);

    let decided = seed_contest(&store, "ada@example.com", Utc::now() - Duration::days(1)).await;
    let open = seed_contest(&store, "ada@example.com", Utc::now() + Duration::days(1)).await;
    accept(&store, &decided.contest_id);
    accept(&store, &open.contest_id);
    store
        .add_participant(&decided.contest_id, &winner_id)
        .await
        .unwrap();
    DeclareWinnerUseCase::new(Arc::clone(&store), Arc::clone(&store))
        .execute(DeclareWinnerInput {
            caller_email: "ada@example.com".to_string(),
            contest_id: decided.contest_id,
            winner_id,
        })
        .await
        .unwrap();

    let entries = LeaderboardUseCase::new(Arc::clone(&store), config())
        .execute()
        .await
        .unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].winner.user_id, winner_id);
    assert_eq!(entries[0].total_prize_money, 100);
    assert_eq!(entries[0].wins, 1);
}

#[tokio::test]
async fn user_stats_sum_fees_and_winning_prizes() {
    let store = store();
    store.add_user(user_with("Ada", "ada@example.com", UserRole::Creator, 500));
    let bob = user_with("Bob", "bob@example.com", UserRole::User, 0);
    let bob_id = bob.user_id;
    store.add_user(bob);

    let won = seed_contest(&store, "ada@example.com", Utc::now() - Duration::days(1)).await;
    let lost = seed_contest(&store, "ada@example.com", Utc::now() - Duration::days(1)).await;
    accept(&store, &won.contest_id);
    accept(&store, &lost.contest_id);
    store.add_participant(&won.contest_id, &bob_id).await.unwrap();
    store.add_participant(&lost.contest_id, &bob_id).await.unwrap();
    store
        .set_winner_if_unset(&won.contest_id, &bob_id)
        .await
        .unwrap();

    let stats = UserStatsUseCase::new(Arc::clone(&store), Arc::clone(&store))
        .execute("bob@example.com")
        .await
        .unwrap();

    assert_eq!(stats.total_contests, 2);
    assert_eq!(stats.total_fee, 10);
    assert_eq!(stats.total_prize_money, 100);
    assert_eq!(stats.total_winning_contests, 1);
}

#[tokio::test]
async fn registered_and_winning_views_are_scoped_to_caller() {
    let store = store();
    store.add_user(user_with("Ada", "ada@example.com", UserRole::Creator, 500));
    let bob = user_with("Bob", "bob@example.com", UserRole::User, 0);
    let bob_id = bob.user_id;
    store.add_user(bob);
    store.add_user(user_with("Cai", "cai@example.com", UserRole::User, 0));

    let contest = seed_contest(&store, "ada@example.com", Utc::now() - Duration::days(1)).await;
    accept(&store, &contest.contest_id);
    store
        .add_participant(&contest.contest_id, &bob_id)
        .await
        .unwrap();
    store
        .set_winner_if_unset(&contest.contest_id, &bob_id)
        .await
        .unwrap();

    let registered = RegisteredContestsUseCase::new(Arc::clone(&store), Arc::clone(&store));
    assert_eq!(registered.execute("bob@example.com").await.unwrap().len(), 1);
    assert_eq!(registered.execute("cai@example.com").await.unwrap().len(), 0);

    let winning = WinningContestsUseCase::new(Arc::clone(&store), Arc::clone(&store));
    assert_eq!(winning.execute("bob@example.com").await.unwrap().len(), 1);
    assert_eq!(winning.execute("cai@example.com").await.unwrap().len(), 0);
}

#[tokio::test]
async fn creator_views_enforce_identity_match() {
    let store = store();
    let ada = user_with("Ada", "ada@example.com", UserRole::Creator, 200);
    let ada_id = ada.user_id;
    store.add_user(ada);
    let eve = user_with("Eve", "eve@example.com", UserRole::Creator, 200);
    let eve_id = eve.user_id;
    store.add_user(eve);
    let contest = seed_contest(&store, "ada@example.com", Utc::now()).await;

    let list = ListCreatorContestsUseCase::new(Arc::clone(&store), Arc::clone(&store));
    // Asking for someone else's creator id is rejected.
    assert!(matches!(
        list.execute(ListCreatorContestsInput {
            caller_email: "eve@example.com".to_string(),
            creator_id: ada_id,
            page: None,
            limit: None,
        })
        .await,
        Err(ContestError::AccessDenied)
    ));

    let output = list
        .execute(ListCreatorContestsInput {
            caller_email: "ada@example.com".to_string(),
            creator_id: ada_id,
            page: None,
            limit: None,
        })
        .await
        .unwrap();
    assert_eq!(output.total, 1);

    let detail = CreatorContestDetailUseCase::new(Arc::clone(&store), Arc::clone(&store));
    assert!(matches!(
        detail
            .execute(CreatorContestDetailInput {
                caller_email: "eve@example.com".to_string(),
                contest_id: contest.contest_id,
                creator_id: eve_id,
            })
            .await,
        Err(ContestError::AccessDenied)
    ));
}

#[tokio::test]
async fn admin_listing_requires_admin_role() {
    let store = store();
    store.add_user(user_with("Ada", "ada@example.com", UserRole::Creator, 200));
    store.add_user(user_with("Mod", "mod@example.com", UserRole::Admin, 0));
    seed_contest(&store, "ada@example.com", Utc::now()).await;

    let use_case = AdminListContestsUseCase::new(Arc::clone(&store), Arc::clone(&store));

    assert!(matches!(
        use_case
            .execute(AdminListContestsInput {
                caller_email: "ada@example.com".to_string(),
                page: None,
                limit: None,
            })
            .await,
        Err(ContestError::AccessDenied)
    ));

    let output = use_case
        .execute(AdminListContestsInput {
            caller_email: "mod@example.com".to_string(),
            page: None,
            limit: None,
        })
        .await
        .unwrap();
    assert_eq!(output.total, 1);
    assert_eq!(output.contests[0].creator.user_name, "Ada");
}

#[tokio::test]
async fn register_user_is_idempotent() {
    let store = store();
    let use_case = identity::application::register_user::RegisterUserUseCase::new(Arc::clone(
        &store,
    ));

    let first = use_case
        .execute(identity::application::register_user::RegisterUserInput {
            email: "Mina@Example.com".to_string(),
            user_name: "Mina".to_string(),
            image_url: String::new(),
        })
        .await
        .unwrap();
    let second = use_case
        .execute(identity::application::register_user::RegisterUserInput {
            email: "mina@example.com".to_string(),
            user_name: "Someone Else".to_string(),
            image_url: "ignored".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(first.user_id, second.user_id);
    assert_eq!(second.user_name, "Mina");
    assert_eq!(store.state.lock().unwrap().users.len(), 1);
}
