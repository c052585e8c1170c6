//! HTTP Handlers
//!
//! Thin adapters between the HTTP surface and the application use cases.

use std::sync::Arc;

use axum::{
    Json,
    extract::{FromRef, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use identity::presentation::middleware::Caller;
use identity::{IdentityConfig, UserRepository};

use crate::application::{
    AdminListContestsInput, AdminListContestsUseCase, BestCreatorsUseCase, BrowseContestsUseCase,
    ContestConfig, CreateContestInput, CreateContestUseCase, CreatorContestDetailInput,
    CreatorContestDetailUseCase, DeclareWinnerInput, DeclareWinnerUseCase, DeleteContestInput,
    DeleteContestUseCase, GetContestUseCase, LeaderboardUseCase, ListCreatorContestsInput,
    ListCreatorContestsUseCase, PopularContestsUseCase, RegisterParticipantInput,
    RegisterParticipantUseCase, RegisteredContestsUseCase, UpdateContestInput,
    UpdateContestUseCase, UserStatsUseCase, WinnersUseCase, WinningContestsUseCase,
};
use crate::domain::repository::ContestRepository;
use crate::domain::value_object::contest_id::ContestId;
use crate::error::{ContestError, ContestResult};
use crate::presentation::dto::{
    AdminContestListResponse, AdminContestResponse, ContestDetailResponse, ContestListResponse,
    ContestResponse, ContestSummaryResponse, CreateContestRequest, CreatorContestViewResponse,
    CreatorRankingResponse, DeclareWinnerRequest, LeaderboardEntryResponse, PageQuery,
    ParticipantSubmissionResponse, SearchQuery, SuccessResponse, UpdateContestRequest,
    UserStatsResponse, WinnerSummaryResponse,
};

/// Shared state for the contest router
#[derive(Debug)]
pub struct ContestAppState<C, U>
where
    C: ContestRepository,
    U: UserRepository,
{
    pub contests: Arc<C>,
    pub users: Arc<U>,
    pub config: Arc<ContestConfig>,
    pub identity_config: Arc<IdentityConfig>,
}

impl<C, U> Clone for ContestAppState<C, U>
where
    C: ContestRepository,
    U: UserRepository,
{
    fn clone(&self) -> Self {
        Self {
            contests: Arc::clone(&self.contests),
            users: Arc::clone(&self.users),
            config: Arc::clone(&self.config),
            identity_config: Arc::clone(&self.identity_config),
        }
    }
}

impl<C, U> FromRef<ContestAppState<C, U>> for Arc<IdentityConfig>
where
    C: ContestRepository,
    U: UserRepository,
{
    fn from_ref(state: &ContestAppState<C, U>) -> Self {
        Arc::clone(&state.identity_config)
    }
}

fn parse_contest_id(id: &str) -> ContestResult<ContestId> {
    ContestId::parse_str(id).map_err(|_| ContestError::Validation(format!("Invalid contest id: {id}")))
}

/// POST /: publish a new contest (creator only)
pub async fn create_contest<C, U>(
    State(state): State<ContestAppState<C, U>>,
    caller: Caller,
    Json(body): Json<CreateContestRequest>,
) -> Result<Response, ContestError>
where
    C: ContestRepository,
    U: UserRepository,
{
    let use_case = CreateContestUseCase::new(
        Arc::clone(&state.contests),
        Arc::clone(&state.users),
        Arc::clone(&state.config),
    );
    let contest = use_case
        .execute(CreateContestInput {
            caller_email: caller.email,
            title: body.title,
            category: body.category,
            description: body.description,
            instructions: body.instructions,
            image_url: body.image_url.unwrap_or_default(),
            prize_money: body.prize_money,
            entry_fee: body.entry_fee,
            deadline: body.deadline,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ContestResponse::from(contest))).into_response())
}

/// GET /?search=: accepted contests, optional category filter
pub async fn browse_contests<C, U>(
    State(state): State<ContestAppState<C, U>>,
    Query(query): Query<SearchQuery>,
) -> ContestResult<Json<Vec<ContestSummaryResponse>>>
where
    C: ContestRepository,
    U: UserRepository,
{
    let use_case = BrowseContestsUseCase::new(Arc::clone(&state.contests));
    let contests = use_case.execute(query.search).await?;

    Ok(Json(
        contests.into_iter().map(ContestSummaryResponse::from).collect(),
    ))
}

/// GET /{id}: public contest detail
pub async fn get_contest<C, U>(
    State(state): State<ContestAppState<C, U>>,
    Path(id): Path<String>,
) -> ContestResult<Json<ContestDetailResponse>>
where
    C: ContestRepository,
    U: UserRepository,
{
    let contest_id = parse_contest_id(&id)?;
    let use_case = GetContestUseCase::new(Arc::clone(&state.contests));
    let detail = use_case.execute(contest_id).await?;

    Ok(Json(ContestDetailResponse::from(detail)))
}

/// PATCH /{id}: edit a contest (owner or admin)
pub async fn update_contest<C, U>(
    State(state): State<ContestAppState<C, U>>,
    caller: Caller,
    Path(id): Path<String>,
    Json(body): Json<UpdateContestRequest>,
) -> ContestResult<Json<ContestResponse>>
where
    C: ContestRepository,
    U: UserRepository,
{
    let contest_id = parse_contest_id(&id)?;
    let use_case =
        UpdateContestUseCase::new(Arc::clone(&state.contests), Arc::clone(&state.users));
    let contest = use_case
        .execute(UpdateContestInput {
            caller_email: caller.email,
            contest_id,
            title: body.title,
            category: body.category,
            description: body.description,
            instructions: body.instructions,
            image_url: body.image_url,
            prize_money: body.prize_money,
            entry_fee: body.entry_fee,
            deadline: body.deadline,
            status: body.status,
        })
        .await?;

    Ok(Json(ContestResponse::from(contest)))
}

/// DELETE /{id}: remove a contest (owner or admin)
pub async fn delete_contest<C, U>(
    State(state): State<ContestAppState<C, U>>,
    caller: Caller,
    Path(id): Path<String>,
) -> ContestResult<Json<SuccessResponse>>
where
    C: ContestRepository,
    U: UserRepository,
{
    let contest_id = parse_contest_id(&id)?;
    let use_case =
        DeleteContestUseCase::new(Arc::clone(&state.contests), Arc::clone(&state.users));
    use_case
        .execute(DeleteContestInput {
            caller_email: caller.email,
            contest_id,
        })
        .await?;

    Ok(Json(SuccessResponse { success: true }))
}

/// POST /{id}/register: join the roster
pub async fn register_participant<C, U>(
    State(state): State<ContestAppState<C, U>>,
    caller: Caller,
    Path(id): Path<String>,
) -> ContestResult<Json<SuccessResponse>>
where
    C: ContestRepository,
    U: UserRepository,
{
    let contest_id = parse_contest_id(&id)?;
    let use_case =
        RegisterParticipantUseCase::new(Arc::clone(&state.contests), Arc::clone(&state.users));
    use_case
        .execute(RegisterParticipantInput {
            caller_email: caller.email,
            contest_id,
        })
        .await?;

    Ok(Json(SuccessResponse { success: true }))
}

/// PATCH /{id}/winner: declare the winner (owning creator only)
pub async fn declare_winner<C, U>(
    State(state): State<ContestAppState<C, U>>,
    caller: Caller,
    Path(id): Path<String>,
    Json(body): Json<DeclareWinnerRequest>,
) -> ContestResult<Json<ContestResponse>>
where
    C: ContestRepository,
    U: UserRepository,
{
    let contest_id = parse_contest_id(&id)?;
    let winner_id = identity::domain::value_object::user_id::UserId::parse_str(&body.winner_id)
        .map_err(|_| ContestError::Validation(format!("Invalid winner id: {}", body.winner_id)))?;

    let use_case =
        DeclareWinnerUseCase::new(Arc::clone(&state.contests), Arc::clone(&state.users));
    let contest = use_case
        .execute(DeclareWinnerInput {
            caller_email: caller.email,
            contest_id,
            winner_id,
        })
        .await?;

    Ok(Json(ContestResponse::from(contest)))
}

/// GET /admin: moderation listing (admin only)
pub async fn admin_list_contests<C, U>(
    State(state): State<ContestAppState<C, U>>,
    caller: Caller,
    Query(query): Query<PageQuery>,
) -> ContestResult<Json<AdminContestListResponse>>
where
    C: ContestRepository,
    U: UserRepository,
{
    let use_case =
        AdminListContestsUseCase::new(Arc::clone(&state.contests), Arc::clone(&state.users));
    let output = use_case
        .execute(AdminListContestsInput {
            caller_email: caller.email,
            page: query.page,
            limit: query.limit,
        })
        .await?;

    Ok(Json(AdminContestListResponse {
        contests: output
            .contests
            .into_iter()
            .map(AdminContestResponse::from)
            .collect(),
        total: output.total,
    }))
}

/// GET /creator/{creatorId}: a creator's own contests
pub async fn creator_contests<C, U>(
    State(state): State<ContestAppState<C, U>>,
    caller: Caller,
    Path(creator_id): Path<String>,
    Query(query): Query<PageQuery>,
) -> ContestResult<Json<ContestListResponse>>
where
    C: ContestRepository,
    U: UserRepository,
{
    let creator_id = identity::domain::value_object::user_id::UserId::parse_str(&creator_id)
        .map_err(|_| ContestError::Validation(format!("Invalid creator id: {creator_id}")))?;

    let use_case =
        ListCreatorContestsUseCase::new(Arc::clone(&state.contests), Arc::clone(&state.users));
    let output = use_case
        .execute(ListCreatorContestsInput {
            caller_email: caller.email,
            creator_id,
            page: query.page,
            limit: query.limit,
        })
        .await?;

    Ok(Json(ContestListResponse {
        contests: output
            .contests
            .into_iter()
            .map(ContestSummaryResponse::from)
            .collect(),
        total: output.total,
    }))
}

/// GET /{id}/creator/{creatorId}: owner's contest detail with the
/// participant grid
pub async fn creator_contest_detail<C, U>(
    State(state): State<ContestAppState<C, U>>,
    caller: Caller,
    Path((id, creator_id)): Path<(String, String)>,
) -> ContestResult<Json<CreatorContestViewResponse>>
where
    C: ContestRepository,
    U: UserRepository,
{
    let contest_id = parse_contest_id(&id)?;
    let creator_id = identity::domain::value_object::user_id::UserId::parse_str(&creator_id)
        .map_err(|_| ContestError::Validation(format!("Invalid creator id: {creator_id}")))?;

    let use_case =
        CreatorContestDetailUseCase::new(Arc::clone(&state.contests), Arc::clone(&state.users));
    let view = use_case
        .execute(CreatorContestDetailInput {
            caller_email: caller.email,
            contest_id,
            creator_id,
        })
        .await?;

    Ok(Json(CreatorContestViewResponse {
        contest: ContestResponse::from(view.contest),
        participants: view
            .participants
            .into_iter()
            .map(ParticipantSubmissionResponse::from)
            .collect(),
    }))
}

/// GET /registered: accepted contests the caller joined
pub async fn registered_contests<C, U>(
    State(state): State<ContestAppState<C, U>>,
    caller: Caller,
) -> ContestResult<Json<Vec<ContestSummaryResponse>>>
where
    C: ContestRepository,
    U: UserRepository,
{
    let use_case =
        RegisteredContestsUseCase::new(Arc::clone(&state.contests), Arc::clone(&state.users));
    let contests = use_case.execute(&caller.email).await?;

    Ok(Json(
        contests.into_iter().map(ContestSummaryResponse::from).collect(),
    ))
}

/// GET /winning: accepted contests the caller won
pub async fn winning_contests<C, U>(
    State(state): State<ContestAppState<C, U>>,
    caller: Caller,
) -> ContestResult<Json<Vec<ContestSummaryResponse>>>
where
    C: ContestRepository,
    U: UserRepository,
{
    let use_case =
        WinningContestsUseCase::new(Arc::clone(&state.contests), Arc::clone(&state.users));
    let contests = use_case.execute(&caller.email).await?;

    Ok(Json(
        contests.into_iter().map(ContestSummaryResponse::from).collect(),
    ))
}

/// GET /user-stats: aggregate statistics for the caller
pub async fn user_stats<C, U>(
    State(state): State<ContestAppState<C, U>>,
    caller: Caller,
) -> ContestResult<Json<UserStatsResponse>>
where
    C: ContestRepository,
    U: UserRepository,
{
    let use_case = UserStatsUseCase::new(Arc::clone(&state.contests), Arc::clone(&state.users));
    let stats = use_case.execute(&caller.email).await?;

    Ok(Json(UserStatsResponse::from(stats)))
}

/// GET /popular: accepted contests by roster size
pub async fn popular_contests<C, U>(
    State(state): State<ContestAppState<C, U>>,
) -> ContestResult<Json<Vec<ContestSummaryResponse>>>
where
    C: ContestRepository,
    U: UserRepository,
{
    let use_case =
        PopularContestsUseCase::new(Arc::clone(&state.contests), Arc::clone(&state.config));
    let contests = use_case.execute().await?;

    Ok(Json(
        contests.into_iter().map(ContestSummaryResponse::from).collect(),
    ))
}

/// GET /best-creator: creators by total prize money
pub async fn best_creators<C, U>(
    State(state): State<ContestAppState<C, U>>,
) -> ContestResult<Json<Vec<CreatorRankingResponse>>>
where
    C: ContestRepository,
    U: UserRepository,
{
    let use_case =
        BestCreatorsUseCase::new(Arc::clone(&state.contests), Arc::clone(&state.config));
    let rankings = use_case.execute().await?;

    Ok(Json(
        rankings.into_iter().map(CreatorRankingResponse::from).collect(),
    ))
}

/// GET /leaderboard: winners by total prize money
pub async fn leaderboard<C, U>(
    State(state): State<ContestAppState<C, U>>,
) -> ContestResult<Json<Vec<LeaderboardEntryResponse>>>
where
    C: ContestRepository,
    U: UserRepository,
{
    let use_case =
        LeaderboardUseCase::new(Arc::clone(&state.contests), Arc::clone(&state.config));
    let entries = use_case.execute().await?;

    Ok(Json(
        entries.into_iter().map(LeaderboardEntryResponse::from).collect(),
    ))
}

/// GET /winners: accepted contests with a declared winner
pub async fn winners<C, U>(
    State(state): State<ContestAppState<C, U>>,
) -> ContestResult<Json<Vec<WinnerSummaryResponse>>>
where
    C: ContestRepository,
    U: UserRepository,
{
    let use_case = WinnersUseCase::new(Arc::clone(&state.contests));
    let summaries = use_case.execute().await?;

    Ok(Json(
        summaries.into_iter().map(WinnerSummaryResponse::from).collect(),
    ))
}
