//! HTTP Handlers
//!
//! Thin adapters between the HTTP surface and the application use cases.

use std::sync::Arc;

use axum::{
    Json,
    extract::{FromRef, Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::application::config::IdentityConfig;
use crate::application::grant_credits::{GrantCreditsInput, GrantCreditsUseCase};
use crate::application::issue_token::IssueTokenUseCase;
use crate::application::list_users::{ListUsersInput, ListUsersUseCase};
use crate::application::register_user::{RegisterUserInput, RegisterUserUseCase};
use crate::application::update_user::{UpdateUserInput, UpdateUserUseCase};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_id::UserId, user_role::UserRole};
use crate::error::{IdentityError, IdentityResult};
use crate::presentation::dto::{
    GrantCreditsRequest, IssueTokenRequest, PageQuery, RegisterUserRequest, TokenResponse,
    UpdateUserRequest, UserListResponse, UserResponse,
};
use crate::presentation::middleware::Caller;

/// Shared state for the identity routers
#[derive(Debug)]
pub struct IdentityAppState<R>
where
    R: UserRepository,
{
    pub repo: Arc<R>,
    pub config: Arc<IdentityConfig>,
}

impl<R> Clone for IdentityAppState<R>
where
    R: UserRepository,
{
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            config: Arc::clone(&self.config),
        }
    }
}

impl<R> FromRef<IdentityAppState<R>> for Arc<IdentityConfig>
where
    R: UserRepository,
{
    fn from_ref(state: &IdentityAppState<R>) -> Self {
        Arc::clone(&state.config)
    }
}

/// POST /token: issue an access token for the given email
///
/// The token is returned as an HttpOnly cookie. Account existence is not
/// required here; registration is a separate, idempotent call.
pub async fn issue_token<R>(
    State(state): State<IdentityAppState<R>>,
    Json(body): Json<IssueTokenRequest>,
) -> Result<Response, IdentityError>
where
    R: UserRepository,
{
    let use_case = IssueTokenUseCase::new(Arc::clone(&state.config));
    let token = use_case.execute(body.email)?;

    let mut cookie = state.config.cookie.clone();
    cookie.max_age_secs = Some(state.config.token_ttl.as_secs() as i64);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie.build_set_cookie(&token))],
        Json(TokenResponse { success: true }),
    )
        .into_response())
}

/// POST /logout: clear the access-token cookie
pub async fn logout<R>(State(state): State<IdentityAppState<R>>) -> Response
where
    R: UserRepository,
{
    (
        StatusCode::OK,
        [(
            header::SET_COOKIE,
            state.config.cookie.build_delete_cookie(),
        )],
        Json(TokenResponse { success: true }),
    )
        .into_response()
}

/// POST /users/{email}: register an account (idempotent)
pub async fn register_user<R>(
    State(state): State<IdentityAppState<R>>,
    Path(email): Path<String>,
    Json(body): Json<RegisterUserRequest>,
) -> IdentityResult<Json<UserResponse>>
where
    R: UserRepository,
{
    let use_case = RegisterUserUseCase::new(Arc::clone(&state.repo));
    let user = use_case
        .execute(RegisterUserInput {
            email,
            user_name: body.user_name,
            image_url: body.image_url.unwrap_or_default(),
        })
        .await?;

    Ok(Json(UserResponse::from(user)))
}

/// GET /users/{email}: fetch a single account by email
pub async fn get_user<R>(
    State(state): State<IdentityAppState<R>>,
    Path(email): Path<String>,
) -> IdentityResult<Json<UserResponse>>
where
    R: UserRepository,
{
    let email = crate::domain::value_object::email::Email::new(email)?;
    let user = state
        .repo
        .find_by_email(&email)
        .await?
        .ok_or(IdentityError::UserNotFound)?;

    Ok(Json(UserResponse::from(user)))
}

/// PATCH /users/{id}: update profile fields, or the role (admin only)
pub async fn update_user<R>(
    State(state): State<IdentityAppState<R>>,
    caller: Caller,
    Path(id): Path<String>,
    Json(body): Json<UpdateUserRequest>,
) -> IdentityResult<Json<UserResponse>>
where
    R: UserRepository,
{
    let user_id = UserId::parse_str(&id)
        .map_err(|_| IdentityError::Validation(format!("Invalid user id: {id}")))?;
    let role = match body.role {
        Some(code) => Some(
            UserRole::from_code(&code)
                .ok_or_else(|| IdentityError::Validation(format!("Unknown role: {code}")))?,
        ),
        None => None,
    };

    let use_case = UpdateUserUseCase::new(Arc::clone(&state.repo));
    let user = use_case
        .execute(UpdateUserInput {
            caller_email: caller.email,
            user_id,
            user_name: body.user_name,
            image_url: body.image_url,
            role,
        })
        .await?;

    Ok(Json(UserResponse::from(user)))
}

/// PATCH /users/credits: add credits to the caller's balance (creator only)
pub async fn grant_credits<R>(
    State(state): State<IdentityAppState<R>>,
    caller: Caller,
    Json(body): Json<GrantCreditsRequest>,
) -> IdentityResult<Json<UserResponse>>
where
    R: UserRepository,
{
    let use_case = GrantCreditsUseCase::new(Arc::clone(&state.repo));
    let user = use_case
        .execute(GrantCreditsInput {
            caller_email: caller.email,
            credits: body.credits,
        })
        .await?;

    Ok(Json(UserResponse::from(user)))
}

/// GET /users: paginated account listing (admin only)
pub async fn list_users<R>(
    State(state): State<IdentityAppState<R>>,
    caller: Caller,
    Query(query): Query<PageQuery>,
) -> IdentityResult<Json<UserListResponse>>
where
    R: UserRepository,
{
    let use_case = ListUsersUseCase::new(Arc::clone(&state.repo));
    let output = use_case
        .execute(ListUsersInput {
            caller_email: caller.email,
            page: query.page,
            limit: query.limit,
        })
        .await?;

    Ok(Json(UserListResponse {
        users: output.users.into_iter().map(UserResponse::from).collect(),
        total: output.total,
    }))
}
