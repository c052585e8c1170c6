//! Routers
//!
//! `auth_router` carries token issuance and logout; `user_router` carries
//! the account endpoints. Both share one state so the caller extractor can
//! reach the token configuration.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::application::config::IdentityConfig;
use crate::domain::repository::UserRepository;
use crate::presentation::handlers::{
    self, IdentityAppState,
};

/// Build the auth router (token issuance and logout)
pub fn auth_router<R>(repo: Arc<R>, config: Arc<IdentityConfig>) -> Router
where
    R: UserRepository + Sync + 'static,
{
    let state = IdentityAppState { repo, config };

    Router::new()
        .route("/token", post(handlers::issue_token::<R>))
        .route("/logout", post(handlers::logout::<R>))
        .with_state(state)
}

/// Build the user router
///
/// `GET /{email}` and `POST /{email}` are public; the rest require a
/// valid access token. The PATCH on the same segment is keyed by user id
/// rather than email.
pub fn user_router<R>(repo: Arc<R>, config: Arc<IdentityConfig>) -> Router
where
    R: UserRepository + Sync + 'static,
{
    let state = IdentityAppState { repo, config };

    Router::new()
        .route("/", get(handlers::list_users::<R>))
        .route("/credits", patch(handlers::grant_credits::<R>))
        .route(
            "/{email}",
            get(handlers::get_user::<R>)
                .post(handlers::register_user::<R>)
                .patch(handlers::update_user::<R>),
        )
        .with_state(state)
}
