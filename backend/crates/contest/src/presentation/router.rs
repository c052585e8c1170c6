//! Router
//!
//! Static segments are registered before the `/{id}` family so the named
//! surfaces (admin, popular, rankings) never collide with contest ids.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, patch, post},
};
use identity::{IdentityConfig, UserRepository};

use crate::application::ContestConfig;
use crate::domain::repository::ContestRepository;
use crate::presentation::handlers::{self, ContestAppState};

/// Build the contest router
pub fn contest_router<C, U>(
    contests: Arc<C>,
    users: Arc<U>,
    config: Arc<ContestConfig>,
    identity_config: Arc<IdentityConfig>,
) -> Router
where
    C: ContestRepository + Sync + 'static,
    U: UserRepository + Sync + 'static,
{
    let state = ContestAppState {
        contests,
        users,
        config,
        identity_config,
    };

    Router::new()
        .route(
            "/",
            get(handlers::browse_contests::<C, U>).post(handlers::create_contest::<C, U>),
        )
        .route("/admin", get(handlers::admin_list_contests::<C, U>))
        .route("/popular", get(handlers::popular_contests::<C, U>))
        .route("/best-creator", get(handlers::best_creators::<C, U>))
        .route("/leaderboard", get(handlers::leaderboard::<C, U>))
        .route("/winners", get(handlers::winners::<C, U>))
        .route("/registered", get(handlers::registered_contests::<C, U>))
        .route("/winning", get(handlers::winning_contests::<C, U>))
        .route("/user-stats", get(handlers::user_stats::<C, U>))
        .route("/creator/{creator_id}", get(handlers::creator_contests::<C, U>))
        .route(
            "/{id}",
            get(handlers::get_contest::<C, U>)
                .patch(handlers::update_contest::<C, U>)
                .delete(handlers::delete_contest::<C, U>),
        )
        .route("/{id}/register", post(handlers::register_participant::<C, U>))
        .route("/{id}/winner", patch(handlers::declare_winner::<C, U>))
        .route(
            "/{id}/creator/{creator_id}",
            get(handlers::creator_contest_detail::<C, U>),
        )
        .with_state(state)
}
