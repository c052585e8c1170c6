pub mod browse;
pub(crate) mod caller;
pub mod config;
pub mod create_contest;
pub mod creator_views;
pub mod declare_winner;
pub mod delete_contest;
pub mod participant_views;
pub mod rankings;
pub mod register_participant;
pub mod update_contest;

pub use browse::{
    AdminListContestsInput, AdminListContestsOutput, AdminListContestsUseCase,
    BrowseContestsUseCase, GetContestUseCase,
};
pub use config::ContestConfig;
pub use create_contest::{CreateContestInput, CreateContestUseCase};
pub use creator_views::{
    CreatorContestDetailInput, CreatorContestDetailUseCase, CreatorContestView,
    ListCreatorContestsInput, ListCreatorContestsOutput, ListCreatorContestsUseCase,
};
pub use declare_winner::{DeclareWinnerInput, DeclareWinnerUseCase};
pub use delete_contest::{DeleteContestInput, DeleteContestUseCase};
pub use participant_views::{RegisteredContestsUseCase, UserStatsUseCase, WinningContestsUseCase};
pub use rankings::{
    BestCreatorsUseCase, LeaderboardUseCase, PopularContestsUseCase, WinnersUseCase,
};
pub use register_participant::{RegisterParticipantInput, RegisterParticipantUseCase};
pub use update_contest::{UpdateContestInput, UpdateContestUseCase};
