use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::Contest;
use crate::domain::read_model::{
    AdminContestRow, ContestDetail, ContestSummary, CreatorRanking, LeaderboardEntry,
    ParticipantSubmission, PublicProfile, UserStats, WinnerSummary,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContestRequest {
    pub title: String,
    pub category: String,
    pub description: String,
    pub instructions: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub prize_money: i64,
    pub entry_fee: i64,
    pub deadline: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContestRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub prize_money: Option<i64>,
    #[serde(default)]
    pub entry_fee: Option<i64>,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclareWinnerRequest {
    pub winner_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    #[serde(default)]
    pub search: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestResponse {
    pub contest_id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub instructions: String,
    pub image_url: String,
    pub prize_money: i64,
    pub entry_fee: i64,
    pub status: String,
    pub creator_id: String,
    pub winner_id: Option<String>,
    pub deadline: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Contest> for ContestResponse {
    fn from(contest: Contest) -> Self {
        Self {
            contest_id: contest.contest_id.to_string(),
            title: contest.title,
            category: contest.category.code().to_string(),
            description: contest.description,
            instructions: contest.instructions,
            image_url: contest.image_url,
            prize_money: contest.prize_money.amount(),
            entry_fee: contest.entry_fee.amount(),
            status: contest.status.code().to_string(),
            creator_id: contest.creator_id.to_string(),
            winner_id: contest.winner_id.map(|id| id.to_string()),
            deadline: contest.deadline.timestamp_millis(),
            created_at: contest.created_at.timestamp_millis(),
            updated_at: contest.updated_at.timestamp_millis(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub user_id: String,
    pub user_name: String,
    pub email: String,
    pub image_url: String,
}

impl From<PublicProfile> for ProfileResponse {
    fn from(profile: PublicProfile) -> Self {
        Self {
            user_id: profile.user_id.to_string(),
            user_name: profile.user_name,
            email: profile.email,
            image_url: profile.image_url,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestSummaryResponse {
    #[serde(flatten)]
    pub contest: ContestResponse,
    pub participant_count: i64,
}

impl From<ContestSummary> for ContestSummaryResponse {
    fn from(summary: ContestSummary) -> Self {
        Self {
            contest: ContestResponse::from(summary.contest),
            participant_count: summary.participant_count,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestDetailResponse {
    #[serde(flatten)]
    pub contest: ContestResponse,
    pub creator: ProfileResponse,
    pub winner: Option<ProfileResponse>,
    pub participant_count: i64,
}

impl From<ContestDetail> for ContestDetailResponse {
    fn from(detail: ContestDetail) -> Self {
        Self {
            contest: ContestResponse::from(detail.contest),
            creator: ProfileResponse::from(detail.creator),
            winner: detail.winner.map(ProfileResponse::from),
            participant_count: detail.participant_count,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminContestResponse {
    #[serde(flatten)]
    pub contest: ContestResponse,
    pub creator: ProfileResponse,
}

impl From<AdminContestRow> for AdminContestResponse {
    fn from(row: AdminContestRow) -> Self {
        Self {
            contest: ContestResponse::from(row.contest),
            creator: ProfileResponse::from(row.creator),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestListResponse {
    pub contests: Vec<ContestSummaryResponse>,
    pub total: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminContestListResponse {
    pub contests: Vec<AdminContestResponse>,
    pub total: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantSubmissionResponse {
    pub participant: ProfileResponse,
    pub registered_at: i64,
    pub submission: Option<String>,
}

impl From<ParticipantSubmission> for ParticipantSubmissionResponse {
    fn from(entry: ParticipantSubmission) -> Self {
        Self {
            participant: ProfileResponse::from(entry.participant),
            registered_at: entry.registered_at.timestamp_millis(),
            submission: entry.submission,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorContestViewResponse {
    #[serde(flatten)]
    pub contest: ContestResponse,
    pub participants: Vec<ParticipantSubmissionResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorRankingResponse {
    pub creator: ProfileResponse,
    pub total_prize_money: i64,
    pub contest_count: i64,
    pub first_contest: ContestResponse,
}

impl From<CreatorRanking> for CreatorRankingResponse {
    fn from(ranking: CreatorRanking) -> Self {
        Self {
            creator: ProfileResponse::from(ranking.creator),
            total_prize_money: ranking.total_prize_money,
            contest_count: ranking.contest_count,
            first_contest: ContestResponse::from(ranking.first_contest),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntryResponse {
    pub winner: ProfileResponse,
    pub total_prize_money: i64,
    pub wins: i64,
}

impl From<LeaderboardEntry> for LeaderboardEntryResponse {
    fn from(entry: LeaderboardEntry) -> Self {
        Self {
            winner: ProfileResponse::from(entry.winner),
            total_prize_money: entry.total_prize_money,
            wins: entry.wins,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WinnerSummaryResponse {
    pub contest_id: String,
    pub title: String,
    pub image_url: String,
    pub prize_money: i64,
    pub participant_count: i64,
    pub winner: ProfileResponse,
}

impl From<WinnerSummary> for WinnerSummaryResponse {
    fn from(summary: WinnerSummary) -> Self {
        Self {
            contest_id: summary.contest_id.to_string(),
            title: summary.title,
            image_url: summary.image_url,
            prize_money: summary.prize_money,
            participant_count: summary.participant_count,
            winner: ProfileResponse::from(summary.winner),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatsResponse {
    pub total_contests: i64,
    pub total_fee: i64,
    pub total_prize_money: i64,
    pub total_winning_contests: i64,
}

impl From<UserStats> for UserStatsResponse {
    fn from(stats: UserStats) -> Self {
        Self {
            total_contests: stats.total_contests,
            total_fee: stats.total_fee,
            total_prize_money: stats.total_prize_money,
            total_winning_contests: stats.total_winning_contests,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessResponse {
    pub success: bool,
}
