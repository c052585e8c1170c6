//! Read Models
//!
//! Query-side shapes returned by the repository for listing, ranking
//! and detail views. These are not entities; they carry exactly what
//! the public surfaces show.

use chrono::{DateTime, Utc};
use identity::domain::value_object::user_id::UserId;

use crate::domain::entity::Contest;

/// Public slice of a user record shown next to contests
#[derive(Debug, Clone)]
pub struct PublicProfile {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub image_url: String,
}

/// A contest with its roster size
#[derive(Debug, Clone)]
pub struct ContestSummary {
    pub contest: Contest,
    pub participant_count: i64,
}

/// Full public detail of one contest
#[derive(Debug, Clone)]
pub struct ContestDetail {
    pub contest: Contest,
    pub creator: PublicProfile,
    pub winner: Option<PublicProfile>,
    pub participant_count: i64,
}

/// Admin listing row: contest plus its creator
#[derive(Debug, Clone)]
pub struct AdminContestRow {
    pub contest: Contest,
    pub creator: PublicProfile,
}

/// One roster entry with the participant's submission, if any
#[derive(Debug, Clone)]
pub struct ParticipantSubmission {
    pub participant: PublicProfile,
    pub registered_at: DateTime<Utc>,
    pub submission: Option<String>,
}

/// Creator ranking entry: accepted contests grouped by creator, with
/// the creator's earliest accepted contest as a representative
#[derive(Debug, Clone)]
pub struct CreatorRanking {
    pub creator: PublicProfile,
    pub total_prize_money: i64,
    pub contest_count: i64,
    pub first_contest: Contest,
}

/// Leaderboard entry: accepted contests with a winner, grouped by winner
#[derive(Debug, Clone)]
pub struct LeaderboardEntry {
    pub winner: PublicProfile,
    pub total_prize_money: i64,
    pub wins: i64,
}

/// Winner showcase row
#[derive(Debug, Clone)]
pub struct WinnerSummary {
    pub contest_id: crate::domain::value_object::contest_id::ContestId,
    pub title: String,
    pub image_url: String,
    pub prize_money: i64,
    pub participant_count: i64,
    pub winner: PublicProfile,
}

/// One accepted contest the user participates in, as seen by the
/// statistics query
#[derive(Debug, Clone, Copy)]
pub struct ParticipationRow {
    pub entry_fee: i64,
    pub prize_money: i64,
    pub won: bool,
}

/// Aggregate statistics over a user's accepted participations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserStats {
    pub total_contests: i64,
    pub total_fee: i64,
    pub total_prize_money: i64,
    pub total_winning_contests: i64,
}

impl UserStats {
    /// Fold participation rows into the aggregate
    pub fn from_rows(rows: &[ParticipationRow]) -> Self {
        let mut stats = Self::default();
        for row in rows {
            stats.total_contests += 1;
            stats.total_fee += row.entry_fee;
            if row.won {
                stats.total_prize_money += row.prize_money;
                stats.total_winning_contests += 1;
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_stats_from_rows() {
        let rows = [
            ParticipationRow {
                entry_fee: 5,
                prize_money: 100,
                won: true,
            },
            ParticipationRow {
                entry_fee: 10,
                prize_money: 200,
                won: false,
            },
            ParticipationRow {
                entry_fee: 2,
                prize_money: 50,
                won: true,
            },
        ];

        let stats = UserStats::from_rows(&rows);
        assert_eq!(stats.total_contests, 3);
        assert_eq!(stats.total_fee, 17);
        assert_eq!(stats.total_prize_money, 150);
        assert_eq!(stats.total_winning_contests, 2);
    }

    #[test]
    fn test_user_stats_empty() {
        assert_eq!(UserStats::from_rows(&[]), UserStats::default());
    }
}
