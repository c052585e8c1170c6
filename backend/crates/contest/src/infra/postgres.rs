//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use identity::domain::value_object::user_id::UserId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::Contest;
use crate::domain::read_model::{
    AdminContestRow, ContestDetail, ContestSummary, CreatorRanking, LeaderboardEntry,
    ParticipantSubmission, ParticipationRow, PublicProfile, WinnerSummary,
};
use crate::domain::repository::ContestRepository;
use crate::domain::value_object::{
    category::Category, contest_id::ContestId, contest_status::ContestStatus, money::Money,
};
use crate::error::{ContestError, ContestResult};

const FK_VIOLATION: &str = "23503";

const CONTEST_COLUMNS: &str = r#"
    c.contest_id, c.title, c.category, c.description, c.instructions,
    c.image_url, c.prize_money, c.entry_fee, c.contest_status,
    c.creator_id, c.winner_id, c.deadline, c.created_at, c.updated_at
"#;

/// PostgreSQL-backed contest repository
#[derive(Clone)]
pub struct PgContestRepository {
    pool: PgPool,
}

impl PgContestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ContestRepository for PgContestRepository {
    async fn create(&self, contest: &Contest, creation_cost: i64) -> ContestResult<()> {
        let mut tx = self.pool.begin().await?;

        // Conditional debit; zero rows means the balance cannot cover
        // the cost and nothing may be inserted.
        let debited = sqlx::query(
            r#"
            UPDATE users
            SET credits = credits - $2, updated_at = NOW()
            WHERE user_id = $1 AND credits >= $2
            "#,
        )
        .bind(contest.creator_id.as_uuid())
        .bind(creation_cost)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if debited == 0 {
            tx.rollback().await?;
            return Err(ContestError::InsufficientCredits);
        }

        sqlx::query(
            r#"
            INSERT INTO contests (
                contest_id, title, category, description, instructions,
                image_url, prize_money, entry_fee, contest_status,
                creator_id, winner_id, deadline, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(contest.contest_id.as_uuid())
        .bind(&contest.title)
        .bind(contest.category.id())
        .bind(&contest.description)
        .bind(&contest.instructions)
        .bind(&contest.image_url)
        .bind(contest.prize_money.amount())
        .bind(contest.entry_fee.amount())
        .bind(contest.status.id())
        .bind(contest.creator_id.as_uuid())
        .bind(contest.winner_id.as_ref().map(|id| *id.as_uuid()))
        .bind(contest.deadline)
        .bind(contest.created_at)
        .bind(contest.updated_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn find_by_id(&self, contest_id: &ContestId) -> ContestResult<Option<Contest>> {
        let row = sqlx::query_as::<_, ContestRow>(&format!(
            "SELECT {CONTEST_COLUMNS} FROM contests c WHERE c.contest_id = $1"
        ))
        .bind(contest_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ContestRow::into_contest))
    }

    async fn update(&self, contest: &Contest) -> ContestResult<()> {
        sqlx::query(
            r#"
            UPDATE contests
            SET title = $2, category = $3, description = $4, instructions = $5,
                image_url = $6, prize_money = $7, entry_fee = $8,
                contest_status = $9, deadline = $10, updated_at = $11
            WHERE contest_id = $1
            "#,
        )
        .bind(contest.contest_id.as_uuid())
        .bind(&contest.title)
        .bind(contest.category.id())
        .bind(&contest.description)
        .bind(&contest.instructions)
        .bind(&contest.image_url)
        .bind(contest.prize_money.amount())
        .bind(contest.entry_fee.amount())
        .bind(contest.status.id())
        .bind(contest.deadline)
        .bind(contest.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, contest_id: &ContestId) -> ContestResult<()> {
        // Roster and tasks are removed by FK cascade.
        sqlx::query("DELETE FROM contests WHERE contest_id = $1")
            .bind(contest_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn add_participant(
        &self,
        contest_id: &ContestId,
        user_id: &UserId,
    ) -> ContestResult<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO contest_participants (contest_id, user_id, registered_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (contest_id, user_id) DO NOTHING
            "#,
        )
        .bind(contest_id.as_uuid())
        .bind(user_id.as_uuid())
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => Ok(done.rows_affected() == 1),
            // The contest may be deleted between the lookup and this
            // insert; the FK violation takes the place of the lookup miss.
            Err(sqlx::Error::Database(e)) if e.code().as_deref() == Some(FK_VIOLATION) => {
                Err(ContestError::ContestNotFound)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn is_participant(
        &self,
        contest_id: &ContestId,
        user_id: &UserId,
    ) -> ContestResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM contest_participants
                WHERE contest_id = $1 AND user_id = $2
            )
            "#,
        )
        .bind(contest_id.as_uuid())
        .bind(user_id.as_uuid())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn set_winner_if_unset(
        &self,
        contest_id: &ContestId,
        winner_id: &UserId,
    ) -> ContestResult<bool> {
        let updated = sqlx::query(
            r#"
            UPDATE contests
            SET winner_id = $2, updated_at = NOW()
            WHERE contest_id = $1 AND winner_id IS NULL
            "#,
        )
        .bind(contest_id.as_uuid())
        .bind(winner_id.as_uuid())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated == 1)
    }

    async fn list_by_creator(
        &self,
        creator_id: &UserId,
        offset: i64,
        limit: i64,
    ) -> ContestResult<(Vec<ContestSummary>, i64)> {
        let rows = sqlx::query_as::<_, SummaryRow>(&format!(
            r#"
            SELECT {CONTEST_COLUMNS},
                   (SELECT COUNT(*) FROM contest_participants p
                    WHERE p.contest_id = c.contest_id) AS participant_count
            FROM contests c
            WHERE c.creator_id = $1
            ORDER BY c.created_at DESC
            LIMIT $2 OFFSET $3
            "#
        ))
        .bind(creator_id.as_uuid())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let total =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM contests WHERE creator_id = $1")
                .bind(creator_id.as_uuid())
                .fetch_one(&self.pool)
                .await?;

        Ok((rows.into_iter().map(SummaryRow::into_summary).collect(), total))
    }

    async fn list_all(
        &self,
        offset: i64,
        limit: i64,
    ) -> ContestResult<(Vec<AdminContestRow>, i64)> {
        let rows = sqlx::query_as::<_, AdminRow>(&format!(
            r#"
            SELECT {CONTEST_COLUMNS},
                   u.user_name AS creator_name,
                   u.email AS creator_email,
                   u.image_url AS creator_image
            FROM contests c
            JOIN users u ON u.user_id = c.creator_id
            ORDER BY c.created_at DESC
            LIMIT $1 OFFSET $2
            "#
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM contests")
            .fetch_one(&self.pool)
            .await?;

        Ok((rows.into_iter().map(AdminRow::into_admin_row).collect(), total))
    }

    async fn browse_accepted(&self, search: Option<&str>) -> ContestResult<Vec<ContestSummary>> {
        // The search term is a category name; an unknown name matches
        // nothing rather than everything.
        let category = search.and_then(Category::from_code);
        if search.is_some() && category.is_none() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, SummaryRow>(&format!(
            r#"
            SELECT {CONTEST_COLUMNS},
                   (SELECT COUNT(*) FROM contest_participants p
                    WHERE p.contest_id = c.contest_id) AS participant_count
            FROM contests c
            WHERE c.contest_status = 1
              AND ($1::smallint IS NULL OR c.category = $1)
            ORDER BY participant_count DESC, c.created_at DESC
            "#
        ))
        .bind(category.map(|c| c.id()))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(SummaryRow::into_summary).collect())
    }

    async fn detail(&self, contest_id: &ContestId) -> ContestResult<Option<ContestDetail>> {
        let row = sqlx::query_as::<_, DetailRow>(&format!(
            r#"
            SELECT {CONTEST_COLUMNS},
                   (SELECT COUNT(*) FROM contest_participants p
                    WHERE p.contest_id = c.contest_id) AS participant_count,
                   u.user_name AS creator_name,
                   u.email AS creator_email,
                   u.image_url AS creator_image,
                   w.user_name AS winner_name,
                   w.email AS winner_email,
                   w.image_url AS winner_image
            FROM contests c
            JOIN users u ON u.user_id = c.creator_id
            LEFT JOIN users w ON w.user_id = c.winner_id
            WHERE c.contest_id = $1
            "#
        ))
        .bind(contest_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(DetailRow::into_detail))
    }

    async fn participant_grid(
        &self,
        contest_id: &ContestId,
    ) -> ContestResult<Vec<ParticipantSubmission>> {
        let rows = sqlx::query_as::<_, GridRow>(
            r#"
            SELECT u.user_id, u.user_name, u.email, u.image_url,
                   p.registered_at, t.submission
            FROM contest_participants p
            JOIN users u ON u.user_id = p.user_id
            LEFT JOIN tasks t
                ON t.contest_id = p.contest_id AND t.participant_id = p.user_id
            WHERE p.contest_id = $1
            ORDER BY p.position
            "#,
        )
        .bind(contest_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(GridRow::into_submission).collect())
    }

    async fn registered_for(&self, user_id: &UserId) -> ContestResult<Vec<ContestSummary>> {
        let rows = sqlx::query_as::<_, SummaryRow>(&format!(
            r#"
            SELECT {CONTEST_COLUMNS},
                   (SELECT COUNT(*) FROM contest_participants p2
                    WHERE p2.contest_id = c.contest_id) AS participant_count
            FROM contests c
            JOIN contest_participants p ON p.contest_id = c.contest_id
            WHERE p.user_id = $1 AND c.contest_status = 1
            ORDER BY c.created_at DESC
            "#
        ))
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(SummaryRow::into_summary).collect())
    }

    async fn won_by(&self, user_id: &UserId) -> ContestResult<Vec<ContestSummary>> {
        let rows = sqlx::query_as::<_, SummaryRow>(&format!(
            r#"
            SELECT {CONTEST_COLUMNS},
                   (SELECT COUNT(*) FROM contest_participants p
                    WHERE p.contest_id = c.contest_id) AS participant_count
            FROM contests c
            WHERE c.winner_id = $1 AND c.contest_status = 1
            ORDER BY c.updated_at DESC
            "#
        ))
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(SummaryRow::into_summary).collect())
    }

    async fn participations(&self, user_id: &UserId) -> ContestResult<Vec<ParticipationRow>> {
        let rows = sqlx::query_as::<_, StatsRow>(
            r#"
            SELECT c.entry_fee, c.prize_money,
                   (c.winner_id = $1) IS TRUE AS won
            FROM contests c
            JOIN contest_participants p ON p.contest_id = c.contest_id
            WHERE p.user_id = $1 AND c.contest_status = 1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| ParticipationRow {
                entry_fee: r.entry_fee,
                prize_money: r.prize_money,
                won: r.won,
            })
            .collect())
    }

    async fn popular(&self, limit: i64) -> ContestResult<Vec<ContestSummary>> {
        let rows = sqlx::query_as::<_, SummaryRow>(&format!(
            r#"
            SELECT {CONTEST_COLUMNS},
                   (SELECT COUNT(*) FROM contest_participants p
                    WHERE p.contest_id = c.contest_id) AS participant_count
            FROM contests c
            WHERE c.contest_status = 1
            ORDER BY participant_count DESC, c.created_at DESC
            LIMIT $1
            "#
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(SummaryRow::into_summary).collect())
    }

    async fn best_creators(&self, limit: i64) -> ContestResult<Vec<CreatorRanking>> {
        let rows = sqlx::query_as::<_, BestCreatorRow>(&format!(
            r#"
            SELECT u.user_name AS creator_name, u.email AS creator_email,
                   u.image_url AS creator_image,
                   agg.total_prize_money, agg.entry_count,
                   {CONTEST_COLUMNS}
            FROM (SELECT creator_id,
                         SUM(prize_money)::bigint AS total_prize_money,
                         COUNT(*) AS entry_count
                  FROM contests
                  WHERE contest_status = 1
                  GROUP BY creator_id) agg
            JOIN users u ON u.user_id = agg.creator_id
            JOIN LATERAL (SELECT * FROM contests
                          WHERE creator_id = agg.creator_id AND contest_status = 1
                          ORDER BY created_at
                          LIMIT 1) c ON TRUE
            ORDER BY agg.total_prize_money DESC
            LIMIT $1
            "#
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BestCreatorRow::into_ranking).collect())
    }

    async fn leaderboard(&self, limit: i64) -> ContestResult<Vec<LeaderboardEntry>> {
        let rows = sqlx::query_as::<_, RankingRow>(
            r#"
            SELECT u.user_id, u.user_name, u.email, u.image_url,
                   SUM(c.prize_money)::bigint AS total_prize_money,
                   COUNT(*) AS entry_count
            FROM contests c
            JOIN users u ON u.user_id = c.winner_id
            WHERE c.contest_status = 1 AND c.winner_id IS NOT NULL
            GROUP BY u.user_id, u.user_name, u.email, u.image_url
            ORDER BY total_prize_money DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| LeaderboardEntry {
                total_prize_money: r.total_prize_money,
                wins: r.entry_count,
                winner: r.into_profile(),
            })
            .collect())
    }

    async fn winners(&self) -> ContestResult<Vec<WinnerSummary>> {
        let rows = sqlx::query_as::<_, WinnerRow>(
            r#"
            SELECT c.contest_id, c.title, c.image_url, c.prize_money,
                   (SELECT COUNT(*) FROM contest_participants p
                    WHERE p.contest_id = c.contest_id) AS participant_count,
                   w.user_id AS winner_id,
                   w.user_name AS winner_name,
                   w.email AS winner_email,
                   w.image_url AS winner_image
            FROM contests c
            JOIN users w ON w.user_id = c.winner_id
            WHERE c.contest_status = 1
            ORDER BY c.updated_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(WinnerRow::into_summary).collect())
    }
}

#[derive(sqlx::FromRow)]
struct ContestRow {
    contest_id: Uuid,
    title: String,
    category: i16,
    description: String,
    instructions: String,
    image_url: String,
    prize_money: i64,
    entry_fee: i64,
    contest_status: i16,
    creator_id: Uuid,
    winner_id: Option<Uuid>,
    deadline: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ContestRow {
    fn into_contest(self) -> Contest {
        Contest {
            contest_id: ContestId::from_uuid(self.contest_id),
            title: self.title,
            category: Category::from_id(self.category),
            description: self.description,
            instructions: self.instructions,
            image_url: self.image_url,
            prize_money: Money::from_db(self.prize_money),
            entry_fee: Money::from_db(self.entry_fee),
            status: ContestStatus::from_id(self.contest_status),
            creator_id: UserId::from_uuid(self.creator_id),
            winner_id: self.winner_id.map(UserId::from_uuid),
            deadline: self.deadline,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SummaryRow {
    #[sqlx(flatten)]
    contest: ContestRow,
    participant_count: i64,
}

impl SummaryRow {
    fn into_summary(self) -> ContestSummary {
        ContestSummary {
            contest: self.contest.into_contest(),
            participant_count: self.participant_count,
        }
    }
}

#[derive(sqlx::FromRow)]
struct AdminRow {
    #[sqlx(flatten)]
    contest: ContestRow,
    creator_name: String,
    creator_email: String,
    creator_image: String,
}

impl AdminRow {
    fn into_admin_row(self) -> AdminContestRow {
        let creator_id = UserId::from_uuid(self.contest.creator_id);
        AdminContestRow {
            contest: self.contest.into_contest(),
            creator: PublicProfile {
                user_id: creator_id,
                user_name: self.creator_name,
                email: self.creator_email,
                image_url: self.creator_image,
            },
        }
    }
}

#[derive(sqlx::FromRow)]
struct DetailRow {
    #[sqlx(flatten)]
    contest: ContestRow,
    participant_count: i64,
    creator_name: String,
    creator_email: String,
    creator_image: String,
    winner_name: Option<String>,
    winner_email: Option<String>,
    winner_image: Option<String>,
}

impl DetailRow {
    fn into_detail(self) -> ContestDetail {
        let creator_id = UserId::from_uuid(self.contest.creator_id);
        let winner_id = self.contest.winner_id.map(UserId::from_uuid);
        let winner = match (winner_id, self.winner_name, self.winner_email) {
            (Some(user_id), Some(user_name), Some(email)) => Some(PublicProfile {
                user_id,
                user_name,
                email,
                image_url: self.winner_image.unwrap_or_default(),
            }),
            _ => None,
        };

        ContestDetail {
            creator: PublicProfile {
                user_id: creator_id,
                user_name: self.creator_name,
                email: self.creator_email,
                image_url: self.creator_image,
            },
            winner,
            participant_count: self.participant_count,
            contest: self.contest.into_contest(),
        }
    }
}

#[derive(sqlx::FromRow)]
struct GridRow {
    user_id: Uuid,
    user_name: String,
    email: String,
    image_url: String,
    registered_at: DateTime<Utc>,
    submission: Option<String>,
}

impl GridRow {
    fn into_submission(self) -> ParticipantSubmission {
        ParticipantSubmission {
            participant: PublicProfile {
                user_id: UserId::from_uuid(self.user_id),
                user_name: self.user_name,
                email: self.email,
                image_url: self.image_url,
            },
            registered_at: self.registered_at,
            submission: self.submission,
        }
    }
}

#[derive(sqlx::FromRow)]
struct StatsRow {
    entry_fee: i64,
    prize_money: i64,
    won: bool,
}

#[derive(sqlx::FromRow)]
struct RankingRow {
    user_id: Uuid,
    user_name: String,
    email: String,
    image_url: String,
    total_prize_money: i64,
    entry_count: i64,
}

impl RankingRow {
    fn into_profile(self) -> PublicProfile {
        PublicProfile {
            user_id: UserId::from_uuid(self.user_id),
            user_name: self.user_name,
            email: self.email,
            image_url: self.image_url,
        }
    }
}

#[derive(sqlx::FromRow)]
struct BestCreatorRow {
    creator_name: String,
    creator_email: String,
    creator_image: String,
    total_prize_money: i64,
    entry_count: i64,
    #[sqlx(flatten)]
    contest: ContestRow,
}

impl BestCreatorRow {
    fn into_ranking(self) -> CreatorRanking {
        let first_contest = self.contest.into_contest();
        CreatorRanking {
            creator: PublicProfile {
                user_id: first_contest.creator_id,
                user_name: self.creator_name,
                email: self.creator_email,
                image_url: self.creator_image,
            },
            total_prize_money: self.total_prize_money,
            contest_count: self.entry_count,
            first_contest,
        }
    }
}

#[derive(sqlx::FromRow)]
struct WinnerRow {
    contest_id: Uuid,
    title: String,
    image_url: String,
    prize_money: i64,
    participant_count: i64,
    winner_id: Uuid,
    winner_name: String,
    winner_email: String,
    winner_image: String,
}

impl WinnerRow {
    fn into_summary(self) -> WinnerSummary {
        WinnerSummary {
            contest_id: ContestId::from_uuid(self.contest_id),
            title: self.title,
            image_url: self.image_url,
            prize_money: self.prize_money,
            participant_count: self.participant_count,
            winner: PublicProfile {
                user_id: UserId::from_uuid(self.winner_id),
                user_name: self.winner_name,
                email: self.winner_email,
                image_url: self.winner_image,
            },
        }
    }
}
