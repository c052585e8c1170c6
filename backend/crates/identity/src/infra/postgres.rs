//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    credits::Credits, email::Email, user_id::UserId, user_role::UserRole,
};
use crate::error::IdentityResult;

/// PostgreSQL-backed identity repository
#[derive(Clone)]
pub struct PgIdentityRepository {
    pool: PgPool,
}

impl PgIdentityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgIdentityRepository {
    async fn create(&self, user: &User) -> IdentityResult<bool> {
        let inserted = sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                user_name,
                email,
                image_url,
                user_role,
                credits,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(&user.user_name)
        .bind(user.email.as_str())
        .bind(&user.image_url)
        .bind(user.role.id())
        .bind(user.credits.amount())
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(inserted == 1)
    }

    async fn find_by_id(&self, user_id: &UserId) -> IdentityResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id, user_name, email, image_url,
                user_role, credits, created_at, updated_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn find_by_email(&self, email: &Email) -> IdentityResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id, user_name, email, image_url,
                user_role, credits, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn update(&self, user: &User) -> IdentityResult<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET user_name = $2,
                image_url = $3,
                user_role = $4,
                updated_at = $5
            WHERE user_id = $1
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(&user.user_name)
        .bind(&user.image_url)
        .bind(user.role.id())
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn grant_credits(&self, user_id: &UserId, amount: i64) -> IdentityResult<i64> {
        let new_balance = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE users
            SET credits = credits + $2, updated_at = NOW()
            WHERE user_id = $1
            RETURNING credits
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(amount)
        .fetch_one(&self.pool)
        .await?;

        Ok(new_balance)
    }

    async fn list(&self, offset: i64, limit: i64) -> IdentityResult<(Vec<User>, i64)> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id, user_name, email, image_url,
                user_role, credits, created_at, updated_at
            FROM users
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok((rows.into_iter().map(UserRow::into_user).collect(), total))
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    user_name: String,
    email: String,
    image_url: String,
    user_role: i16,
    credits: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            user_id: UserId::from_uuid(self.user_id),
            user_name: self.user_name,
            email: Email::from_db(self.email),
            image_url: self.image_url,
            role: UserRole::from_id(self.user_role),
            credits: Credits::from_db(self.credits),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
