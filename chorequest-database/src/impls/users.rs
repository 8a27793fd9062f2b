use anyhow::Context as _;
use sqlx::PgConnection;
use tracing::info;

use chorequest_progress::economy::BalanceDelta;

use crate::cache::{PROFILE_CACHE_TTL, invalidate_profile, profile_key};
use crate::database::Database;
use crate::model::users::{NewUser, UserProfile};

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    age: i32,
    avatar: String,
    xp: i64,
    coins: i64,
    created_at: i64,
}

impl UserRow {
    fn into_profile(self) -> anyhow::Result<UserProfile> {
        Ok(UserProfile {
            id: u64::try_from(self.id).context("user id row out of u64 range")?,
            name: self.name,
            age: u32::try_from(self.age).context("age row out of u32 range")?,
            avatar: self.avatar,
            xp: u64::try_from(self.xp).context("xp row out of u64 range")?,
            coins: u64::try_from(self.coins).context("coins row out of u64 range")?,
            created_at: u64::try_from(self.created_at).context("created_at row out of u64 range")?,
        })
    }
}

const USER_COLUMNS: &str = "id, name, age, avatar, xp, coins, created_at";

pub async fn get_user(db: &Database, user_id: u64) -> anyhow::Result<Option<UserProfile>> {
    let cache_key = profile_key(db.cache(), user_id);
    db.cache()
        .get_or_load_json(&cache_key, PROFILE_CACHE_TTL, || async {
            let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;

            let row: Option<UserRow> =
                sqlx::query_as(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
                    .bind(user_id_i64)
                    .fetch_optional(db.pool())
                    .await?;

            row.map(UserRow::into_profile).transpose()
        })
        .await
}

/// Create the user, or update name/age/avatar of an existing one.
/// Balances and the join time are never touched by onboarding.
pub async fn upsert_user(db: &Database, user: NewUser<'_>, now: u64) -> anyhow::Result<UserProfile> {
    let user_id_i64 = i64::try_from(user.id).context("user_id out of i64 range")?;
    let age_i32 = i32::try_from(user.age).context("age out of i32 range")?;
    let now_i64 = i64::try_from(now).context("created_at out of i64 range")?;

    let row: UserRow = sqlx::query_as(&format!(
        "INSERT INTO users (id, name, age, avatar, created_at)
         VALUES ($1, $2, $3, $4, $5)
         ON CONFLICT (id) DO UPDATE
            SET name = EXCLUDED.name, age = EXCLUDED.age, avatar = EXCLUDED.avatar
         RETURNING {USER_COLUMNS}"
    ))
    .bind(user_id_i64)
    .bind(user.name)
    .bind(age_i32)
    .bind(user.avatar)
    .bind(now_i64)
    .fetch_one(db.pool())
    .await?;

    invalidate_profile(db.cache(), user.id).await;

    let profile = row.into_profile()?;
    info!(user_id = profile.id, age = profile.age, "user profile saved");
    Ok(profile)
}

/// Lock the user's row for the rest of the transaction and return
/// `(coins, xp)`.
pub(crate) async fn lock_balance(
    conn: &mut PgConnection,
    user_id: u64,
) -> anyhow::Result<Option<(u64, u64)>> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;

    let row: Option<(i64, i64)> =
        sqlx::query_as("SELECT coins, xp FROM users WHERE id = $1 FOR UPDATE")
            .bind(user_id_i64)
            .fetch_optional(conn)
            .await?;

    row.map(|(coins, xp)| -> anyhow::Result<(u64, u64)> {
        Ok((
            u64::try_from(coins).context("coins row out of u64 range")?,
            u64::try_from(xp).context("xp row out of u64 range")?,
        ))
    })
    .transpose()
}

/// Apply a balance change, flooring both balances at zero, and return the
/// new `(coins, xp)`.
pub(crate) async fn apply_balance_delta(
    conn: &mut PgConnection,
    user_id: u64,
    delta: BalanceDelta,
) -> anyhow::Result<(u64, u64)> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;

    let (coins, xp): (i64, i64) = sqlx::query_as(
        "UPDATE users
         SET coins = GREATEST(coins + $2, 0), xp = GREATEST(xp + $3, 0)
         WHERE id = $1
         RETURNING coins, xp",
    )
    .bind(user_id_i64)
    .bind(delta.coins)
    .bind(delta.xp)
    .fetch_one(conn)
    .await?;

    Ok((
        u64::try_from(coins).context("coins row out of u64 range")?,
        u64::try_from(xp).context("xp row out of u64 range")?,
    ))
}
