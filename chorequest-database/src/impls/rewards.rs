use anyhow::Context as _;
use tracing::info;

use crate::cache::{REWARDS_CACHE_TTL, invalidate_rewards, rewards_key};
use crate::database::Database;
use crate::model::rewards::{NewReward, Reward};

#[derive(sqlx::FromRow)]
pub(crate) struct RewardRow {
    id: i64,
    title: String,
    cost: i64,
    emoji: String,
}

impl RewardRow {
    pub(crate) fn into_reward(self) -> anyhow::Result<Reward> {
        Ok(Reward {
            id: self.id,
            title: self.title,
            cost: u64::try_from(self.cost).context("cost row out of u64 range")?,
            emoji: self.emoji,
        })
    }
}

/// The user's reward shop, seeded from the default catalogue on first read.
/// Ordered cheapest first, which is the numbering shown to users.
pub async fn rewards_for(db: &Database, user_id: u64) -> anyhow::Result<Vec<Reward>> {
    let cache_key = rewards_key(db.cache(), user_id);
    db.cache()
        .get_or_load_json(&cache_key, REWARDS_CACHE_TTL, || async {
            let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;

            let rows: Vec<RewardRow> = sqlx::query_as(
                "SELECT id, title, cost, emoji
                 FROM get_or_create_rewards($1)
                 ORDER BY cost ASC, id ASC",
            )
            .bind(user_id_i64)
            .fetch_all(db.pool())
            .await?;

            rows.into_iter().map(RewardRow::into_reward).collect()
        })
        .await
}

pub async fn reward_at_position(
    db: &Database,
    user_id: u64,
    position: usize,
) -> anyhow::Result<Option<Reward>> {
    let rewards = rewards_for(db, user_id).await?;
    Ok(position
        .checked_sub(1)
        .and_then(|index| rewards.into_iter().nth(index)))
}

pub async fn add_reward(db: &Database, user_id: u64, reward: NewReward<'_>) -> anyhow::Result<Reward> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;
    let cost_i64 = i64::try_from(reward.cost).context("cost out of i64 range")?;

    // Seed first so a custom reward never suppresses the defaults.
    rewards_for(db, user_id).await?;

    let row: RewardRow = sqlx::query_as(
        "INSERT INTO rewards (user_id, title, cost, emoji)
         VALUES ($1, $2, $3, $4)
         RETURNING id, title, cost, emoji",
    )
    .bind(user_id_i64)
    .bind(reward.title)
    .bind(cost_i64)
    .bind(reward.emoji)
    .fetch_one(db.pool())
    .await?;

    invalidate_rewards(db.cache(), user_id).await;

    let reward = row.into_reward()?;
    info!(user_id, reward_id = reward.id, cost = reward.cost, "reward added");
    Ok(reward)
}

pub async fn delete_reward(db: &Database, user_id: u64, reward_id: i64) -> anyhow::Result<bool> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;

    let deleted = sqlx::query("DELETE FROM rewards WHERE id = $1 AND user_id = $2")
        .bind(reward_id)
        .bind(user_id_i64)
        .execute(db.pool())
        .await?
        .rows_affected();

    invalidate_rewards(db.cache(), user_id).await;
    Ok(deleted > 0)
}
