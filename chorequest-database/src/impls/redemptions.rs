use anyhow::Context as _;
use tracing::info;

use chorequest_progress::economy::{Affordability, BalanceDelta, check_affordability};

use crate::cache::invalidate_profile;
use crate::database::Database;
use crate::impls::rewards::RewardRow;
use crate::impls::users::{apply_balance_delta, lock_balance};
use crate::model::redemptions::{PurchaseOutcome, Redemption};

#[derive(sqlx::FromRow)]
struct RedemptionRow {
    id: i64,
    reward_title: String,
    reward_emoji: String,
    cost: i64,
    is_fulfilled: bool,
    created_at: i64,
    fulfilled_at: Option<i64>,
}

impl RedemptionRow {
    fn into_redemption(self) -> anyhow::Result<Redemption> {
        Ok(Redemption {
            id: self.id,
            reward_title: self.reward_title,
            reward_emoji: self.reward_emoji,
            cost: u64::try_from(self.cost).context("cost row out of u64 range")?,
            is_fulfilled: self.is_fulfilled,
            created_at: u64::try_from(self.created_at).context("created_at row out of u64 range")?,
            fulfilled_at: self
                .fulfilled_at
                .map(u64::try_from)
                .transpose()
                .context("fulfilled_at row out of u64 range")?,
        })
    }
}

const REDEMPTION_COLUMNS: &str =
    "id, reward_title, reward_emoji, cost, is_fulfilled, created_at, fulfilled_at";

/// Buy a reward: check the balance, deduct the cost and record the
/// redemption in one transaction.
pub async fn purchase_reward(
    db: &Database,
    user_id: u64,
    reward_id: i64,
    now: u64,
) -> anyhow::Result<PurchaseOutcome> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;
    let now_i64 = i64::try_from(now).context("created_at out of i64 range")?;

    let mut tx = db.begin().await?;

    let Some((coins, _xp)) = lock_balance(&mut tx, user_id).await? else {
        return Ok(PurchaseOutcome::UserNotFound);
    };

    let reward_row: Option<RewardRow> = sqlx::query_as(
        "SELECT id, title, cost, emoji FROM rewards WHERE id = $1 AND user_id = $2",
    )
    .bind(reward_id)
    .bind(user_id_i64)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(reward) = reward_row.map(RewardRow::into_reward).transpose()? else {
        return Ok(PurchaseOutcome::RewardNotFound);
    };

    if let Affordability::Short { missing } = check_affordability(coins, reward.cost) {
        info!(user_id, reward_id, coins, missing, "purchase refused: not enough coins");
        return Ok(PurchaseOutcome::NotEnoughCoins {
            reward,
            coins,
            missing,
        });
    }

    let cost_i64 = i64::try_from(reward.cost).context("cost out of i64 range")?;
    let (coins_left, _) =
        apply_balance_delta(&mut tx, user_id, BalanceDelta { coins: -cost_i64, xp: 0 }).await?;

    let row: RedemptionRow = sqlx::query_as(&format!(
        "INSERT INTO redemptions (user_id, reward_title, reward_emoji, cost, created_at)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING {REDEMPTION_COLUMNS}"
    ))
    .bind(user_id_i64)
    .bind(&reward.title)
    .bind(&reward.emoji)
    .bind(cost_i64)
    .bind(now_i64)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    invalidate_profile(db.cache(), user_id).await;

    let redemption = row.into_redemption()?;
    info!(user_id, reward_id, redemption_id = redemption.id, coins_left, "reward purchased");

    Ok(PurchaseOutcome::Purchased {
        redemption,
        coins_left,
    })
}

/// Unfulfilled purchases, newest first.
pub async fn pending_redemptions(db: &Database, user_id: u64) -> anyhow::Result<Vec<Redemption>> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;

    let rows: Vec<RedemptionRow> = sqlx::query_as(&format!(
        "SELECT {REDEMPTION_COLUMNS}
         FROM redemptions
         WHERE user_id = $1 AND is_fulfilled = FALSE
         ORDER BY created_at DESC, id DESC"
    ))
    .bind(user_id_i64)
    .fetch_all(db.pool())
    .await?;

    rows.into_iter().map(RedemptionRow::into_redemption).collect()
}

/// Every purchase, newest first.
pub async fn redemption_history(db: &Database, user_id: u64) -> anyhow::Result<Vec<Redemption>> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;

    let rows: Vec<RedemptionRow> = sqlx::query_as(&format!(
        "SELECT {REDEMPTION_COLUMNS}
         FROM redemptions
         WHERE user_id = $1
         ORDER BY created_at DESC, id DESC"
    ))
    .bind(user_id_i64)
    .fetch_all(db.pool())
    .await?;

    rows.into_iter().map(RedemptionRow::into_redemption).collect()
}

/// Mark a pending purchase as handed over. Returns false when it does not
/// exist, belongs to someone else, or was already fulfilled.
pub async fn fulfill_redemption(
    db: &Database,
    user_id: u64,
    redemption_id: i64,
    now: u64,
) -> anyhow::Result<bool> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;
    let now_i64 = i64::try_from(now).context("fulfilled_at out of i64 range")?;

    let updated = sqlx::query(
        "UPDATE redemptions
         SET is_fulfilled = TRUE, fulfilled_at = $3
         WHERE id = $1 AND user_id = $2 AND is_fulfilled = FALSE",
    )
    .bind(redemption_id)
    .bind(user_id_i64)
    .bind(now_i64)
    .execute(db.pool())
    .await?
    .rows_affected();

    if updated > 0 {
        info!(user_id, redemption_id, "redemption fulfilled");
    }

    Ok(updated > 0)
}
