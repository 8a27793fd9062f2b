use anyhow::Context as _;
use sqlx::PgConnection;

use crate::database::Database;
use crate::model::daily_scores::DailyScore;

/// Add `delta` points to a day's total, flooring at zero.
pub(crate) async fn add_day_points(
    conn: &mut PgConnection,
    user_id: u64,
    date: &str,
    delta: i64,
) -> anyhow::Result<()> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;

    sqlx::query(
        "INSERT INTO daily_scores (user_id, score_date, total_points)
         VALUES ($1, $2, GREATEST($3, 0))
         ON CONFLICT (user_id, score_date) DO UPDATE
            SET total_points = GREATEST(daily_scores.total_points + $3, 0)",
    )
    .bind(user_id_i64)
    .bind(date)
    .bind(delta)
    .execute(conn)
    .await?;

    Ok(())
}

/// Day totals in the inclusive `[start, end]` range of ISO dates.
pub async fn scores_between(
    db: &Database,
    user_id: u64,
    start: &str,
    end: &str,
) -> anyhow::Result<Vec<DailyScore>> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;

    let rows: Vec<(String, i64)> = sqlx::query_as(
        "SELECT score_date, total_points
         FROM daily_scores
         WHERE user_id = $1 AND score_date >= $2 AND score_date <= $3
         ORDER BY score_date ASC",
    )
    .bind(user_id_i64)
    .bind(start)
    .bind(end)
    .fetch_all(db.pool())
    .await?;

    rows.into_iter()
        .map(|(date, total_points)| {
            Ok(DailyScore {
                date,
                total_points: u64::try_from(total_points)
                    .context("total_points row out of u64 range")?,
            })
        })
        .collect()
}
