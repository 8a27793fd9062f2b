use anyhow::Context as _;
use sqlx::PgConnection;
use tracing::info;

use chorequest_progress::economy::BalanceDelta;

use crate::cache::invalidate_profile;
use crate::database::Database;
use crate::impls::daily_scores::add_day_points;
use crate::impls::users::{apply_balance_delta, lock_balance};
use crate::model::tasks::{NewTask, Task, TaskToggle};

#[derive(sqlx::FromRow)]
struct TaskRow {
    id: i64,
    title: String,
    points: i64,
    task_date: String,
    deadline: String,
    is_done: bool,
}

impl TaskRow {
    fn into_task(self) -> anyhow::Result<Task> {
        Ok(Task {
            id: self.id,
            title: self.title,
            points: u64::try_from(self.points).context("points row out of u64 range")?,
            task_date: self.task_date,
            deadline: self.deadline,
            is_done: self.is_done,
        })
    }
}

fn into_tasks(rows: Vec<TaskRow>) -> anyhow::Result<Vec<Task>> {
    rows.into_iter().map(TaskRow::into_task).collect()
}

/// Tasks for one day, seeded from the default template on first read.
/// Ordered by creation, which is the numbering shown to users.
pub async fn daily_tasks(db: &Database, user_id: u64, date: &str) -> anyhow::Result<Vec<Task>> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;

    let rows: Vec<TaskRow> = sqlx::query_as(
        "SELECT id, title, points, task_date, deadline, is_done
         FROM get_or_create_daily_tasks($1, $2)
         ORDER BY id ASC",
    )
    .bind(user_id_i64)
    .bind(date)
    .fetch_all(db.pool())
    .await?;

    into_tasks(rows)
}

/// Resolve a 1-based position in a day's list to the task.
pub async fn task_at_position(
    db: &Database,
    user_id: u64,
    date: &str,
    position: usize,
) -> anyhow::Result<Option<Task>> {
    let tasks = daily_tasks(db, user_id, date).await?;
    Ok(position
        .checked_sub(1)
        .and_then(|index| tasks.into_iter().nth(index)))
}

pub async fn add_task(db: &Database, user_id: u64, task: NewTask<'_>) -> anyhow::Result<Task> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;
    let points_i64 = i64::try_from(task.points).context("points out of i64 range")?;

    // Seed first so a custom task never suppresses the day's defaults.
    daily_tasks(db, user_id, task.task_date).await?;

    let row: TaskRow = sqlx::query_as(
        "INSERT INTO tasks (user_id, title, points, task_date, deadline)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id, title, points, task_date, deadline, is_done",
    )
    .bind(user_id_i64)
    .bind(task.title)
    .bind(points_i64)
    .bind(task.task_date)
    .bind(task.deadline)
    .fetch_one(db.pool())
    .await?;

    let task = row.into_task()?;
    info!(user_id, task_id = task.id, date = %task.task_date, points = task.points, "task added");
    Ok(task)
}

async fn lock_task(
    conn: &mut PgConnection,
    user_id: u64,
    task_id: i64,
) -> anyhow::Result<Option<Task>> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;

    let row: Option<TaskRow> = sqlx::query_as(
        "SELECT id, title, points, task_date, deadline, is_done
         FROM tasks
         WHERE id = $1 AND user_id = $2
         FOR UPDATE",
    )
    .bind(task_id)
    .bind(user_id_i64)
    .fetch_optional(conn)
    .await?;

    row.map(TaskRow::into_task).transpose()
}

/// Row-lock the user's balance, then the task. Every transaction that writes
/// both tables takes the locks in this order.
async fn lock_user_and_task(
    conn: &mut PgConnection,
    user_id: u64,
    task_id: i64,
) -> anyhow::Result<Option<((u64, u64), Task)>> {
    let Some(balance) = lock_balance(conn, user_id).await? else {
        return Ok(None);
    };
    let task = lock_task(conn, user_id, task_id).await?;
    Ok(task.map(|task| (balance, task)))
}

/// Set a task's done flag. Completing credits coins, XP and the day's score;
/// un-completing takes them back. Returns `None` when the task does not
/// belong to the user.
pub async fn set_task_done(
    db: &Database,
    user_id: u64,
    task_id: i64,
    done: bool,
) -> anyhow::Result<Option<TaskToggle>> {
    let mut tx = db.begin().await?;

    let Some(((coins_before, xp_before), mut task)) =
        lock_user_and_task(&mut tx, user_id, task_id).await?
    else {
        return Ok(None);
    };

    let delta = BalanceDelta::for_toggle(task.points, task.is_done, done);
    let (coins_after, xp_after) = if task.is_done == done {
        (coins_before, xp_before)
    } else {
        sqlx::query("UPDATE tasks SET is_done = $2 WHERE id = $1")
            .bind(task_id)
            .bind(done)
            .execute(&mut *tx)
            .await?;

        add_day_points(&mut tx, user_id, &task.task_date, delta.coins).await?;
        apply_balance_delta(&mut tx, user_id, delta).await?
    };

    tx.commit().await?;
    invalidate_profile(db.cache(), user_id).await;

    task.is_done = done;
    info!(user_id, task_id, done, xp_before, xp_after, "task status updated");

    Ok(Some(TaskToggle {
        task,
        xp_before,
        xp_after,
        coins_after,
    }))
}

/// Flip a task's done flag.
pub async fn toggle_task(
    db: &Database,
    user_id: u64,
    task: &Task,
) -> anyhow::Result<Option<TaskToggle>> {
    set_task_done(db, user_id, task.id, !task.is_done).await
}

/// Delete a task. A completed task's award is taken back first.
pub async fn delete_task(db: &Database, user_id: u64, task_id: i64) -> anyhow::Result<bool> {
    let mut tx = db.begin().await?;

    let Some((_, task)) = lock_user_and_task(&mut tx, user_id, task_id).await? else {
        return Ok(false);
    };

    if task.is_done {
        let delta = BalanceDelta::for_toggle(task.points, true, false);
        add_day_points(&mut tx, user_id, &task.task_date, delta.coins).await?;
        apply_balance_delta(&mut tx, user_id, delta).await?;
    }

    sqlx::query("DELETE FROM tasks WHERE id = $1")
        .bind(task_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    if task.is_done {
        invalidate_profile(db.cache(), user_id).await;
    }

    info!(user_id, task_id, was_done = task.is_done, "task deleted");
    Ok(true)
}
