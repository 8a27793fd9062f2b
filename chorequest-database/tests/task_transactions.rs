use sqlx::PgPool;

use chorequest_database::Database;
use chorequest_database::impls::tasks::{add_task, delete_task, set_task_done};
use chorequest_database::impls::users::{get_user, upsert_user};
use chorequest_database::model::tasks::NewTask;
use chorequest_database::model::users::NewUser;

const USER_ID: u64 = 42;
const DAY: &str = "2024-03-20";

async fn seed_user(db: &Database) -> anyhow::Result<()> {
    upsert_user(
        db,
        NewUser {
            id: USER_ID,
            name: "سارا",
            age: 9,
            avatar: "🐻",
        },
        1_710_892_800,
    )
    .await?;
    Ok(())
}

#[sqlx::test]
#[ignore = "needs DATABASE_URL pointing at a Postgres server"]
async fn concurrent_uncheck_and_delete_settle_the_balance(pool: PgPool) -> anyhow::Result<()> {
    let db = Database::new(pool);
    seed_user(&db).await?;

    for round in 0..20 {
        let task = add_task(
            &db,
            USER_ID,
            NewTask {
                title: "مرتب کردن اتاق",
                points: 10,
                task_date: DAY,
                deadline: DAY,
            },
        )
        .await?;
        set_task_done(&db, USER_ID, task.id, true).await?;

        let (unchecked, deleted) = tokio::join!(
            set_task_done(&db, USER_ID, task.id, false),
            delete_task(&db, USER_ID, task.id),
        );
        unchecked?;
        assert!(deleted?, "round {round}");

        let profile = get_user(&db, USER_ID).await?.expect("user exists");
        assert_eq!((profile.coins, profile.xp), (0, 0), "round {round}");
    }

    Ok(())
}

#[sqlx::test]
#[ignore = "needs DATABASE_URL pointing at a Postgres server"]
async fn deleting_a_done_task_takes_back_its_award(pool: PgPool) -> anyhow::Result<()> {
    let db = Database::new(pool);
    seed_user(&db).await?;

    let task = add_task(
        &db,
        USER_ID,
        NewTask {
            title: "آب دادن به گل‌ها",
            points: 15,
            task_date: DAY,
            deadline: DAY,
        },
    )
    .await?;
    let toggle = set_task_done(&db, USER_ID, task.id, true)
        .await?
        .expect("task belongs to the user");
    assert_eq!((toggle.coins_after, toggle.xp_after), (15, 30));

    assert!(delete_task(&db, USER_ID, task.id).await?);
    assert!(!delete_task(&db, USER_ID, task.id).await?);

    let profile = get_user(&db, USER_ID).await?.expect("user exists");
    assert_eq!((profile.coins, profile.xp), (0, 0));
    Ok(())
}
