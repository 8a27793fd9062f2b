use crate::CommandMeta;
use crate::hero::embeds::{invalid_date_message, usage_message};
use crate::hero::shared::{require_profile, resolve_day};
use crate::parents::embeds::parent_embed;
use crate::parents::gate::ensure_parent_unlocked;
use chorequest_core::{Context, Error};
use chorequest_database::impls::tasks::{delete_task, task_at_position};
use chorequest_utils::formatting::{sanitize_user_text, to_persian_digits};
use chorequest_utils::parse::parse_position;
use chorequest_utils::time::iso_date;

pub const META: CommandMeta = CommandMeta {
    name: "removetask",
    desc: "حذف یک کار از فهرست یک روز.",
    category: "parents",
    usage: "!removetask <شماره> [تاریخ]",
};

#[poise::command(prefix_command, slash_command, category = "Parents")]
pub async fn removetask(
    ctx: Context<'_>,
    #[description = "شماره‌ی کار در فهرست"] position: Option<String>,
    #[description = "۱۴۰۳/۰۱/۱۵ یا 2024-04-03"] date: Option<String>,
) -> Result<(), Error> {
    if !ensure_parent_unlocked(ctx).await? {
        return Ok(());
    }

    let Some(position) = position.as_deref().and_then(parse_position) else {
        ctx.say(usage_message(META.usage)).await?;
        return Ok(());
    };

    let Some(day) = resolve_day(ctx, date.as_deref()) else {
        ctx.say(invalid_date_message(date.as_deref().unwrap_or_default()))
            .await?;
        return Ok(());
    };

    let Some(profile) = require_profile(ctx).await? else {
        return Ok(());
    };

    let db = &ctx.data().db;
    let Some(task) = task_at_position(db, profile.id, &iso_date(day), position).await? else {
        ctx.say(format!(
            "کار شماره‌ی {} پیدا نشد.",
            to_persian_digits(position)
        ))
        .await?;
        return Ok(());
    };

    if !delete_task(db, profile.id, task.id).await? {
        ctx.say("این کار دیگر وجود ندارد.").await?;
        return Ok(());
    }

    let note = if task.is_done {
        "\nسکه و تجربه‌ی این کار پس گرفته شد."
    } else {
        ""
    };
    let embed = parent_embed(
        "کار حذف شد 🗑️",
        format!("**{}**{}", sanitize_user_text(&task.title), note),
    );
    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
