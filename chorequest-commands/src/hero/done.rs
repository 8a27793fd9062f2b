use chorequest_progress::achievements::{ACHIEVEMENTS, newly_unlocked};
use chorequest_progress::calculate_level;

use crate::CommandMeta;
use crate::hero::embeds::{invalid_date_message, task_toggle_message, usage_message};
use crate::hero::shared::{require_profile, resolve_day};
use chorequest_core::{Context, Error};
use chorequest_database::impls::tasks::{task_at_position, toggle_task};
use chorequest_utils::embed::{SUCCESS_EMBED_COLOR, simple_embed};
use chorequest_utils::formatting::to_persian_digits;
use chorequest_utils::parse::parse_position;
use chorequest_utils::time::iso_date;

pub const META: CommandMeta = CommandMeta {
    name: "done",
    desc: "علامت زدن یا برداشتن علامت یک کار.",
    category: "hero",
    usage: "!done <شماره> [تاریخ]",
};

#[poise::command(prefix_command, slash_command, category = "Hero")]
pub async fn done(
    ctx: Context<'_>,
    #[description = "شماره‌ی کار در فهرست"] position: Option<String>,
    #[description = "۱۴۰۳/۰۱/۱۵ یا 2024-04-03"] date: Option<String>,
) -> Result<(), Error> {
    let Some(position) = position.as_deref().and_then(parse_position) else {
        ctx.say(usage_message(META.usage)).await?;
        return Ok(());
    };

    let Some(profile) = require_profile(ctx).await? else {
        return Ok(());
    };

    let Some(day) = resolve_day(ctx, date.as_deref()) else {
        ctx.say(invalid_date_message(date.as_deref().unwrap_or_default()))
            .await?;
        return Ok(());
    };

    let db = &ctx.data().db;
    let Some(task) = task_at_position(db, profile.id, &iso_date(day), position).await? else {
        ctx.say(format!(
            "کار شماره‌ی {} پیدا نشد. `!tasks` را ببین.",
            to_persian_digits(position)
        ))
        .await?;
        return Ok(());
    };

    let Some(toggle) = toggle_task(db, profile.id, &task).await? else {
        ctx.say("این کار دیگر وجود ندارد.").await?;
        return Ok(());
    };

    let before = calculate_level(toggle.xp_before);
    let after = calculate_level(toggle.xp_after);
    let unlocked = newly_unlocked(ACHIEVEMENTS, toggle.xp_before, toggle.xp_after);

    let mut embed = simple_embed(
        "وضعیت کار",
        task_toggle_message(&toggle.task, &before, &after, &unlocked),
    );
    if toggle.task.is_done {
        embed = embed.color(SUCCESS_EMBED_COLOR);
    }
    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
