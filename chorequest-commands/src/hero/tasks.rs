use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::hero::embeds::{invalid_date_message, task_lines, tasks_footer};
use crate::hero::shared::{require_profile, resolve_day};
use chorequest_core::{Context, Error};
use chorequest_database::impls::tasks::daily_tasks;
use chorequest_utils::embed::simple_embed;
use chorequest_utils::jalali::ToJalali;
use chorequest_utils::time::iso_date;

pub const META: CommandMeta = CommandMeta {
    name: "tasks",
    desc: "فهرست کارهای یک روز (پیش‌فرض: امروز).",
    category: "hero",
    usage: "!tasks [تاریخ]",
};

#[poise::command(prefix_command, slash_command, category = "Hero")]
pub async fn tasks(
    ctx: Context<'_>,
    #[description = "۱۴۰۳/۰۱/۱۵ یا 2024-04-03"] date: Option<String>,
) -> Result<(), Error> {
    let Some(profile) = require_profile(ctx).await? else {
        return Ok(());
    };

    let Some(day) = resolve_day(ctx, date.as_deref()) else {
        ctx.say(invalid_date_message(date.as_deref().unwrap_or_default()))
            .await?;
        return Ok(());
    };

    let tasks = daily_tasks(&ctx.data().db, profile.id, &iso_date(day)).await?;
    let title = match day.to_jalali() {
        Some(jalali) => format!("کارهای {} 📝", jalali),
        None => format!("کارهای {} 📝", day),
    };

    let embed = simple_embed(&title, task_lines(&tasks))
        .footer(serenity::CreateEmbedFooter::new(tasks_footer(&tasks)));
    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
