use crate::CommandMeta;
use crate::hero::embeds::usage_message;
use crate::hero::shared::{require_profile, today};
use crate::parents::embeds::{parent_embed, split_date_and_title};
use crate::parents::gate::ensure_parent_unlocked;
use chorequest_core::{Context, Error};
use chorequest_database::impls::tasks::add_task;
use chorequest_database::model::tasks::NewTask;
use chorequest_utils::formatting::{format_coins, format_xp, sanitize_user_text};
use chorequest_utils::jalali::ToJalali;
use chorequest_utils::parse::parse_amount;
use chorequest_utils::time::iso_date;

pub const META: CommandMeta = CommandMeta {
    name: "addtask",
    desc: "افزودن کار جدید برای یک روز.",
    category: "parents",
    usage: "!addtask <امتیاز> [تاریخ] <عنوان>",
};

const MAX_TITLE_CHARS: usize = 80;

#[poise::command(prefix_command, slash_command, category = "Parents")]
pub async fn addtask(
    ctx: Context<'_>,
    #[description = "امتیاز (سکه)"] points: Option<String>,
    #[description = "تاریخ اختیاری و عنوان"]
    #[rest]
    rest: Option<String>,
) -> Result<(), Error> {
    if !ensure_parent_unlocked(ctx).await? {
        return Ok(());
    }

    let (Some(points), Some(rest)) = (points.as_deref().and_then(parse_amount), rest) else {
        ctx.say(usage_message(META.usage)).await?;
        return Ok(());
    };

    let (date, title) = split_date_and_title(&rest);
    if title.is_empty() || title.chars().count() > MAX_TITLE_CHARS {
        ctx.say(usage_message(META.usage)).await?;
        return Ok(());
    }

    let Some(profile) = require_profile(ctx).await? else {
        return Ok(());
    };

    let day = date.unwrap_or_else(|| today(ctx));
    let iso = iso_date(day);
    let task = add_task(
        &ctx.data().db,
        profile.id,
        NewTask {
            title,
            points,
            task_date: &iso,
            deadline: &iso,
        },
    )
    .await?;

    let award = task.award();
    let when = day.to_jalali().map_or(iso.clone(), |jalali| jalali.to_string());
    let embed = parent_embed(
        "وظیفه با موفقیت اضافه شد! ✅",
        format!(
            "**{}** برای {}\n{} • {}",
            sanitize_user_text(&task.title),
            when,
            format_coins(award.coins),
            format_xp(award.xp)
        ),
    );
    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
