use crate::CommandMeta;
use crate::hero::shared::require_profile;
use crate::parents::embeds::history_page;
use crate::parents::gate::ensure_parent_unlocked;
use chorequest_core::{Context, Error};
use chorequest_database::impls::redemptions::redemption_history;
use chorequest_utils::formatting::to_persian_digits;
use chorequest_utils::pagination::{page_window, paginate_embed_pages, total_pages};
use chorequest_utils::parse::parse_position;

pub const META: CommandMeta = CommandMeta {
    name: "history",
    desc: "تاریخچه‌ی همه‌ی خریدها.",
    category: "parents",
    usage: "!history [صفحه]",
};

const HISTORY_PER_PAGE: usize = 10;

#[poise::command(prefix_command, slash_command, category = "Parents")]
pub async fn history(
    ctx: Context<'_>,
    #[description = "شماره‌ی صفحه"] page: Option<String>,
) -> Result<(), Error> {
    if !ensure_parent_unlocked(ctx).await? {
        return Ok(());
    }

    let Some(profile) = require_profile(ctx).await? else {
        return Ok(());
    };

    let history = redemption_history(&ctx.data().db, profile.id).await?;
    if history.is_empty() {
        ctx.say("هنوز خریدی ثبت نشده.").await?;
        return Ok(());
    }

    let total = total_pages(history.len(), HISTORY_PER_PAGE);
    let requested = page.as_deref().and_then(parse_position).unwrap_or(1);
    if requested > total {
        ctx.say(format!(
            "صفحه‌ی {} وجود ندارد. صفحه‌ها: ۱ تا {}",
            to_persian_digits(requested),
            to_persian_digits(total)
        ))
        .await?;
        return Ok(());
    }

    let offset = ctx.data().settings.utc_offset_minutes;
    let pages = (1..=total)
        .map(|page| {
            let (start, end) = page_window(history.len(), HISTORY_PER_PAGE, page);
            history_page(&history[start..end], start + 1, offset)
        })
        .collect::<Vec<_>>();

    let footer = format!("{} خرید", to_persian_digits(history.len()));
    paginate_embed_pages(ctx, "تاریخچه‌ی خریدها 🧾", &pages, requested, Some(&footer)).await?;
    Ok(())
}
