use crate::CommandMeta;
use crate::hero::embeds::usage_message;
use crate::hero::shared::require_profile;
use crate::parents::embeds::parent_embed;
use crate::parents::gate::ensure_parent_unlocked;
use chorequest_core::{Context, Error};
use chorequest_database::impls::redemptions::{fulfill_redemption, pending_redemptions};
use chorequest_utils::formatting::{sanitize_user_text, to_persian_digits};
use chorequest_utils::parse::parse_position;
use chorequest_utils::time::now_unix_secs;

pub const META: CommandMeta = CommandMeta {
    name: "fulfill",
    desc: "ثبت تحویل یک جایزه به کودک.",
    category: "parents",
    usage: "!fulfill <شماره>",
};

#[poise::command(prefix_command, slash_command, category = "Parents")]
pub async fn fulfill(
    ctx: Context<'_>,
    #[description = "شماره در فهرست !pending"] position: Option<String>,
) -> Result<(), Error> {
    if !ensure_parent_unlocked(ctx).await? {
        return Ok(());
    }

    let Some(position) = position.as_deref().and_then(parse_position) else {
        ctx.say(usage_message(META.usage)).await?;
        return Ok(());
    };

    let Some(profile) = require_profile(ctx).await? else {
        return Ok(());
    };

    let db = &ctx.data().db;
    let pending = pending_redemptions(db, profile.id).await?;
    let Some(redemption) = position.checked_sub(1).and_then(|index| pending.get(index)) else {
        ctx.say(format!(
            "مورد شماره‌ی {} در فهرست `!pending` نیست.",
            to_persian_digits(position)
        ))
        .await?;
        return Ok(());
    };

    if !fulfill_redemption(db, profile.id, redemption.id, now_unix_secs()).await? {
        ctx.say("این جایزه قبلا تحویل داده شده.").await?;
        return Ok(());
    }

    let embed = parent_embed(
        "تحویل ثبت شد ✅",
        format!(
            "{} **{}** به قهرمان تحویل داده شد.",
            redemption.reward_emoji,
            sanitize_user_text(&redemption.reward_title)
        ),
    );
    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
