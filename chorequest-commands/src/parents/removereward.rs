use crate::CommandMeta;
use crate::hero::embeds::usage_message;
use crate::hero::shared::require_profile;
use crate::parents::embeds::parent_embed;
use crate::parents::gate::ensure_parent_unlocked;
use chorequest_core::{Context, Error};
use chorequest_database::impls::rewards::{delete_reward, reward_at_position};
use chorequest_utils::formatting::{sanitize_user_text, to_persian_digits};
use chorequest_utils::parse::parse_position;

pub const META: CommandMeta = CommandMeta {
    name: "removereward",
    desc: "حذف جایزه از فروشگاه.",
    category: "parents",
    usage: "!removereward <شماره>",
};

#[poise::command(prefix_command, slash_command, category = "Parents")]
pub async fn removereward(
    ctx: Context<'_>,
    #[description = "شماره‌ی جایزه در فروشگاه"] position: Option<String>,
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
    let Some(reward) = reward_at_position(db, profile.id, position).await? else {
        ctx.say(format!(
            "جایزه‌ی شماره‌ی {} پیدا نشد.",
            to_persian_digits(position)
        ))
        .await?;
        return Ok(());
    };

    if !delete_reward(db, profile.id, reward.id).await? {
        ctx.say("این جایزه دیگر وجود ندارد.").await?;
        return Ok(());
    }

    let embed = parent_embed(
        "جایزه حذف شد 🗑️",
        format!("{} **{}**", reward.emoji, sanitize_user_text(&reward.title)),
    );
    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
