use crate::CommandMeta;
use crate::hero::embeds::rewards_description;
use crate::hero::shared::require_profile;
use chorequest_core::{Context, Error};
use chorequest_database::impls::rewards::rewards_for;
use chorequest_utils::embed::simple_embed;

pub const META: CommandMeta = CommandMeta {
    name: "rewards",
    desc: "فروشگاه جایزه‌ها.",
    category: "hero",
    usage: "!rewards",
};

#[poise::command(prefix_command, slash_command, category = "Hero")]
pub async fn rewards(ctx: Context<'_>) -> Result<(), Error> {
    let Some(profile) = require_profile(ctx).await? else {
        return Ok(());
    };

    let rewards = rewards_for(&ctx.data().db, profile.id).await?;
    let embed = simple_embed("فروشگاه جایزه 🎁", rewards_description(&rewards, profile.coins));
    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
