use crate::CommandMeta;
use crate::hero::embeds::profile_description;
use crate::hero::shared::require_profile;
use chorequest_core::{Context, Error};
use chorequest_database::impls::redemptions::pending_redemptions;
use chorequest_progress::calculate_level;
use chorequest_utils::embed::simple_embed;

pub const META: CommandMeta = CommandMeta {
    name: "profile",
    desc: "کارت سطح، سکه و تجربه‌ی تو.",
    category: "hero",
    usage: "!profile",
};

#[poise::command(prefix_command, slash_command, category = "Hero")]
pub async fn profile(ctx: Context<'_>) -> Result<(), Error> {
    let Some(profile) = require_profile(ctx).await? else {
        return Ok(());
    };

    let level = calculate_level(profile.xp);
    let pending = pending_redemptions(&ctx.data().db, profile.id).await?;

    let embed = simple_embed("پروفایل قهرمان", profile_description(&profile, &level, pending.len()));
    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
