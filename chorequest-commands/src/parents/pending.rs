use crate::CommandMeta;
use crate::hero::shared::require_profile;
use crate::parents::embeds::{parent_embed, pending_description};
use crate::parents::gate::ensure_parent_unlocked;
use chorequest_core::{Context, Error};
use chorequest_database::impls::redemptions::pending_redemptions;

pub const META: CommandMeta = CommandMeta {
    name: "pending",
    desc: "جایزه‌های خریده‌شده‌ای که هنوز تحویل نشده‌اند.",
    category: "parents",
    usage: "!pending",
};

#[poise::command(prefix_command, slash_command, category = "Parents")]
pub async fn pending(ctx: Context<'_>) -> Result<(), Error> {
    if !ensure_parent_unlocked(ctx).await? {
        return Ok(());
    }

    let Some(profile) = require_profile(ctx).await? else {
        return Ok(());
    };

    let pending = pending_redemptions(&ctx.data().db, profile.id).await?;
    let embed = parent_embed(
        "جوایز در انتظار تحویل ⏳",
        pending_description(&pending, ctx.data().settings.utc_offset_minutes),
    );
    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
