use chorequest_progress::achievements::{ACHIEVEMENTS, summarize};

use crate::CommandMeta;
use crate::hero::embeds::achievements_description;
use crate::hero::shared::require_profile;
use chorequest_core::{Context, Error};
use chorequest_utils::embed::simple_embed;

pub const META: CommandMeta = CommandMeta {
    name: "achievements",
    desc: "تالار افتخارات و نشان‌های باز شده.",
    category: "hero",
    usage: "!achievements",
};

#[poise::command(prefix_command, slash_command, category = "Hero")]
pub async fn achievements(ctx: Context<'_>) -> Result<(), Error> {
    let Some(profile) = require_profile(ctx).await? else {
        return Ok(());
    };

    let summary = summarize(ACHIEVEMENTS, profile.xp);
    let embed = simple_embed(
        "تالار افتخارات 🏆",
        achievements_description(ACHIEVEMENTS, profile.xp, &summary),
    );
    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
