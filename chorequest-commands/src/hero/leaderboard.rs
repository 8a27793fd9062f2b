use chorequest_progress::leaderboard::{DEFAULT_ROSTER, RealPlayer, compute_leaderboard};

use crate::CommandMeta;
use crate::hero::embeds::leaderboard_description;
use crate::hero::shared::require_profile;
use chorequest_core::{Context, Error};
use chorequest_utils::embed::simple_embed;
use chorequest_utils::time::now_unix_secs;

pub const META: CommandMeta = CommandMeta {
    name: "leaderboard",
    desc: "جدول برترین قهرمان‌ها و جایگاه تو.",
    category: "hero",
    usage: "!leaderboard",
};

#[poise::command(prefix_command, slash_command, category = "Hero")]
pub async fn leaderboard(ctx: Context<'_>) -> Result<(), Error> {
    let Some(profile) = require_profile(ctx).await? else {
        return Ok(());
    };

    let real = RealPlayer {
        name: profile.name,
        xp: profile.xp,
        avatar: profile.avatar,
        account_created_at: profile.created_at,
    };
    let board = compute_leaderboard(&real, DEFAULT_ROSTER, now_unix_secs());

    let embed = simple_embed("برترین قهرمانان 🌍", leaderboard_description(&board));
    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
