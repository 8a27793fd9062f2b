use crate::CommandMeta;
use chorequest_core::{Context, Error};
use chorequest_utils::time::now_unix_secs;

pub const META: CommandMeta = CommandMeta {
    name: "lock",
    desc: "بستن بخش والدین.",
    category: "parents",
    usage: "!lock",
};

#[poise::command(prefix_command, slash_command, category = "Parents")]
pub async fn lock(ctx: Context<'_>) -> Result<(), Error> {
    let was_open = ctx
        .data()
        .parent_gate
        .lock(ctx.author().id.get(), now_unix_secs());

    ctx.say(if was_open {
        "بخش والدین قفل شد 🔒"
    } else {
        "بخش والدین از قبل قفل بود."
    })
    .await?;
    Ok(())
}
