use chorequest_core::{Context, Error};
use chorequest_utils::formatting::sanitize_user_text;

use crate::{COMMANDS, CommandMeta};

pub const META: CommandMeta = CommandMeta {
    name: "usage",
    desc: "طرز استفاده‌ی یک دستور.",
    category: "utility",
    usage: "!usage <دستور>",
};

#[poise::command(prefix_command, slash_command, category = "Utility")]
pub async fn usage(
    ctx: Context<'_>,
    #[description = "نام دستور"] command: Option<String>,
) -> Result<(), Error> {
    let Some(raw_name) = command.as_deref() else {
        ctx.say(format!("طرز استفاده: `{}`", META.usage)).await?;
        return Ok(());
    };

    let lookup = raw_name.trim().trim_start_matches('!').to_ascii_lowercase();

    let Some(command) = COMMANDS.iter().find(|command| command.name == lookup) else {
        ctx.say(format!("دستور ناشناخته: `{}`", sanitize_user_text(&lookup)))
            .await?;
        return Ok(());
    };

    ctx.say(format!("طرز استفاده: `{}`\n{}", command.usage, command.desc))
        .await?;
    Ok(())
}
