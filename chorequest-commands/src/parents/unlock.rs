use tracing::debug;

use crate::CommandMeta;
use crate::hero::embeds::usage_message;
use crate::parents::embeds::parent_embed;
use chorequest_core::{Context, Error, UnlockOutcome};
use chorequest_utils::formatting::to_persian_digits;
use chorequest_utils::parse::parse_pin;
use chorequest_utils::time::now_unix_secs;

pub const META: CommandMeta = CommandMeta {
    name: "unlock",
    desc: "باز کردن بخش والدین با رمز ۴ رقمی.",
    category: "parents",
    usage: "!unlock <رمز>",
};

#[poise::command(prefix_command, slash_command, category = "Parents")]
pub async fn unlock(
    ctx: Context<'_>,
    #[description = "رمز ۴ رقمی"] pin: Option<String>,
) -> Result<(), Error> {
    // Keep the PIN out of the channel history.
    if let poise::Context::Prefix(prefix) = ctx
        && let Err(err) = prefix.msg.delete(ctx.http()).await
    {
        debug!(?err, "could not delete unlock message");
    }

    let Some(pin) = pin.as_deref().and_then(parse_pin) else {
        ctx.send(
            poise::CreateReply::default()
                .content(usage_message(META.usage))
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    };

    let gate = &ctx.data().parent_gate;
    let reply = match gate.unlock(ctx.author().id.get(), &pin, now_unix_secs()) {
        UnlockOutcome::Unlocked { .. } => parent_embed(
            "بخش والدین باز شد 🛡️",
            format!(
                "تا {} دقیقه‌ی دیگر می‌توانی از دستورهای والدین استفاده کنی.\nبرای بستن: `!lock`",
                to_persian_digits(gate.unlock_for().as_secs() / 60)
            ),
        ),
        UnlockOutcome::WrongPin => parent_embed("رمز اشتباه است!", "دوباره امتحان کن."),
    };

    ctx.send(poise::CreateReply::default().embed(reply).ephemeral(true))
        .await?;
    Ok(())
}
