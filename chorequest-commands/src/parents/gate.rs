use chorequest_core::{Context, Error};
use chorequest_utils::time::now_unix_secs;

use crate::parents::embeds::panel_locked_message;

/// Reply with the unlock hint and return false when the caller's panel is
/// closed.
pub async fn ensure_parent_unlocked(ctx: Context<'_>) -> Result<bool, Error> {
    let unlocked = ctx
        .data()
        .parent_gate
        .is_unlocked(ctx.author().id.get(), now_unix_secs());
    if !unlocked {
        ctx.send(
            poise::CreateReply::default()
                .content(panel_locked_message())
                .ephemeral(true),
        )
        .await?;
    }
    Ok(unlocked)
}
