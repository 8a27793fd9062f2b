use std::time::Duration;

use poise::serenity_prelude as serenity;

pub const CONFIRMATION_TIMEOUT_SECS: u64 = 60;

pub enum ConfirmationResult {
    Confirmed(serenity::ComponentInteraction),
    Declined(serenity::ComponentInteraction),
    TimedOut(serenity::Message),
}

/// Labels for a yes/no prompt.
#[derive(Clone, Copy, Debug)]
pub struct ConfirmationLabels<'a> {
    pub confirm: &'a str,
    pub decline: &'a str,
}

impl Default for ConfirmationLabels<'_> {
    fn default() -> Self {
        Self {
            confirm: "آره",
            decline: "نه",
        }
    }
}

/// Ask the invoking user to confirm; only their button presses count.
pub async fn prompt_confirm_decline<U, E>(
    ctx: poise::Context<'_, U, E>,
    embed: serenity::CreateEmbed,
    labels: ConfirmationLabels<'_>,
) -> Result<ConfirmationResult, serenity::Error>
where
    U: Send + Sync,
    E: Send + Sync,
{
    let ctx_id = ctx.id();
    let confirm_id = format!("{}_confirm", ctx_id);
    let decline_id = format!("{}_decline", ctx_id);

    let reply = ctx
        .send(
            poise::CreateReply::default()
                .embed(embed)
                .components(vec![serenity::CreateActionRow::Buttons(vec![
                    serenity::CreateButton::new(&confirm_id)
                        .label(labels.confirm)
                        .style(serenity::ButtonStyle::Success),
                    serenity::CreateButton::new(&decline_id)
                        .label(labels.decline)
                        .style(serenity::ButtonStyle::Secondary),
                ])]),
        )
        .await?;

    let message = reply.message().await?.into_owned();
    let interaction = message
        .await_component_interaction(ctx)
        .author_id(ctx.author().id)
        .timeout(Duration::from_secs(CONFIRMATION_TIMEOUT_SECS))
        .await;

    let Some(interaction) = interaction else {
        return Ok(ConfirmationResult::TimedOut(message));
    };

    if interaction.data.custom_id == decline_id {
        return Ok(ConfirmationResult::Declined(interaction));
    }

    Ok(ConfirmationResult::Confirmed(interaction))
}

/// Replace the prompt with a status line. Returns the interaction to keep
/// answering on when the user confirmed.
pub async fn resolve_confirmation_result<U, E>(
    ctx: poise::Context<'_, U, E>,
    confirmation: ConfirmationResult,
    timed_out_text: &str,
    declined_text: &str,
) -> Result<Option<serenity::ComponentInteraction>, serenity::Error>
where
    U: Send + Sync,
    E: Send + Sync,
{
    match confirmation {
        ConfirmationResult::TimedOut(message) => {
            message
                .channel_id
                .edit_message(
                    ctx.http(),
                    message.id,
                    serenity::EditMessage::new()
                        .content(timed_out_text)
                        .embeds(vec![])
                        .components(vec![]),
                )
                .await?;
            Ok(None)
        }
        ConfirmationResult::Declined(interaction) => {
            interaction
                .create_response(
                    ctx.http(),
                    serenity::CreateInteractionResponse::UpdateMessage(
                        serenity::CreateInteractionResponseMessage::new()
                            .content(declined_text)
                            .embeds(vec![])
                            .components(vec![]),
                    ),
                )
                .await?;
            Ok(None)
        }
        ConfirmationResult::Confirmed(interaction) => {
            interaction
                .create_response(ctx.http(), serenity::CreateInteractionResponse::Acknowledge)
                .await?;
            Ok(Some(interaction))
        }
    }
}
