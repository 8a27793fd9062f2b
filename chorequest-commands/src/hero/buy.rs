use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::hero::embeds::{purchase_prompt, usage_message};
use crate::hero::shared::require_profile;
use chorequest_core::{Context, Error};
use chorequest_database::impls::redemptions::purchase_reward;
use chorequest_database::impls::rewards::reward_at_position;
use chorequest_database::model::redemptions::PurchaseOutcome;
use chorequest_progress::economy::{Affordability, check_affordability};
use chorequest_utils::confirmation::{
    ConfirmationLabels, prompt_confirm_decline, resolve_confirmation_result,
};
use chorequest_utils::embed::{SUCCESS_EMBED_COLOR, simple_embed};
use chorequest_utils::formatting::{format_coins, sanitize_user_text, to_persian_digits};
use chorequest_utils::parse::parse_position;
use chorequest_utils::time::now_unix_secs;

pub const META: CommandMeta = CommandMeta {
    name: "buy",
    desc: "خرید یک جایزه با سکه‌ها.",
    category: "hero",
    usage: "!buy <شماره>",
};

#[poise::command(prefix_command, slash_command, category = "Hero")]
pub async fn buy(
    ctx: Context<'_>,
    #[description = "شماره‌ی جایزه در فروشگاه"] position: Option<String>,
) -> Result<(), Error> {
    let Some(position) = position.as_deref().and_then(parse_position) else {
        ctx.say(usage_message(META.usage)).await?;
        return Ok(());
    };

    let Some(profile) = require_profile(ctx).await? else {
        return Ok(());
    };

    let db = &ctx.data().db;
    let Some(reward) = reward_at_position(db, profile.id, position).await? else {
        ctx.say(format!(
            "جایزه‌ی شماره‌ی {} پیدا نشد. `!rewards` را ببین.",
            to_persian_digits(position)
        ))
        .await?;
        return Ok(());
    };

    if let Affordability::Short { missing } = check_affordability(profile.coins, reward.cost) {
        ctx.say(format!(
            "سکه‌هات کافی نیست! هنوز {} لازم داری 💪",
            format_coins(missing)
        ))
        .await?;
        return Ok(());
    }

    let confirmation = prompt_confirm_decline(
        ctx,
        simple_embed("خرید جایزه", purchase_prompt(&reward, profile.coins)),
        ConfirmationLabels {
            confirm: "آره، بخرش! 🛍️",
            decline: "نه",
        },
    )
    .await?;

    let Some(interaction) =
        resolve_confirmation_result(ctx, confirmation, "زمان تأیید تمام شد.", "خرید لغو شد.").await?
    else {
        return Ok(());
    };

    let reply = match purchase_reward(db, profile.id, reward.id, now_unix_secs()).await? {
        PurchaseOutcome::Purchased {
            redemption,
            coins_left,
        } => simple_embed(
            "خرید انجام شد! 🎉",
            format!(
                "{} **{}** مال تو شد!\nسکه‌ی باقی‌مانده: {}\nبه پدر و مادرت بگو تا جایزه را تحویل بدهند.",
                redemption.reward_emoji,
                sanitize_user_text(&redemption.reward_title),
                format_coins(coins_left)
            ),
        )
        .color(SUCCESS_EMBED_COLOR),
        PurchaseOutcome::NotEnoughCoins { missing, .. } => simple_embed(
            "خرید انجام نشد",
            format!("سکه‌هات کافی نیست! هنوز {} لازم داری 💪", format_coins(missing)),
        ),
        PurchaseOutcome::RewardNotFound => {
            simple_embed("خرید انجام نشد", "این جایزه دیگر در فروشگاه نیست.")
        }
        PurchaseOutcome::UserNotFound => simple_embed("خرید انجام نشد", "پروفایل تو پیدا نشد."),
    };

    interaction
        .edit_response(
            ctx.http(),
            serenity::EditInteractionResponse::new()
                .embed(reply)
                .components(vec![]),
        )
        .await?;
    Ok(())
}
