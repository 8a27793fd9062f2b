use crate::CommandMeta;
use crate::hero::embeds::usage_message;
use crate::hero::shared::require_profile;
use crate::parents::embeds::parent_embed;
use crate::parents::gate::ensure_parent_unlocked;
use chorequest_core::{Context, Error};
use chorequest_database::impls::rewards::add_reward;
use chorequest_database::model::rewards::{DEFAULT_REWARD_EMOJI, NewReward, REWARD_EMOJIS};
use chorequest_utils::formatting::{format_coins, sanitize_user_text};
use chorequest_utils::parse::parse_amount;

pub const META: CommandMeta = CommandMeta {
    name: "addreward",
    desc: "افزودن جایزه به فروشگاه.",
    category: "parents",
    usage: "!addreward <قیمت> <ایموجی|-> <عنوان>",
};

const MAX_TITLE_CHARS: usize = 60;

#[poise::command(prefix_command, slash_command, category = "Parents")]
pub async fn addreward(
    ctx: Context<'_>,
    #[description = "قیمت به سکه"] cost: Option<String>,
    #[description = "ایموجی جایزه، یا - برای پیش‌فرض"] emoji: Option<String>,
    #[description = "عنوان"]
    #[rest]
    title: Option<String>,
) -> Result<(), Error> {
    if !ensure_parent_unlocked(ctx).await? {
        return Ok(());
    }

    let (Some(cost), Some(emoji), Some(title)) =
        (cost.as_deref().and_then(parse_amount), emoji, title)
    else {
        ctx.say(format!(
            "{}\nایموجی‌ها: {}",
            usage_message(META.usage),
            REWARD_EMOJIS.join(" ")
        ))
        .await?;
        return Ok(());
    };

    let emoji = match emoji.trim() {
        "-" => DEFAULT_REWARD_EMOJI,
        picked if REWARD_EMOJIS.contains(&picked) => picked,
        _ => {
            ctx.say(format!(
                "این ایموجی در فهرست نیست: {}",
                REWARD_EMOJIS.join(" ")
            ))
            .await?;
            return Ok(());
        }
    };

    let title = title.trim();
    if title.is_empty() || title.chars().count() > MAX_TITLE_CHARS {
        ctx.say(usage_message(META.usage)).await?;
        return Ok(());
    }

    let Some(profile) = require_profile(ctx).await? else {
        return Ok(());
    };

    let reward = add_reward(&ctx.data().db, profile.id, NewReward { title, cost, emoji }).await?;

    let embed = parent_embed(
        "جایزه اضافه شد 🎁",
        format!(
            "{} **{}** • {}",
            reward.emoji,
            sanitize_user_text(&reward.title),
            format_coins(reward.cost)
        ),
    );
    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
