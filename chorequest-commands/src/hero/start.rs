use tracing::info;

use crate::CommandMeta;
use crate::hero::embeds::usage_message;
use chorequest_core::{Context, Error};
use chorequest_database::impls::users::upsert_user;
use chorequest_database::model::users::{AVATARS, NewUser};
use chorequest_utils::embed::simple_embed;
use chorequest_utils::formatting::sanitize_user_text;
use chorequest_utils::parse::parse_amount;
use chorequest_utils::time::now_unix_secs;

pub const META: CommandMeta = CommandMeta {
    name: "start",
    desc: "ثبت‌نام یا ویرایش پروفایل قهرمان.",
    category: "hero",
    usage: "!start <سن> <آواتار> <اسم>",
};

const MAX_NAME_CHARS: usize = 32;
const MAX_AGE: u64 = 120;

#[poise::command(prefix_command, slash_command, category = "Hero")]
pub async fn start(
    ctx: Context<'_>,
    #[description = "سن"] age: Option<String>,
    #[description = "یکی از آواتارها"] avatar: Option<String>,
    #[description = "اسم"]
    #[rest]
    name: Option<String>,
) -> Result<(), Error> {
    let (Some(age), Some(avatar), Some(name)) = (age, avatar, name) else {
        ctx.say(format!(
            "{}\nآواتارها: {}",
            usage_message(META.usage),
            AVATARS.join(" ")
        ))
        .await?;
        return Ok(());
    };

    let Some(age) = parse_amount(&age).filter(|age| *age <= MAX_AGE) else {
        ctx.say("سن باید یک عدد مثبت باشد.").await?;
        return Ok(());
    };

    let avatar = avatar.trim();
    if !AVATARS.contains(&avatar) {
        ctx.say(format!("این آواتار در فهرست نیست. یکی از این‌ها را انتخاب کن: {}", AVATARS.join(" ")))
            .await?;
        return Ok(());
    }

    let name = name.trim();
    if name.is_empty() || name.chars().count() > MAX_NAME_CHARS {
        ctx.say("اسم باید بین ۱ تا ۳۲ حرف باشد.").await?;
        return Ok(());
    }

    let profile = upsert_user(
        &ctx.data().db,
        NewUser {
            id: ctx.author().id.get(),
            name,
            age: u32::try_from(age)?,
            avatar,
        },
        now_unix_secs(),
    )
    .await?;

    info!(user_id = profile.id, "hero onboarded");

    let embed = simple_embed(
        "خوش اومدی قهرمان! 🚀",
        format!(
            "{} **{}** آماده‌ی ماجراجوییه!\nبا `!tasks` کارهای امروز را ببین.",
            profile.avatar,
            sanitize_user_text(&profile.name)
        ),
    );
    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
