use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::hero::embeds::{calendar_description, usage_message};
use crate::hero::shared::{require_profile, today};
use chorequest_core::{Context, Error};
use chorequest_database::impls::daily_scores::scores_between;
use chorequest_progress::calendar::MonthScores;
use chorequest_utils::embed::simple_embed;
use chorequest_utils::formatting::to_persian_digits;
use chorequest_utils::jalali::{
    JalaliDate, MONTH_NAMES, ToJalali, first_weekday_of_month, month_length,
};
use chorequest_utils::parse::{parse_iso_date, parse_jalali_month};
use chorequest_utils::time::iso_date;

pub const META: CommandMeta = CommandMeta {
    name: "calendar",
    desc: "تقویم شمسی ماه با امتیاز هر روز.",
    category: "hero",
    usage: "!calendar [سال/ماه]",
};

#[poise::command(prefix_command, slash_command, category = "Hero")]
pub async fn calendar(
    ctx: Context<'_>,
    #[description = "مثلا ۱۴۰۳/۷"] month: Option<String>,
) -> Result<(), Error> {
    let Some(profile) = require_profile(ctx).await? else {
        return Ok(());
    };

    let today = today(ctx).to_jalali();
    let requested = match month.as_deref() {
        Some(raw) => parse_jalali_month(raw),
        None => today.map(|date| (date.year, date.month)),
    };
    let Some((year, month)) = requested else {
        ctx.say(usage_message(META.usage)).await?;
        return Ok(());
    };

    let days_in_month = month_length(year, month);
    let (Some(first), Some(last), Some(first_weekday)) = (
        JalaliDate::new(year, month, 1).and_then(|date| date.to_gregorian()),
        JalaliDate::new(year, month, days_in_month).and_then(|date| date.to_gregorian()),
        first_weekday_of_month(year, month),
    ) else {
        ctx.say(usage_message(META.usage)).await?;
        return Ok(());
    };

    let scores = scores_between(&ctx.data().db, profile.id, &iso_date(first), &iso_date(last)).await?;
    let month_scores = MonthScores::from_days(scores.iter().filter_map(|score| {
        let jalali = parse_iso_date(&score.date)?.to_jalali()?;
        Some((jalali.day, score.total_points))
    }));

    let today_in_month = today
        .filter(|date| date.year == year && date.month == month)
        .map(|date| date.day);

    let shown = JalaliDate { year, month, day: 1 };
    let (prev_year, prev_month) = shown.previous_month();
    let (next_year, next_month) = shown.next_month();

    let title = format!(
        "تقویم {} {} 📅",
        MONTH_NAMES[(month - 1) as usize],
        to_persian_digits(year)
    );
    let footer = format!(
        "ماه قبل: !calendar {}/{} • ماه بعد: !calendar {}/{}",
        prev_year, prev_month, next_year, next_month
    );

    let embed = simple_embed(
        &title,
        calendar_description(days_in_month, first_weekday, today_in_month, &month_scores),
    )
    .footer(serenity::CreateEmbedFooter::new(footer));
    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
