use chorequest_database::model::redemptions::Redemption;
use chorequest_utils::formatting::{format_coins, sanitize_user_text, to_persian_digits};
use chorequest_utils::jalali::ToJalali;
use chorequest_utils::parse::parse_any_date;
use chorequest_utils::time::local_today;
use chrono::NaiveDate;
use poise::serenity_prelude as serenity;

use chorequest_utils::embed::PARENT_EMBED_COLOR;

pub fn panel_locked_message() -> &'static str {
    "بخش والدین قفل است 🛡️ اول با `!unlock <رمز ۴ رقمی>` وارد شو."
}

pub fn parent_embed(title: &str, description: impl Into<String>) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title(title.to_owned())
        .color(PARENT_EMBED_COLOR)
        .description(description)
}

/// Split `[date] <title>`: the first word is a date only if it parses as one.
pub fn split_date_and_title(rest: &str) -> (Option<NaiveDate>, &str) {
    let rest = rest.trim();
    if let Some((first, tail)) = rest.split_once(char::is_whitespace)
        && let Some(date) = parse_any_date(first)
    {
        return (Some(date), tail.trim());
    }
    (None, rest)
}

fn redemption_line(position: usize, redemption: &Redemption, utc_offset_minutes: i64) -> String {
    let bought_on = local_today(redemption.created_at, utc_offset_minutes)
        .to_jalali()
        .map(|date| date.to_string())
        .unwrap_or_default();

    format!(
        "{} **{}.** {} {} • {} • {}",
        if redemption.is_fulfilled { "✅" } else { "⏳" },
        to_persian_digits(position),
        redemption.reward_emoji,
        sanitize_user_text(&redemption.reward_title),
        format_coins(redemption.cost),
        bought_on
    )
}

pub fn pending_description(pending: &[Redemption], utc_offset_minutes: i64) -> String {
    if pending.is_empty() {
        return "جایزه‌ای در انتظار تحویل نیست 🎉".to_owned();
    }

    let mut out = pending
        .iter()
        .enumerate()
        .map(|(index, redemption)| redemption_line(index + 1, redemption, utc_offset_minutes))
        .collect::<Vec<_>>()
        .join("\n");
    out.push_str("\n\nبعد از تحویل: `!fulfill <شماره>`");
    out
}

/// One page of purchase history; numbering continues across pages.
pub fn history_page(page: &[Redemption], first_position: usize, utc_offset_minutes: i64) -> String {
    page.iter()
        .enumerate()
        .map(|(index, redemption)| {
            redemption_line(first_position + index, redemption, utc_offset_minutes)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use chorequest_database::model::redemptions::Redemption;
    use chrono::NaiveDate;

    use super::{history_page, pending_description, split_date_and_title};

    fn redemption(title: &str, is_fulfilled: bool) -> Redemption {
        Redemption {
            id: 1,
            reward_title: title.to_owned(),
            reward_emoji: "🍦".to_owned(),
            cost: 50,
            is_fulfilled,
            created_at: 1_710_892_800,
            fulfilled_at: None,
        }
    }

    #[test]
    fn date_prefix_is_optional() {
        let (date, title) = split_date_and_title("1403/01/01 کتاب خواندن");
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 20));
        assert_eq!(title, "کتاب خواندن");

        let (date, title) = split_date_and_title("  آب دادن به گل‌ها ");
        assert!(date.is_none());
        assert_eq!(title, "آب دادن به گل‌ها");

        let (date, title) = split_date_and_title("2024-03-20");
        assert!(date.is_none());
        assert_eq!(title, "2024-03-20");
    }

    #[test]
    fn pending_list_is_numbered() {
        let text = pending_description(&[redemption("بستنی", false), redemption("پیتزا", false)], 210);
        assert!(text.contains("⏳ **۱.** 🍦 بستنی"));
        assert!(text.contains("**۲.**"));
        assert!(text.contains("۵۰ سکه"));
        assert!(text.contains("فروردین"));
    }

    #[test]
    fn empty_pending_list() {
        assert!(pending_description(&[], 0).contains("در انتظار تحویل نیست"));
    }

    #[test]
    fn history_numbering_continues() {
        let text = history_page(&[redemption("بستنی", true)], 11, 0);
        assert!(text.starts_with("✅ **۱۱.**"));
    }
}
