use std::fmt::Display;

const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Replace ASCII digits with Persian digits, leaving everything else intact.
pub fn to_persian_digits(value: impl Display) -> String {
    value
        .to_string()
        .chars()
        .map(|ch| match ch.to_digit(10) {
            Some(digit) if ch.is_ascii_digit() => PERSIAN_DIGITS[digit as usize],
            _ => ch,
        })
        .collect()
}

/// Replace Persian and Arabic-Indic digits with ASCII digits.
pub fn normalize_digits(raw: &str) -> String {
    raw.chars()
        .map(|ch| match ch {
            '۰'..='۹' => char::from(b'0' + (ch as u32 - '۰' as u32) as u8),
            '٠'..='٩' => char::from(b'0' + (ch as u32 - '٠' as u32) as u8),
            other => other,
        })
        .collect()
}

pub fn format_xp(xp: u64) -> String {
    format!("{} XP", to_persian_digits(xp))
}

pub fn format_coins(coins: u64) -> String {
    format!("{} سکه", to_persian_digits(coins))
}

/// Text progress bar, e.g. `▰▰▰▱▱▱▱▱▱▱`.
pub fn progress_bar(percent: f64, width: usize) -> String {
    let width = width.max(1);
    let ratio = if percent.is_finite() {
        percent.clamp(0.0, 100.0) / 100.0
    } else {
        0.0
    };
    let filled = ((ratio * width as f64).round() as usize).min(width);

    let mut bar = String::with_capacity(width * 3);
    bar.extend(std::iter::repeat_n('▰', filled));
    bar.extend(std::iter::repeat_n('▱', width - filled));
    bar
}

/// Whole-number percent in Persian digits, e.g. `۴۲٪`.
pub fn format_percent(percent: f64) -> String {
    let rounded = if percent.is_finite() {
        percent.clamp(0.0, 100.0).floor() as u64
    } else {
        0
    };
    format!("{}٪", to_persian_digits(rounded))
}

/// Medal for podium ranks, Persian number otherwise.
pub fn rank_label(rank: u64) -> String {
    match rank {
        1 => "🥇".to_owned(),
        2 => "🥈".to_owned(),
        3 => "🥉".to_owned(),
        other => format!("#{}", to_persian_digits(other)),
    }
}

/// Neutralise mentions in user-provided text.
pub fn sanitize_user_text(text: &str) -> String {
    text.replace('@', "@\u{200B}")
}

#[cfg(test)]
mod tests {
    use super::{
        format_coins, format_percent, format_xp, normalize_digits, progress_bar, rank_label,
        sanitize_user_text, to_persian_digits,
    };

    #[test]
    fn converts_to_persian_digits() {
        assert_eq!(to_persian_digits(1403), "۱۴۰۳");
        assert_eq!(to_persian_digits("2024-03-20"), "۲۰۲۴-۰۳-۲۰");
        assert_eq!(to_persian_digits("abc"), "abc");
    }

    #[test]
    fn normalizes_digits() {
        assert_eq!(normalize_digits("۱۲۳۴"), "1234");
        assert_eq!(normalize_digits("٤٥"), "45");
        assert_eq!(normalize_digits("1403/۰۱/۰۱"), "1403/01/01");
    }

    #[test]
    fn currency_labels() {
        assert_eq!(format_xp(250), "۲۵۰ XP");
        assert_eq!(format_coins(40), "۴۰ سکه");
    }

    #[test]
    fn progress_bars() {
        assert_eq!(progress_bar(0.0, 5), "▱▱▱▱▱");
        assert_eq!(progress_bar(100.0, 5), "▰▰▰▰▰");
        assert_eq!(progress_bar(50.0, 4), "▰▰▱▱");
        assert_eq!(progress_bar(250.0, 3), "▰▰▰");
        assert_eq!(progress_bar(f64::NAN, 2), "▱▱");
    }

    #[test]
    fn percents_floor() {
        assert_eq!(format_percent(42.9), "۴۲٪");
        assert_eq!(format_percent(100.0), "۱۰۰٪");
    }

    #[test]
    fn rank_labels() {
        assert_eq!(rank_label(1), "🥇");
        assert_eq!(rank_label(3), "🥉");
        assert_eq!(rank_label(635), "#۶۳۵");
    }

    #[test]
    fn sanitizes_mentions() {
        assert_eq!(sanitize_user_text("@everyone"), "@\u{200B}everyone");
    }
}
