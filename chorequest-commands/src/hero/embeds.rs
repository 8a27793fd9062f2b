use chorequest_database::model::rewards::Reward;
use chorequest_database::model::tasks::Task;
use chorequest_database::model::users::UserProfile;
use chorequest_progress::achievements::{Achievement, AchievementSummary};
use chorequest_progress::calendar::{MonthScores, month_grid};
use chorequest_progress::leaderboard::{Leaderboard, RankedPlayer};
use chorequest_progress::levels::LevelInfo;
use chorequest_utils::formatting::{
    format_coins, format_percent, format_xp, progress_bar, rank_label, sanitize_user_text,
    to_persian_digits,
};
use chorequest_utils::jalali::WEEKDAY_NAMES;

const LEVEL_BAR_WIDTH: usize = 12;

pub fn not_registered_message() -> &'static str {
    "هنوز ثبت‌نام نکردی! با `!start <سن> <آواتار> <اسم>` شروع کن 🚀"
}

pub fn usage_message(usage: &str) -> String {
    format!("طرز استفاده: `{}`", usage)
}

pub fn invalid_date_message(raw: &str) -> String {
    format!(
        "تاریخ `{}` معتبر نیست. از `۱۴۰۳/۰۱/۱۵` یا `2024-04-03` استفاده کن.",
        sanitize_user_text(raw)
    )
}

/// Profile card body: level, progress, balances.
pub fn profile_description(profile: &UserProfile, level: &LevelInfo, pending_rewards: usize) -> String {
    let mut out = format!(
        "{} **{}**\n🏅 سطح {} • {}\n{} {}\n_{}_\n\n",
        profile.avatar,
        sanitize_user_text(&profile.name),
        to_persian_digits(level.level),
        level.title,
        progress_bar(level.progress_percent, LEVEL_BAR_WIDTH),
        format_percent(level.progress_percent),
        level.message,
    );

    if level.next_level_xp > 0 {
        out.push_str(&format!("تا سطح بعد: {}\n", format_xp(level.next_level_xp)));
    }

    out.push_str(&format!(
        "💰 سکه قابل خرج: **{}**\n⭐ کل تجربه: **{}**",
        format_coins(profile.coins),
        format_xp(profile.xp)
    ));

    if pending_rewards > 0 {
        out.push_str(&format!(
            "\n🎁 جایزه‌های در انتظار تحویل: {}",
            to_persian_digits(pending_rewards)
        ));
    }

    out
}

pub fn task_lines(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "برای این روز کاری ثبت نشده.".to_owned();
    }

    tasks
        .iter()
        .enumerate()
        .map(|(index, task)| {
            let award = task.award();
            format!(
                "{} **{}.** {} • {} • {}",
                if task.is_done { "✅" } else { "⬜" },
                to_persian_digits(index + 1),
                sanitize_user_text(&task.title),
                format_coins(award.coins),
                format_xp(award.xp),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn tasks_footer(tasks: &[Task]) -> String {
    let done = tasks.iter().filter(|task| task.is_done).count();
    format!(
        "{} از {} انجام شده • !done <شماره>",
        to_persian_digits(done),
        to_persian_digits(tasks.len())
    )
}

/// Message shown after a task flips, including level-ups and new badges.
pub fn task_toggle_message(
    task: &Task,
    before: &LevelInfo,
    after: &LevelInfo,
    unlocked: &[Achievement],
) -> String {
    let award = task.award();
    let mut out = if task.is_done {
        format!(
            "آفرین! **{}** انجام شد 🎉\n+{} • +{}",
            sanitize_user_text(&task.title),
            format_coins(award.coins),
            format_xp(award.xp)
        )
    } else {
        format!(
            "**{}** برگشت به کارهای انجام‌نشده.\n-{} • -{}",
            sanitize_user_text(&task.title),
            format_coins(award.coins),
            format_xp(award.xp)
        )
    };

    if after.level > before.level {
        out.push_str(&format!(
            "\n\n🆙 رسیدی به سطح {}: **{}**",
            to_persian_digits(after.level),
            after.title
        ));
    }

    for badge in unlocked {
        out.push_str(&format!("\n{} نشان جدید: **{}**", badge.icon, badge.title));
    }

    out
}

fn leaderboard_line(player: &RankedPlayer) -> String {
    let line = format!(
        "{} {} {} • {}",
        rank_label(player.rank),
        player.avatar,
        sanitize_user_text(&player.name),
        format_xp(player.xp)
    );
    if player.is_self {
        format!("**{} (تو)**", line)
    } else {
        line
    }
}

pub fn leaderboard_description(board: &Leaderboard) -> String {
    let mut out = String::from("آیا می‌تونی به جمع ۱۰ نفر اول برسی؟\n\n");
    out.push_str(
        &board
            .top
            .iter()
            .map(leaderboard_line)
            .collect::<Vec<_>>()
            .join("\n"),
    );

    if let Some(me) = &board.floating_self {
        out.push_str(&format!(
            "\n\n📍 **جایگاه فعلی تو:** {}\n{} {} • {}\nادامه بده! داری میرسی... 🚀",
            rank_label(me.rank),
            me.avatar,
            sanitize_user_text(&me.name),
            format_xp(me.xp)
        ));
    }

    out
}

pub fn achievements_description(catalogue: &[Achievement], xp: u64, summary: &AchievementSummary) -> String {
    let mut out = format!(
        "{} از {} نشان • {}\n{}\n\n",
        to_persian_digits(summary.unlocked_count),
        to_persian_digits(summary.total),
        format_percent(summary.progress_percent),
        progress_bar(summary.progress_percent, LEVEL_BAR_WIDTH)
    );

    for badge in catalogue {
        if badge.is_unlocked(xp) {
            out.push_str(&format!(
                "{} **{}**: {} • دریافت شد! 🎉\n",
                badge.icon, badge.title, badge.description
            ));
        } else {
            out.push_str(&format!(
                "🔒 {}: {} • {} نیاز است\n",
                badge.title,
                badge.description,
                format_xp(badge.required_xp)
            ));
        }
    }

    if let Some(next) = &summary.next {
        out.push_str(&format!(
            "\nنشان بعدی: {} {} ({} مانده)",
            next.icon,
            next.title,
            format_xp(next.required_xp.saturating_sub(xp))
        ));
    }

    out.trim_end().to_owned()
}

pub fn rewards_description(rewards: &[Reward], coins: u64) -> String {
    let mut out = format!("💰 سکه قابل خرج: **{}**\n\n", format_coins(coins));

    if rewards.is_empty() {
        out.push_str("هنوز جایزه‌ای تعریف نشده.");
        return out;
    }

    for (index, reward) in rewards.iter().enumerate() {
        let marker = if coins >= reward.cost { "🔓" } else { "🔒" };
        out.push_str(&format!(
            "{} **{}.** {} {} • {}\n",
            marker,
            to_persian_digits(index + 1),
            reward.emoji,
            sanitize_user_text(&reward.title),
            format_coins(reward.cost)
        ));
    }

    out.push_str("\nبرای خرید: `!buy <شماره>`");
    out
}

pub fn purchase_prompt(reward: &Reward, coins: u64) -> String {
    format!(
        "مطمئنی میخوای بخری؟\n\n{} **{}** • {}\nبعد از خرید: {}",
        reward.emoji,
        sanitize_user_text(&reward.title),
        format_coins(reward.cost),
        format_coins(coins.saturating_sub(reward.cost))
    )
}

/// Month heat map: a header row of weekday initials, then one line per week.
pub fn calendar_description(
    days_in_month: u32,
    first_weekday: u32,
    today: Option<u32>,
    scores: &MonthScores,
) -> String {
    let header = WEEKDAY_NAMES
        .iter()
        .map(|name| name.chars().next().map(String::from).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = format!("`{}`\n", header);
    for week in month_grid(days_in_month, first_weekday) {
        let cells = week
            .iter()
            .map(|cell| match cell {
                Some(day) if Some(*day) == today => "⭐".to_owned(),
                Some(day) => scores.heat(*day).marker().to_owned(),
                None => "▫️".to_owned(),
            })
            .collect::<String>();
        out.push_str(&cells);
        out.push('\n');
    }

    out.push_str(&format!(
        "\nجمع امتیاز این ماه: **{}**\n🟩 بیشتر از ۶۰ • 🟧 بیشتر از ۳۰ • 🟨 کمتر • ⬜ هیچ",
        to_persian_digits(scores.total())
    ));
    out
}

#[cfg(test)]
mod tests {
    use chorequest_database::model::rewards::Reward;
    use chorequest_database::model::tasks::Task;
    use chorequest_database::model::users::UserProfile;
    use chorequest_progress::achievements::{ACHIEVEMENTS, newly_unlocked, summarize};
    use chorequest_progress::calendar::MonthScores;
    use chorequest_progress::leaderboard::{DEFAULT_ROSTER, RealPlayer, compute_leaderboard};
    use chorequest_progress::levels::calculate_level;

    use super::{
        achievements_description, calendar_description, leaderboard_description,
        profile_description, rewards_description, task_lines, task_toggle_message,
    };

    fn task(title: &str, points: u64, is_done: bool) -> Task {
        Task {
            id: 1,
            title: title.to_owned(),
            points,
            task_date: "2024-03-20".to_owned(),
            deadline: "2024-03-20".to_owned(),
            is_done,
        }
    }

    fn profile(xp: u64, coins: u64) -> UserProfile {
        UserProfile {
            id: 1,
            name: "سارا".to_owned(),
            age: 8,
            avatar: "🐰".to_owned(),
            xp,
            coins,
            created_at: 0,
        }
    }

    #[test]
    fn task_lines_are_numbered_with_rewards() {
        let text = task_lines(&[task("مسواک", 10, true), task("تخت", 20, false)]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("✅ **۱.**"));
        assert!(lines[0].contains("۱۰ سکه"));
        assert!(lines[0].contains("۲۰ XP"));
        assert!(lines[1].starts_with("⬜ **۲.**"));
    }

    #[test]
    fn profile_mentions_pending_rewards_only_when_any() {
        let user = profile(250, 40);
        let level = calculate_level(user.xp);
        let text = profile_description(&user, &level, 0);
        assert!(text.contains("۴۰ سکه"));
        assert!(text.contains("سطح ۱"));
        assert!(text.contains("تا سطح بعد: ۲۵۰ XP"));
        assert!(!text.contains("در انتظار"));
        assert!(profile_description(&user, &level, 2).contains("در انتظار تحویل: ۲"));
    }

    #[test]
    fn toggle_message_reports_level_up_and_badges() {
        let done = task("تکالیف", 30, true);
        let before = calculate_level(480);
        let after = calculate_level(540);
        let badges = newly_unlocked(ACHIEVEMENTS, 480, 540);
        let text = task_toggle_message(&done, &before, &after, &badges);
        assert!(text.contains("سطح ۲"));
        assert!(text.contains("+۳۰ سکه"));
        for badge in &badges {
            assert!(text.contains(badge.title));
        }
    }

    #[test]
    fn leaderboard_marks_self_and_floating_card() {
        let real = RealPlayer {
            name: "سارا".to_owned(),
            xp: 0,
            avatar: "🐰".to_owned(),
            account_created_at: 0,
        };
        let board = compute_leaderboard(&real, DEFAULT_ROSTER, 0);
        let text = leaderboard_description(&board);
        assert!(text.contains("🥇"));
        assert!(text.contains("جایگاه فعلی تو"));
        assert!(text.contains("#۶۳۵"));
        assert!(!text.contains("(تو)"));

        let champion = RealPlayer { xp: 1_000_000, ..real };
        let text = leaderboard_description(&compute_leaderboard(&champion, DEFAULT_ROSTER, 0));
        assert!(text.contains("(تو)"));
        assert!(!text.contains("جایگاه فعلی تو"));
    }

    #[test]
    fn rewards_show_lock_state_against_coins() {
        let rewards = vec![
            Reward {
                id: 1,
                title: "بستنی".to_owned(),
                cost: 50,
                emoji: "🍦".to_owned(),
            },
            Reward {
                id: 2,
                title: "پیتزا".to_owned(),
                cost: 150,
                emoji: "🍕".to_owned(),
            },
        ];
        let text = rewards_description(&rewards, 60);
        assert!(text.contains("🔓 **۱.** 🍦"));
        assert!(text.contains("🔒 **۲.** 🍕"));
    }

    #[test]
    fn achievements_list_every_badge() {
        let summary = summarize(ACHIEVEMENTS, 250);
        let text = achievements_description(ACHIEVEMENTS, 250, &summary);
        for badge in ACHIEVEMENTS {
            assert!(text.contains(badge.title));
        }
        assert!(text.contains("دریافت شد"));
        assert!(text.contains("🔒"));
    }

    #[test]
    fn calendar_has_one_row_per_week() {
        let scores = MonthScores::from_days([(1, 70), (2, 40), (3, 5)]);
        let text = calendar_description(31, 3, None, &scores);
        let grid_rows = text.lines().skip(1).take_while(|line| !line.is_empty()).count();
        assert_eq!(grid_rows, 5);
        assert!(text.contains("🟩🟧🟨"));
        assert!(text.contains("۱۱۵"));
    }
}
