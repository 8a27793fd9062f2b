#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub required_xp: u64,
}

/// Badge catalogue, ordered by `required_xp`.
pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: "beginner",
        title: "شروع ماجرا",
        description: "کسب اولین ۵۰ امتیاز تجربه",
        icon: "🎒",
        required_xp: 50,
    },
    Achievement {
        id: "bronze_cup",
        title: "مدال برنزی",
        description: "رسیدن به ۲۰۰ امتیاز تجربه",
        icon: "🥉",
        required_xp: 200,
    },
    Achievement {
        id: "silver_cup",
        title: "مدال نقره‌ای",
        description: "عبور از ۵۰۰ امتیاز (نگهبان جوان)",
        icon: "🥈",
        required_xp: 500,
    },
    Achievement {
        id: "gold_cup",
        title: "مدال طلایی",
        description: "رسیدن به ۱۰۰۰ امتیاز (جنگجوی شجاع)",
        icon: "🥇",
        required_xp: 1000,
    },
    Achievement {
        id: "rich_kid",
        title: "مایه دار!",
        description: "جمع‌آوری ۱۵۰۰ امتیاز تجربه",
        icon: "💎",
        required_xp: 1500,
    },
    Achievement {
        id: "smart_hero",
        title: "نابغه کوچک",
        description: "رسیدن به ۲۰۰۰ امتیاز (نگهبان دانا)",
        icon: "🧠",
        required_xp: 2000,
    },
    Achievement {
        id: "super_star",
        title: "سوپر استار",
        description: "رسیدن به ۳۰۰۰ امتیاز (شوالیه روشنایی)",
        icon: "🌟",
        required_xp: 3000,
    },
    Achievement {
        id: "king",
        title: "پادشاه کهکشان",
        description: "رسیدن به ۵۰۰۰ امتیاز (بالاترین سطح)",
        icon: "👑",
        required_xp: 5000,
    },
    Achievement {
        id: "legend",
        title: "اسطوره بی‌پایان",
        description: "کسب ۱۰۰۰۰ امتیاز باورنکردنی!",
        icon: "🚀",
        required_xp: 10000,
    },
];

impl Achievement {
    pub fn is_unlocked(&self, xp: u64) -> bool {
        xp >= self.required_xp
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AchievementSummary {
    pub unlocked_count: usize,
    pub total: usize,
    pub progress_percent: f64,
    /// Cheapest badge still locked, if any.
    pub next: Option<Achievement>,
}

pub fn summarize(catalogue: &[Achievement], xp: u64) -> AchievementSummary {
    let unlocked_count = catalogue.iter().filter(|badge| badge.is_unlocked(xp)).count();
    let total = catalogue.len();
    let progress_percent = if total == 0 {
        0.0
    } else {
        unlocked_count as f64 / total as f64 * 100.0
    };

    let next = catalogue
        .iter()
        .filter(|badge| !badge.is_unlocked(xp))
        .min_by_key(|badge| badge.required_xp)
        .copied();

    AchievementSummary {
        unlocked_count,
        total,
        progress_percent,
        next,
    }
}

/// Badges crossed when XP moves from `before` to `after`.
pub fn newly_unlocked(catalogue: &[Achievement], before: u64, after: u64) -> Vec<Achievement> {
    catalogue
        .iter()
        .filter(|badge| !badge.is_unlocked(before) && badge.is_unlocked(after))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{ACHIEVEMENTS, newly_unlocked, summarize};

    #[test]
    fn nothing_unlocked_at_start() {
        let summary = summarize(ACHIEVEMENTS, 0);
        assert_eq!(summary.unlocked_count, 0);
        assert_eq!(summary.total, 9);
        assert_eq!(summary.progress_percent, 0.0);
        assert_eq!(summary.next.map(|badge| badge.id), Some("beginner"));
    }

    #[test]
    fn thresholds_are_inclusive() {
        let summary = summarize(ACHIEVEMENTS, 500);
        assert_eq!(summary.unlocked_count, 3);
        assert_eq!(summary.next.map(|badge| badge.id), Some("gold_cup"));
    }

    #[test]
    fn everything_unlocked_at_ten_thousand() {
        let summary = summarize(ACHIEVEMENTS, 10_000);
        assert_eq!(summary.unlocked_count, 9);
        assert_eq!(summary.progress_percent, 100.0);
        assert!(summary.next.is_none());
    }

    #[test]
    fn reports_crossed_badges() {
        let crossed = newly_unlocked(ACHIEVEMENTS, 180, 520);
        let ids: Vec<&str> = crossed.iter().map(|badge| badge.id).collect();
        assert_eq!(ids, vec!["bronze_cup", "silver_cup"]);
        assert!(newly_unlocked(ACHIEVEMENTS, 520, 180).is_empty());
    }
}
