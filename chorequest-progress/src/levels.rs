use serde::{Deserialize, Serialize};

/// One row of the level table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelTier {
    pub level: u32,
    /// Inclusive upper bound of the tier.
    pub max_xp: u64,
    pub title: &'static str,
    pub message: &'static str,
}

/// Shipped level table, ordered ascending by `max_xp`.
pub const LEVEL_TIERS: &[LevelTier] = &[
    LevelTier {
        level: 1,
        max_xp: 500,
        title: "کاوشگر تازه‌کار",
        message: "قدم اول برای تبدیل شدن به یه قهرمان رو برداشتی!",
    },
    LevelTier {
        level: 2,
        max_xp: 1000,
        title: "نگهبان جوان",
        message: "هنر انجام دادن و کمک کردن رو یاد گرفتی!",
    },
    LevelTier {
        level: 3,
        max_xp: 1500,
        title: "جنگجوی شجاع",
        message: "با تلاش روزانه و قدرت عالی، شجاعتت رو ثابت کردی!",
    },
    LevelTier {
        level: 4,
        max_xp: 2500,
        title: "نگهبان دانا",
        message: "دانش، صبر و احترام... تو واقعا خاص شدی!",
    },
    LevelTier {
        level: 5,
        max_xp: 5000,
        title: "شوالیه روشنایی",
        message: "کمک به خانواده و رفتار عالی، تو رو تبدیل به الگو کرده!",
    },
    LevelTier {
        level: 6,
        max_xp: 10000,
        title: "قهرمان کهکشانی",
        message: "تو دیگه فقط تلاش نمیکنی، تو الهام بخش هستی!",
    },
];

/// Resolved level for a given XP total.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelInfo {
    pub level: u32,
    pub title: String,
    pub message: String,
    pub min_xp: u64,
    pub max_xp: u64,
    /// Always within `0.0..=100.0`.
    pub progress_percent: f64,
    pub next_level_xp: u64,
}

/// A validated, strictly ascending level table.
#[derive(Clone, Copy, Debug)]
pub struct LevelTable<'a> {
    tiers: &'a [LevelTier],
}

impl Default for LevelTable<'static> {
    fn default() -> Self {
        Self { tiers: LEVEL_TIERS }
    }
}

impl<'a> LevelTable<'a> {
    /// Build a table, rejecting empty tables and non-increasing thresholds.
    pub fn new(tiers: &'a [LevelTier]) -> anyhow::Result<Self> {
        if tiers.is_empty() {
            anyhow::bail!("level table must contain at least one tier");
        }

        if let Some(pair) = tiers.windows(2).find(|pair| pair[0].max_xp >= pair[1].max_xp) {
            anyhow::bail!(
                "level thresholds must be strictly increasing (level {} at {} xp, level {} at {} xp)",
                pair[0].level,
                pair[0].max_xp,
                pair[1].level,
                pair[1].max_xp
            );
        }

        Ok(Self { tiers })
    }

    /// XP above which the progress bar is pinned full: the second-to-last
    /// threshold, or the only threshold for a single-tier table.
    pub fn full_bar_threshold(&self) -> u64 {
        let index = self.tiers.len().saturating_sub(2);
        self.tiers[index].max_xp
    }

    pub fn calculate(&self, current_xp: u64) -> LevelInfo {
        let mut min_xp = 0;
        let mut selected = self.tiers[self.tiers.len() - 1];

        for tier in self.tiers {
            if current_xp <= tier.max_xp {
                selected = *tier;
                break;
            }
            min_xp = tier.max_xp;
        }

        // Past the last threshold the last tier keeps its own lower bound.
        if current_xp > selected.max_xp {
            min_xp = self.tiers.len().checked_sub(2).map_or(0, |i| self.tiers[i].max_xp);
        }

        let range = selected.max_xp.saturating_sub(min_xp);
        let mut progress = if range > 0 {
            (current_xp as f64 - min_xp as f64) / range as f64 * 100.0
        } else {
            0.0
        };
        progress = progress.clamp(0.0, 100.0);

        if current_xp > self.full_bar_threshold() {
            progress = 100.0;
        }

        LevelInfo {
            level: selected.level,
            title: selected.title.to_owned(),
            message: selected.message.to_owned(),
            min_xp,
            max_xp: selected.max_xp,
            progress_percent: progress,
            next_level_xp: selected.max_xp.saturating_sub(current_xp),
        }
    }
}

/// Resolve `current_xp` against the shipped level table.
pub fn calculate_level(current_xp: u64) -> LevelInfo {
    LevelTable::default().calculate(current_xp)
}

#[cfg(test)]
mod tests {
    use super::{LEVEL_TIERS, LevelTable, LevelTier, calculate_level};

    #[test]
    fn first_tier_covers_zero_through_five_hundred() {
        for xp in [0, 1, 250, 499, 500] {
            let info = calculate_level(xp);
            assert_eq!(info.level, 1, "xp {xp}");
            assert_eq!(info.min_xp, 0);
            assert_eq!(info.max_xp, 500);
        }
    }

    #[test]
    fn zero_xp_starts_empty() {
        let info = calculate_level(0);
        assert_eq!(info.level, 1);
        assert_eq!(info.progress_percent, 0.0);
        assert_eq!(info.next_level_xp, 500);
        assert_eq!(info.title, "کاوشگر تازه‌کار");
    }

    #[test]
    fn tier_boundary_is_inclusive() {
        let info = calculate_level(500);
        assert_eq!(info.level, 1);
        assert_eq!(info.progress_percent, 100.0);
        assert_eq!(info.next_level_xp, 0);

        let info = calculate_level(501);
        assert_eq!(info.level, 2);
        assert_eq!(info.min_xp, 500);
        assert_eq!(info.max_xp, 1000);
        assert!((info.progress_percent - 0.2).abs() < 1e-9);
    }

    #[test]
    fn progress_is_pinned_full_above_five_thousand() {
        assert_eq!(calculate_level(5001).progress_percent, 100.0);
        assert_eq!(calculate_level(5001).level, 6);
        assert_eq!(calculate_level(7500).progress_percent, 100.0);
        assert_eq!(calculate_level(100_000).progress_percent, 100.0);
    }

    #[test]
    fn last_tier_clamps() {
        let info = calculate_level(10_000);
        assert_eq!(info.level, 6);
        assert_eq!(info.max_xp, 10_000);
        assert_eq!(info.next_level_xp, 0);

        let info = calculate_level(250_000);
        assert_eq!(info.level, 6);
        assert_eq!(info.min_xp, 5_000);
        assert_eq!(info.next_level_xp, 0);
        assert_eq!(info.progress_percent, 100.0);
    }

    #[test]
    fn progress_is_monotonic_within_a_tier() {
        let mut previous = -1.0;
        for xp in (1001..=1500).step_by(7) {
            let info = calculate_level(xp);
            assert_eq!(info.level, 3);
            assert!(info.progress_percent >= previous);
            previous = info.progress_percent;
        }
    }

    #[test]
    fn level_never_decreases() {
        let mut previous = 0;
        for xp in (0..12_000).step_by(50) {
            let level = calculate_level(xp).level;
            assert!(level >= previous);
            previous = level;
        }
    }

    #[test]
    fn repeated_calls_match() {
        assert_eq!(calculate_level(1234), calculate_level(1234));
    }

    #[test]
    fn rejects_unordered_tables() {
        const BAD: &[LevelTier] = &[
            LevelTier {
                level: 1,
                max_xp: 100,
                title: "a",
                message: "a",
            },
            LevelTier {
                level: 2,
                max_xp: 100,
                title: "b",
                message: "b",
            },
        ];

        assert!(LevelTable::new(BAD).is_err());
        assert!(LevelTable::new(&[]).is_err());
        assert!(LevelTable::new(LEVEL_TIERS).is_ok());
    }

    #[test]
    fn single_tier_table_uses_its_own_threshold() {
        const ONE: &[LevelTier] = &[LevelTier {
            level: 1,
            max_xp: 100,
            title: "only",
            message: "only",
        }];

        let table = LevelTable::new(ONE).unwrap();
        assert_eq!(table.calculate(50).progress_percent, 50.0);
        assert_eq!(table.calculate(150).progress_percent, 100.0);
        assert_eq!(table.calculate(150).min_xp, 0);
    }
}
