use std::collections::HashMap;

/// How busy a day looked, from its total points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum DayHeat {
    None,
    Low,
    Medium,
    High,
}

impl DayHeat {
    pub fn from_points(points: u64) -> Self {
        match points {
            0 => Self::None,
            1..=30 => Self::Low,
            31..=60 => Self::Medium,
            _ => Self::High,
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            Self::None => "⬜",
            Self::Low => "🟨",
            Self::Medium => "🟧",
            Self::High => "🟩",
        }
    }
}

/// Scores of one month keyed by day of month.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MonthScores {
    by_day: HashMap<u32, u64>,
}

impl MonthScores {
    pub fn from_days(days: impl IntoIterator<Item = (u32, u64)>) -> Self {
        let mut by_day = HashMap::new();
        for (day, points) in days {
            *by_day.entry(day).or_insert(0) += points;
        }
        Self { by_day }
    }

    pub fn points(&self, day: u32) -> u64 {
        self.by_day.get(&day).copied().unwrap_or(0)
    }

    pub fn heat(&self, day: u32) -> DayHeat {
        DayHeat::from_points(self.points(day))
    }

    pub fn total(&self) -> u64 {
        self.by_day.values().sum()
    }
}

/// Lay a month out in weeks. `first_weekday` is the column of day 1
/// (0-based, week starting on Saturday); blank cells are `None`.
pub fn month_grid(days_in_month: u32, first_weekday: u32) -> Vec<[Option<u32>; 7]> {
    let offset = first_weekday % 7;
    let cells = (days_in_month + offset).div_ceil(7) * 7;

    let mut weeks = Vec::with_capacity((cells / 7) as usize);
    let mut week = [None; 7];
    for cell in 0..cells {
        let day = cell.checked_sub(offset).map(|d| d + 1).filter(|d| *d <= days_in_month);
        week[(cell % 7) as usize] = day;
        if cell % 7 == 6 {
            weeks.push(week);
            week = [None; 7];
        }
    }

    weeks
}

#[cfg(test)]
mod tests {
    use super::{DayHeat, MonthScores, month_grid};

    #[test]
    fn heat_bands() {
        assert_eq!(DayHeat::from_points(0), DayHeat::None);
        assert_eq!(DayHeat::from_points(30), DayHeat::Low);
        assert_eq!(DayHeat::from_points(31), DayHeat::Medium);
        assert_eq!(DayHeat::from_points(60), DayHeat::Medium);
        assert_eq!(DayHeat::from_points(61), DayHeat::High);
    }

    #[test]
    fn month_totals() {
        let scores = MonthScores::from_days([(1, 10), (2, 45), (2, 20)]);
        assert_eq!(scores.points(2), 65);
        assert_eq!(scores.heat(2), DayHeat::High);
        assert_eq!(scores.points(3), 0);
        assert_eq!(scores.total(), 75);
    }

    #[test]
    fn grid_pads_to_full_weeks() {
        let weeks = month_grid(31, 4);
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0], [None, None, None, None, Some(1), Some(2), Some(3)]);
        assert_eq!(weeks[4][6], Some(31));

        let weeks = month_grid(29, 0);
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[4][0], Some(29));
        assert_eq!(weeks[4][1], None);
    }
}
