/// XP granted per task point; coins are granted one-for-one.
pub const XP_PER_POINT: u64 = 2;

/// Coins and XP earned by completing one task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaskAward {
    pub coins: u64,
    pub xp: u64,
}

impl TaskAward {
    pub fn for_points(points: u64) -> Self {
        Self {
            coins: points,
            xp: points.saturating_mul(XP_PER_POINT),
        }
    }
}

/// Balance change for a user, applied with saturation at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BalanceDelta {
    pub coins: i64,
    pub xp: i64,
}

impl BalanceDelta {
    pub fn grant(award: TaskAward) -> Self {
        Self {
            coins: clamp_i64(award.coins),
            xp: clamp_i64(award.xp),
        }
    }

    pub fn revoke(award: TaskAward) -> Self {
        let granted = Self::grant(award);
        Self {
            coins: -granted.coins,
            xp: -granted.xp,
        }
    }

    /// Delta for flipping a task's done flag from `was_done` to `now_done`.
    pub fn for_toggle(points: u64, was_done: bool, now_done: bool) -> Self {
        let award = TaskAward::for_points(points);
        match (was_done, now_done) {
            (false, true) => Self::grant(award),
            (true, false) => Self::revoke(award),
            _ => Self { coins: 0, xp: 0 },
        }
    }
}

fn clamp_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Affordability {
    Affordable { remaining: u64 },
    Short { missing: u64 },
}

pub fn check_affordability(coins: u64, cost: u64) -> Affordability {
    match coins.checked_sub(cost) {
        Some(remaining) => Affordability::Affordable { remaining },
        None => Affordability::Short {
            missing: cost - coins,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{Affordability, BalanceDelta, TaskAward, check_affordability};

    #[test]
    fn xp_is_double_the_points() {
        assert_eq!(TaskAward::for_points(15), TaskAward { coins: 15, xp: 30 });
    }

    #[test]
    fn toggling_grants_and_revokes() {
        assert_eq!(
            BalanceDelta::for_toggle(10, false, true),
            BalanceDelta { coins: 10, xp: 20 }
        );
        assert_eq!(
            BalanceDelta::for_toggle(10, true, false),
            BalanceDelta { coins: -10, xp: -20 }
        );
        assert_eq!(
            BalanceDelta::for_toggle(10, true, true),
            BalanceDelta { coins: 0, xp: 0 }
        );
    }

    #[test]
    fn affordability() {
        assert_eq!(
            check_affordability(50, 50),
            Affordability::Affordable { remaining: 0 }
        );
        assert_eq!(
            check_affordability(20, 50),
            Affordability::Short { missing: 30 }
        );
    }
}
