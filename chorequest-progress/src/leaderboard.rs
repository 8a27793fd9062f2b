use serde::{Deserialize, Serialize};

pub const SECONDS_PER_DAY: u64 = 86_400;

/// A fixed competitor whose score grows every day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyntheticPlayer {
    pub name: &'static str,
    pub base_xp: u64,
    pub avatar: &'static str,
}

impl SyntheticPlayer {
    pub const fn new(name: &'static str, base_xp: u64, avatar: &'static str) -> Self {
        Self {
            name,
            base_xp,
            avatar,
        }
    }
}

/// Shipped competitor roster.
pub const DEFAULT_ROSTER: &[SyntheticPlayer] = &[
    SyntheticPlayer::new("آراد", 3756, "🦁"),
    SyntheticPlayer::new("سارینا", 3620, "🦄"),
    SyntheticPlayer::new("کیان", 3510, "🐯"),
    SyntheticPlayer::new("النا", 3405, "🐰"),
    SyntheticPlayer::new("بردیا", 3300, "🐲"),
    SyntheticPlayer::new("نیکا", 3180, "🐼"),
    SyntheticPlayer::new("رادین", 3090, "🐻"),
    SyntheticPlayer::new("آوا", 2995, "🦊"),
    SyntheticPlayer::new("مهراد", 2910, "🐨"),
    SyntheticPlayer::new("تارا", 2834, "🐱"),
];

/// Knobs of the ranking simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeaderboardRules {
    pub daily_growth: u64,
    pub visible: usize,
    /// Simulated rank shown at zero progress.
    pub start_rank: u64,
    /// Simulated rank shown once the player catches the last visible entry.
    pub target_rank: u64,
}

impl Default for LeaderboardRules {
    fn default() -> Self {
        Self {
            daily_growth: 35,
            visible: 10,
            start_rank: 635,
            target_rank: 11,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RealPlayer {
    pub name: String,
    pub xp: u64,
    pub avatar: String,
    /// Unix seconds.
    pub account_created_at: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedPlayer {
    pub rank: u64,
    pub name: String,
    pub xp: u64,
    pub avatar: String,
    pub is_self: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub top: Vec<RankedPlayer>,
    /// Present only when the real player is outside `top`.
    pub floating_self: Option<RankedPlayer>,
}

/// Whole days since `created_at`, counting a started day as elapsed.
/// Timestamps in the future count as zero days.
pub fn days_elapsed(created_at: u64, now: u64) -> u64 {
    now.saturating_sub(created_at).div_ceil(SECONDS_PER_DAY)
}

/// Rank the real player against the roster using the default rules.
pub fn compute_leaderboard(
    real: &RealPlayer,
    roster: &[SyntheticPlayer],
    now: u64,
) -> Leaderboard {
    LeaderboardRules::default().compute(real, roster, now)
}

impl LeaderboardRules {
    pub fn compute(
        &self,
        real: &RealPlayer,
        roster: &[SyntheticPlayer],
        now: u64,
    ) -> Leaderboard {
        let growth = days_elapsed(real.account_created_at, now).saturating_mul(self.daily_growth);

        let mut players: Vec<RankedPlayer> = roster
            .iter()
            .map(|bot| RankedPlayer {
                rank: 0,
                name: bot.name.to_owned(),
                xp: bot.base_xp.saturating_add(growth),
                avatar: bot.avatar.to_owned(),
                is_self: false,
            })
            .collect();

        players.push(RankedPlayer {
            rank: 0,
            name: real.name.clone(),
            xp: real.xp,
            avatar: real.avatar.clone(),
            is_self: true,
        });

        // Stable: equal scores keep roster order, the real player last.
        players.sort_by(|left, right| right.xp.cmp(&left.xp));
        for (index, player) in players.iter_mut().enumerate() {
            player.rank = index as u64 + 1;
        }

        let my_index = players
            .iter()
            .position(|player| player.is_self)
            .unwrap_or(players.len() - 1);

        if my_index < self.visible {
            players.truncate(self.visible);
            return Leaderboard {
                top: players,
                floating_self: None,
            };
        }

        let me = players.remove(my_index);
        players.truncate(self.visible);

        let cutoff_xp = players.last().map_or(0, |player| player.xp);
        let rank = self.simulated_rank(me.xp, cutoff_xp);

        Leaderboard {
            top: players,
            floating_self: Some(RankedPlayer { rank, ..me }),
        }
    }

    /// Interpolate between `start_rank` and `target_rank` by how close `xp`
    /// is to `cutoff_xp`.
    pub fn simulated_rank(&self, xp: u64, cutoff_xp: u64) -> u64 {
        let ratio = if cutoff_xp == 0 {
            1.0
        } else {
            (xp as f64 / cutoff_xp as f64).clamp(0.0, 1.0)
        };

        let start = self.start_rank as f64;
        let span = start - self.target_rank as f64;
        (start - ratio * span).floor().max(0.0) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::{
        DEFAULT_ROSTER, LeaderboardRules, RealPlayer, SECONDS_PER_DAY, compute_leaderboard,
        days_elapsed,
    };

    const JOINED: u64 = 1_700_000_000;

    fn player(xp: u64) -> RealPlayer {
        RealPlayer {
            name: "سینا".to_owned(),
            xp,
            avatar: "🐸".to_owned(),
            account_created_at: JOINED,
        }
    }

    #[test]
    fn partial_days_round_up() {
        assert_eq!(days_elapsed(JOINED, JOINED), 0);
        assert_eq!(days_elapsed(JOINED, JOINED + 1), 1);
        assert_eq!(days_elapsed(JOINED, JOINED + SECONDS_PER_DAY), 1);
        assert_eq!(days_elapsed(JOINED, JOINED + SECONDS_PER_DAY + 1), 2);
        assert_eq!(days_elapsed(JOINED, JOINED - 10), 0);
    }

    #[test]
    fn leader_takes_first_place() {
        let board = compute_leaderboard(&player(9_000), DEFAULT_ROSTER, JOINED);

        assert_eq!(board.top.len(), 10);
        assert!(board.floating_self.is_none());
        assert!(board.top[0].is_self);
        assert_eq!(board.top[0].rank, 1);
        assert_eq!(board.top[1].name, "آراد");
        assert_eq!(board.top[9].name, "مهراد");
    }

    #[test]
    fn mid_table_player_keeps_true_position() {
        let board = compute_leaderboard(&player(3_400), DEFAULT_ROSTER, JOINED);

        let me = board.top.iter().find(|p| p.is_self).unwrap();
        assert_eq!(me.rank, 5);
        assert!(board.floating_self.is_none());
        let ranks: Vec<u64> = board.top.iter().map(|p| p.rank).collect();
        assert_eq!(ranks, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn newcomer_starts_at_the_bottom_bound() {
        let board = compute_leaderboard(&player(0), DEFAULT_ROSTER, JOINED);

        assert_eq!(board.top.len(), 10);
        assert!(board.top.iter().all(|p| !p.is_self));
        let me = board.floating_self.unwrap();
        assert_eq!(me.rank, 635);
        assert!(me.is_self);
        assert_eq!(me.xp, 0);
    }

    #[test]
    fn tying_tenth_place_lands_on_target_rank() {
        let board = compute_leaderboard(&player(2_834), DEFAULT_ROSTER, JOINED);

        assert_eq!(board.top[9].xp, 2_834);
        assert_eq!(board.floating_self.unwrap().rank, 11);
    }

    #[test]
    fn roster_grows_with_days_elapsed() {
        let three_days_later = JOINED + 2 * SECONDS_PER_DAY + 60;
        let board = compute_leaderboard(&player(100), DEFAULT_ROSTER, three_days_later);

        assert_eq!(board.top[0].xp, 3_756 + 3 * 35);
        assert_eq!(board.top[9].xp, 2_834 + 3 * 35);
    }

    #[test]
    fn roster_growth_pushes_the_floating_rank_back() {
        let three_days_later = JOINED + 3 * SECONDS_PER_DAY;
        let board = compute_leaderboard(&player(2_834), DEFAULT_ROSTER, three_days_later);

        let cutoff = 2_834 + 3 * 35;
        assert_eq!(board.top[9].xp, cutoff);
        assert!(board.top.iter().all(|p| !p.is_self));

        let expected = (635.0 - 2_834.0 / cutoff as f64 * 624.0).floor() as u64;
        let me = board.floating_self.unwrap();
        assert_eq!(me.rank, expected);
        assert_eq!(me.rank, 33);
    }

    #[test]
    fn simulated_rank_interpolates() {
        let rules = LeaderboardRules::default();
        assert_eq!(rules.simulated_rank(0, 2_834), 635);
        assert_eq!(rules.simulated_rank(1_417, 2_834), 323);
        assert_eq!(rules.simulated_rank(2_834, 2_834), 11);
        assert_eq!(rules.simulated_rank(50, 0), 11);
    }

    #[test]
    fn identical_inputs_give_identical_boards() {
        let first = compute_leaderboard(&player(1_200), DEFAULT_ROSTER, JOINED + 5);
        let second = compute_leaderboard(&player(1_200), DEFAULT_ROSTER, JOINED + 5);
        assert_eq!(first, second);
    }

    #[test]
    fn short_roster_always_shows_the_player() {
        let board = compute_leaderboard(&player(0), &DEFAULT_ROSTER[..3], JOINED);
        assert_eq!(board.top.len(), 4);
        assert!(board.top[3].is_self);
        assert!(board.floating_self.is_none());
    }
}
