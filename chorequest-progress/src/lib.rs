/// Badge catalogue and unlock evaluation.
pub mod achievements;
/// Day heat bands and month layout.
pub mod calendar;
/// Coin and XP arithmetic for tasks and purchases.
pub mod economy;
/// Ranking against the synthetic competitor roster.
pub mod leaderboard;
/// XP to level resolution.
pub mod levels;

pub use leaderboard::{Leaderboard, RankedPlayer, RealPlayer, compute_leaderboard};
pub use levels::{LevelInfo, calculate_level};
