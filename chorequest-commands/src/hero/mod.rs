pub mod achievements;
pub mod buy;
pub mod calendar;
pub mod done;
pub mod embeds;
pub mod leaderboard;
pub mod profile;
pub mod rewards;
pub mod shared;
pub mod start;
pub mod tasks;
