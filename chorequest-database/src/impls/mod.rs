pub mod daily_scores;
pub mod redemptions;
pub mod rewards;
pub mod tasks;
pub mod users;
