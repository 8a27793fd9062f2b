use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub id: i64,
    pub title: String,
    pub cost: u64,
    pub emoji: String,
}

#[derive(Clone, Debug)]
pub struct NewReward<'a> {
    pub title: &'a str,
    pub cost: u64,
    pub emoji: &'a str,
}

/// Emojis offered when parents define a reward.
pub const REWARD_EMOJIS: &[&str] = &[
    "🍕", "🍦", "🎮", "⚽", "🚲", "🎨", "🧸", "📱", "🍟", "🍿", "🏊‍♂️", "🎡",
];

pub const DEFAULT_REWARD_EMOJI: &str = "🎁";
