use crate::model::rewards::Reward;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redemption {
    pub id: i64,
    pub reward_title: String,
    pub reward_emoji: String,
    pub cost: u64,
    pub is_fulfilled: bool,
    pub created_at: u64,
    pub fulfilled_at: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Purchased {
        redemption: Redemption,
        coins_left: u64,
    },
    NotEnoughCoins {
        reward: Reward,
        coins: u64,
        missing: u64,
    },
    RewardNotFound,
    UserNotFound,
}
