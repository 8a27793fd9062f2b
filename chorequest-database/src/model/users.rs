use serde::{Deserialize, Serialize};

/// Avatars offered during onboarding.
pub const AVATARS: &[&str] = &["🐻", "🐰", "🐱", "🐶", "🦁", "🐸", "🦄", "🐼", "🐨", "🐯"];

pub const DEFAULT_AVATAR: &str = "🐻";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u64,
    pub name: String,
    pub age: u32,
    pub avatar: String,
    pub xp: u64,
    pub coins: u64,
    /// Unix seconds.
    pub created_at: u64,
}

#[derive(Clone, Debug)]
pub struct NewUser<'a> {
    pub id: u64,
    pub name: &'a str,
    pub age: u32,
    pub avatar: &'a str,
}
