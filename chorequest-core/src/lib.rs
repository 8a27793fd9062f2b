pub mod parent_gate;

use chorequest_database::Database;

pub use parent_gate::{ParentGate, UnlockOutcome};

pub type Error = anyhow::Error;

/// Game-wide settings read from the environment at startup.
#[derive(Clone, Copy, Debug)]
pub struct GameSettings {
    /// Offset from UTC used to decide which day "today" is.
    pub utc_offset_minutes: i64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            utc_offset_minutes: 210,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Data {
    pub db: Database,
    pub parent_gate: ParentGate,
    pub settings: GameSettings,
}

pub type Context<'a> = poise::Context<'a, Data, Error>;
