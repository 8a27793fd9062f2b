use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tracing::{info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnlockOutcome {
    /// Panel open until the given unix time.
    Unlocked { until: u64 },
    WrongPin,
}

/// In-memory PIN gate for the parents' panel. Each user unlocks their own
/// panel for a fixed window; nothing survives a restart.
#[derive(Clone, Debug)]
pub struct ParentGate {
    pin: Arc<str>,
    unlock_for: Duration,
    unlocked_until: Arc<Mutex<HashMap<u64, u64>>>,
}

impl ParentGate {
    pub fn new(pin: impl Into<String>, unlock_for: Duration) -> Self {
        Self {
            pin: Arc::from(pin.into()),
            unlock_for,
            unlocked_until: Arc::default(),
        }
    }

    pub fn unlock_for(&self) -> Duration {
        self.unlock_for
    }

    pub fn unlock(&self, user_id: u64, pin: &str, now: u64) -> UnlockOutcome {
        if pin != &*self.pin {
            warn!(user_id, "parent panel unlock refused: wrong pin");
            return UnlockOutcome::WrongPin;
        }

        let until = now.saturating_add(self.unlock_for.as_secs());
        let mut sessions = self.sessions();
        sessions.retain(|_, expires| *expires > now);
        sessions.insert(user_id, until);

        info!(user_id, until, "parent panel unlocked");
        UnlockOutcome::Unlocked { until }
    }

    pub fn is_unlocked(&self, user_id: u64, now: u64) -> bool {
        self.sessions()
            .get(&user_id)
            .is_some_and(|until| *until > now)
    }

    /// Close the panel. Returns whether it was open.
    pub fn lock(&self, user_id: u64, now: u64) -> bool {
        let was_open = self
            .sessions()
            .remove(&user_id)
            .is_some_and(|until| until > now);
        if was_open {
            info!(user_id, "parent panel locked");
        }
        was_open
    }

    fn sessions(&self) -> MutexGuard<'_, HashMap<u64, u64>> {
        self.unlocked_until
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{ParentGate, UnlockOutcome};

    fn gate() -> ParentGate {
        ParentGate::new("1234", Duration::from_secs(600))
    }

    #[test]
    fn correct_pin_opens_for_the_window() {
        let gate = gate();
        assert_eq!(gate.unlock(1, "1234", 1_000), UnlockOutcome::Unlocked { until: 1_600 });
        assert!(gate.is_unlocked(1, 1_000));
        assert!(gate.is_unlocked(1, 1_599));
        assert!(!gate.is_unlocked(1, 1_600));
    }

    #[test]
    fn wrong_pin_keeps_it_closed() {
        let gate = gate();
        assert_eq!(gate.unlock(1, "0000", 1_000), UnlockOutcome::WrongPin);
        assert!(!gate.is_unlocked(1, 1_000));
    }

    #[test]
    fn sessions_are_per_user() {
        let gate = gate();
        gate.unlock(1, "1234", 1_000);
        assert!(!gate.is_unlocked(2, 1_000));
    }

    #[test]
    fn lock_closes_early() {
        let gate = gate();
        gate.unlock(1, "1234", 1_000);
        assert!(gate.lock(1, 1_100));
        assert!(!gate.is_unlocked(1, 1_100));
        assert!(!gate.lock(1, 1_100));
    }

    #[test]
    fn clones_share_state() {
        let gate = gate();
        let other = gate.clone();
        gate.unlock(7, "1234", 0);
        assert!(other.is_unlocked(7, 10));
    }
}
