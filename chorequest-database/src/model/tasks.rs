use serde::{Deserialize, Serialize};

use chorequest_progress::economy::TaskAward;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub points: u64,
    /// Gregorian `YYYY-MM-DD`.
    pub task_date: String,
    pub deadline: String,
    pub is_done: bool,
}

impl Task {
    pub fn award(&self) -> TaskAward {
        TaskAward::for_points(self.points)
    }
}

#[derive(Clone, Debug)]
pub struct NewTask<'a> {
    pub title: &'a str,
    pub points: u64,
    pub task_date: &'a str,
    pub deadline: &'a str,
}

/// Result of flipping a task's done flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskToggle {
    pub task: Task,
    pub xp_before: u64,
    pub xp_after: u64,
    pub coins_after: u64,
}
