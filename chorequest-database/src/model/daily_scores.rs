#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DailyScore {
    /// Gregorian `YYYY-MM-DD`.
    pub date: String,
    pub total_points: u64,
}
