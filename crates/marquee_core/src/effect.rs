use crate::state::MovieDraft;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue one HTTP GET against the configured films endpoint.
    StartFetch,
    /// Arm the retry timer for the given epoch after the configured delay.
    ScheduleRetry { epoch: u64 },
    /// Cancel any pending retry timer. Must take effect before the timer
    /// can fire again.
    CancelRetryTimer,
    /// Log the add-movie candidate; nothing is submitted anywhere.
    LogCandidate(MovieDraft),
}
