use crate::{AppState, Effect, FetchPhase, Msg};

/// Initial state plus the mount-time fetch: the movie list is requested
/// exactly once on creation, with no user action required.
pub fn init() -> (AppState, Vec<Effect>) {
    let mut state = AppState::new();
    state.begin_loading();
    (state, vec![Effect::StartFetch])
}

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FetchClicked => {
            // Policy: requests are serialized. A trigger while a fetch is
            // in flight is rejected rather than racing a second request.
            if state.phase() == FetchPhase::Loading {
                return (state, Vec::new());
            }

            let mut effects = Vec::new();
            if state.retrying() {
                // A manual trigger while a retry is armed takes over from
                // the scheduled attempt instead of racing it.
                state.disarm_retry();
                effects.push(Effect::CancelRetryTimer);
            }
            state.begin_loading();
            effects.push(Effect::StartFetch);
            effects
        }
        Msg::RetryDue { epoch } => {
            // The arm flag and epoch are checked at fire time, not only at
            // schedule time, so a stale timer can never start a fetch.
            if !state.retrying()
                || epoch != state.retry_epoch()
                || state.phase() == FetchPhase::Loading
            {
                return (state, Vec::new());
            }
            state.begin_loading();
            vec![Effect::StartFetch]
        }
        Msg::FetchSucceeded { movies } => {
            state.apply_success(movies);
            // Success disarms the loop; cancel the handle even if no timer
            // is pending, the engine treats this as a no-op.
            vec![Effect::CancelRetryTimer]
        }
        Msg::FetchFailed => {
            state.apply_failure();
            vec![Effect::ScheduleRetry {
                epoch: state.retry_epoch(),
            }]
        }
        Msg::CancelRetryClicked => {
            if !state.retrying() {
                return (state, Vec::new());
            }
            state.disarm_retry();
            vec![Effect::CancelRetryTimer]
        }
        Msg::DraftEdited(draft) => {
            state.set_draft(draft);
            Vec::new()
        }
        Msg::AddMovieSubmitted => {
            let draft = state.take_draft();
            vec![Effect::LogCandidate(draft)]
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
