use crate::state::{Movie, MovieDraft};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User clicked Fetch Movies (or the app requested the mount-time load).
    FetchClicked,
    /// A scheduled retry timer elapsed. Stale epochs are ignored.
    RetryDue { epoch: u64 },
    /// The in-flight fetch completed with a transformed movie list.
    FetchSucceeded { movies: Vec<Movie> },
    /// The in-flight fetch failed (status, transport or parse failure).
    FetchFailed,
    /// User clicked Cancel Retry.
    CancelRetryClicked,
    /// User edited the add-movie form.
    DraftEdited(MovieDraft),
    /// User submitted the add-movie form; the candidate is only logged.
    AddMovieSubmitted,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
