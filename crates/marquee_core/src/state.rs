use crate::view_model::{AppViewModel, ListBody, MovieRowView};

/// The fixed user-facing message shown after any failed fetch attempt.
pub const FETCH_ERROR_MESSAGE: &str = "Something went wrong... Retrying";

/// One display-ready film entry, produced from a raw API record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub opening_text: String,
    pub release_date: String,
}

/// Candidate entry from the "add movie" form. Submission only logs it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MovieDraft {
    pub title: String,
    pub opening_text: String,
    pub release_date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    #[default]
    Idle,
    Loading,
    Success,
    Failed,
}

/// Full observable state of the fetch controller.
///
/// Only `update` mutates this; views get read-only projections via `view()`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    phase: FetchPhase,
    movies: Vec<Movie>,
    error_message: Option<String>,
    retrying: bool,
    retry_epoch: u64,
    draft: MovieDraft,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn retrying(&self) -> bool {
        self.retrying
    }

    /// Generation counter for scheduled retries. A timer fire carrying a
    /// stale epoch is ignored by `update`.
    pub fn retry_epoch(&self) -> u64 {
        self.retry_epoch
    }

    pub fn draft(&self) -> &MovieDraft {
        &self.draft
    }

    /// Returns whether a re-render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        let loading = self.phase == FetchPhase::Loading;
        let body = if loading {
            ListBody::Loading
        } else if self.movies.is_empty() {
            ListBody::Empty
        } else {
            ListBody::Movies(
                self.movies
                    .iter()
                    .map(|movie| MovieRowView {
                        id: movie.id,
                        title: movie.title.clone(),
                        opening_text: movie.opening_text.clone(),
                        release_date: movie.release_date.clone(),
                    })
                    .collect(),
            )
        };

        AppViewModel {
            fetch_label: if loading { "Fetching..." } else { "Fetch Movies" },
            fetch_enabled: !loading && !self.retrying,
            cancel_retry_visible: self.retrying,
            error_message: self.error_message.clone(),
            body,
            dirty: self.dirty,
        }
    }

    pub(crate) fn begin_loading(&mut self) {
        self.phase = FetchPhase::Loading;
        self.error_message = None;
        self.mark_dirty();
    }

    /// Replaces the movie list wholesale; no incremental merge.
    pub(crate) fn apply_success(&mut self, movies: Vec<Movie>) {
        self.phase = FetchPhase::Success;
        self.movies = movies;
        self.error_message = None;
        self.retrying = false;
        self.mark_dirty();
    }

    pub(crate) fn apply_failure(&mut self) {
        self.phase = FetchPhase::Failed;
        self.error_message = Some(FETCH_ERROR_MESSAGE.to_string());
        self.retrying = true;
        self.retry_epoch += 1;
        self.mark_dirty();
    }

    /// Disarms the retry loop. The epoch bump invalidates any timer that
    /// already fired but has not been processed yet.
    pub(crate) fn disarm_retry(&mut self) {
        self.retrying = false;
        self.retry_epoch += 1;
        self.mark_dirty();
    }

    pub(crate) fn set_draft(&mut self, draft: MovieDraft) {
        self.draft = draft;
        self.mark_dirty();
    }

    pub(crate) fn take_draft(&mut self) -> MovieDraft {
        self.mark_dirty();
        std::mem::take(&mut self.draft)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
