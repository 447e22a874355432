/// Display-ready projection of one movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRowView {
    pub id: i64,
    pub title: String,
    pub opening_text: String,
    pub release_date: String,
}

/// What the list area should show, in payload order when non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListBody {
    Loading,
    #[default]
    Empty,
    Movies(Vec<MovieRowView>),
}

/// Read-only projection of `AppState`, recomputed on every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub fetch_label: &'static str,
    pub fetch_enabled: bool,
    pub cancel_retry_visible: bool,
    pub error_message: Option<String>,
    pub body: ListBody,
    pub dirty: bool,
}

impl Default for AppViewModel {
    fn default() -> Self {
        Self {
            fetch_label: "Fetch Movies",
            fetch_enabled: true,
            cancel_retry_visible: false,
            error_message: None,
            body: ListBody::default(),
            dirty: false,
        }
    }
}
