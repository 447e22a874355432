//! Marquee core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, FetchPhase, Movie, MovieDraft, FETCH_ERROR_MESSAGE};
pub use update::{init, update};
pub use view_model::{AppViewModel, ListBody, MovieRowView};
