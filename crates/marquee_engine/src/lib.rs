//! Marquee engine: HTTP fetching and retry-timer effect execution.
mod config;
mod engine;
mod fetch;
mod types;

pub use config::EngineConfig;
pub use engine::EngineHandle;
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use types::{EngineEvent, FailureKind, FetchError, FilmRecord, FilmsPayload, RequestId};
