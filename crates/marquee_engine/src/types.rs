use std::fmt;

use serde::Deserialize;

/// Correlates one outbound request with its completion event in the logs.
pub type RequestId = u64;

/// Wire shape of the films endpoint response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FilmsPayload {
    pub results: Vec<FilmRecord>,
}

/// One raw entry from the upstream results array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FilmRecord {
    pub episode_id: i64,
    pub title: String,
    pub opening_crawl: String,
    pub release_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The single in-flight request finished, one way or the other.
    FetchCompleted {
        request_id: RequestId,
        result: Result<Vec<FilmRecord>, FetchError>,
    },
    /// A scheduled retry delay elapsed without being cancelled.
    RetryElapsed { epoch: u64 },
}

/// Failure of one fetch attempt. Kinds stay fine-grained here; the core
/// collapses them into a single user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    MalformedBody,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::MalformedBody => write!(f, "malformed body"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
