use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use marquee_core::{Effect, Movie, Msg};
use marquee_engine::{EngineConfig, EngineEvent, EngineHandle, FilmRecord};
use marquee_logging::{marquee_info, marquee_warn};

/// Executes core effects against the engine and pumps engine events back
/// into the message channel.
pub struct EffectRunner {
    engine: Arc<EngineHandle>,
    next_request_id: AtomicU64,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>, config: EngineConfig) -> Self {
        let engine = Arc::new(EngineHandle::new(config));
        let runner = Self {
            engine,
            next_request_id: AtomicU64::new(1),
        };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartFetch => {
                    let request_id = self.next_request_id.fetch_add(1, Ordering::Relaxed);
                    marquee_info!("StartFetch request_id={}", request_id);
                    self.engine.start_fetch(request_id);
                }
                Effect::ScheduleRetry { epoch } => {
                    self.engine.schedule_retry(epoch);
                }
                Effect::CancelRetryTimer => {
                    self.engine.cancel_retry();
                }
                Effect::LogCandidate(draft) => {
                    // Mirrors the reference behavior: the candidate is only
                    // logged, never submitted anywhere.
                    marquee_info!(
                        "Add movie candidate title={:?} opening_text={:?} release_date={:?}",
                        draft.title,
                        draft.opening_text,
                        draft.release_date
                    );
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                let msg = match event {
                    EngineEvent::FetchCompleted { request_id, result } => match result {
                        Ok(records) => Msg::FetchSucceeded {
                            movies: records.into_iter().map(map_movie).collect(),
                        },
                        Err(err) => {
                            marquee_warn!("Fetch request_id={} failed: {}", request_id, err);
                            Msg::FetchFailed
                        }
                    },
                    EngineEvent::RetryElapsed { epoch } => Msg::RetryDue { epoch },
                };
                if msg_tx.send(msg).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_movie(record: FilmRecord) -> Movie {
    Movie {
        id: record.episode_id,
        title: record.title,
        opening_text: record.opening_crawl,
        release_date: record.release_date,
    }
}
