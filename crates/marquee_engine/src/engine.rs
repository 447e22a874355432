use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use marquee_logging::marquee_debug;
use tokio_util::sync::CancellationToken;

use crate::config::EngineConfig;
use crate::fetch::{Fetcher, ReqwestFetcher};
use crate::{EngineEvent, RequestId};

enum EngineCommand {
    StartFetch { request_id: RequestId },
    ScheduleRetry { epoch: u64 },
    CancelRetry,
}

/// Handle to the engine's command loop, which runs on a background thread
/// hosting its own tokio runtime. Commands are processed serially, so a
/// cancel issued after a schedule always reaches the pending timer.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Mutex<mpsc::Receiver<EngineEvent>>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let fetcher = Arc::new(ReqwestFetcher::new(config.fetch.clone()));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            // At most one retry timer exists; arming a new one replaces it.
            let mut retry_timer: Option<CancellationToken> = None;

            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::StartFetch { request_id } => {
                        let fetcher = fetcher.clone();
                        let event_tx = event_tx.clone();
                        let url = config.endpoint_url.clone();
                        runtime.spawn(async move {
                            let result = fetcher.fetch(request_id, &url).await;
                            let _ = event_tx.send(EngineEvent::FetchCompleted { request_id, result });
                        });
                    }
                    EngineCommand::ScheduleRetry { epoch } => {
                        if let Some(pending) = retry_timer.take() {
                            pending.cancel();
                        }
                        let token = CancellationToken::new();
                        retry_timer = Some(token.clone());
                        let delay = config.retry_interval;
                        let event_tx = event_tx.clone();
                        marquee_debug!("Retry armed epoch={} delay={:?}", epoch, delay);
                        runtime.spawn(async move {
                            tokio::select! {
                                _ = token.cancelled() => {}
                                _ = tokio::time::sleep(delay) => {
                                    let _ = event_tx.send(EngineEvent::RetryElapsed { epoch });
                                }
                            }
                        });
                    }
                    EngineCommand::CancelRetry => {
                        if let Some(pending) = retry_timer.take() {
                            pending.cancel();
                            marquee_debug!("Pending retry timer cancelled");
                        }
                    }
                }
            }
        });

        Self {
            cmd_tx,
            event_rx: Mutex::new(event_rx),
        }
    }

    /// Issues exactly one GET against the configured endpoint.
    pub fn start_fetch(&self, request_id: RequestId) {
        let _ = self.cmd_tx.send(EngineCommand::StartFetch { request_id });
    }

    /// Arms the retry timer for `epoch`, replacing any pending timer.
    pub fn schedule_retry(&self, epoch: u64) {
        let _ = self.cmd_tx.send(EngineCommand::ScheduleRetry { epoch });
    }

    /// Cancels the pending retry timer, if any. The timer will not fire
    /// after this command is processed. Does not abort an in-flight fetch.
    pub fn cancel_retry(&self) {
        let _ = self.cmd_tx.send(EngineCommand::CancelRetry);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}
