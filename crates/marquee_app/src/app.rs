use std::io::BufRead;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use marquee_core::{init, update, MovieDraft, Msg};
use marquee_engine::EngineConfig;
use marquee_logging::marquee_info;

use crate::effects::EffectRunner;
use crate::render;

/// Drives the core state machine: stdin commands and engine events become
/// messages, effects go back to the engine, dirty state re-renders.
pub fn run(endpoint_url: String) {
    marquee_info!("Starting marquee against {}", endpoint_url);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let quit = Arc::new(AtomicBool::new(false));
    spawn_stdin_reader(msg_tx.clone(), quit.clone());

    let runner = EffectRunner::new(msg_tx, EngineConfig::new(endpoint_url));

    // Mount-time load: one automatic fetch, no user action required.
    let (mut state, effects) = init();
    runner.enqueue(effects);
    state.consume_dirty();
    render::print_view(&state.view());

    while !quit.load(Ordering::Relaxed) {
        match msg_rx.recv_timeout(Duration::from_millis(50)) {
            Ok(msg) => {
                let (next, effects) = update(std::mem::take(&mut state), msg);
                state = next;
                runner.enqueue(effects);
                if state.consume_dirty() {
                    render::print_view(&state.view());
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }
}

enum Command {
    Dispatch(Vec<Msg>),
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    match line {
        "" => None,
        "q" | "quit" => Some(Command::Quit),
        "f" | "fetch" => Some(Command::Dispatch(vec![Msg::FetchClicked])),
        "c" | "cancel" => Some(Command::Dispatch(vec![Msg::CancelRetryClicked])),
        other => other.strip_prefix("add ").map(|rest| {
            Command::Dispatch(vec![
                Msg::DraftEdited(parse_draft(rest)),
                Msg::AddMovieSubmitted,
            ])
        }),
    }
}

/// Splits `title | opening crawl | release date`; missing parts stay empty.
fn parse_draft(rest: &str) -> MovieDraft {
    let mut parts = rest.splitn(3, '|').map(|part| part.trim().to_string());
    MovieDraft {
        title: parts.next().unwrap_or_default(),
        opening_text: parts.next().unwrap_or_default(),
        release_date: parts.next().unwrap_or_default(),
    }
}

fn spawn_stdin_reader(msg_tx: mpsc::Sender<Msg>, quit: Arc<AtomicBool>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match parse_command(&line) {
                Some(Command::Quit) => break,
                Some(Command::Dispatch(msgs)) => {
                    for msg in msgs {
                        if msg_tx.send(msg).is_err() {
                            return;
                        }
                    }
                }
                None => {}
            }
        }
        // Quit command or stdin EOF; wake the main loop so it can exit.
        quit.store(true, Ordering::Relaxed);
        let _ = msg_tx.send(Msg::NoOp);
    });
}
