use std::sync::Once;

use marquee_core::{init, update, AppState, Effect, FetchPhase, ListBody, Movie, Msg};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(marquee_logging::initialize_for_tests);
}

fn a_new_hope() -> Movie {
    Movie {
        id: 4,
        title: "A New Hope".to_string(),
        opening_text: "It is a period...".to_string(),
        release_date: "1977-05-25".to_string(),
    }
}

#[test]
fn init_triggers_exactly_one_fetch() {
    init_logging();
    let (state, effects) = init();

    assert_eq!(state.phase(), FetchPhase::Loading);
    assert_eq!(effects, vec![Effect::StartFetch]);
}

#[test]
fn fetch_clicked_starts_loading_and_emits_start_fetch() {
    init_logging();
    let state = AppState::new();
    let (state, effects) = update(state, Msg::FetchClicked);

    assert_eq!(state.phase(), FetchPhase::Loading);
    assert_eq!(state.error_message(), None);
    assert_eq!(effects, vec![Effect::StartFetch]);
}

#[test]
fn fetch_clicked_while_loading_is_rejected() {
    init_logging();
    let (state, _effects) = init();
    let before = state.clone();

    let (next, effects) = update(state, Msg::FetchClicked);

    assert_eq!(next, before);
    assert!(effects.is_empty());
}

#[test]
fn success_replaces_movies_wholesale() {
    init_logging();
    let (state, _effects) = init();
    let (state, _effects) = update(
        state,
        Msg::FetchSucceeded {
            movies: vec![a_new_hope()],
        },
    );
    assert_eq!(state.movies(), &[a_new_hope()]);

    // A second successful fetch overwrites, never merges.
    let replacement = Movie {
        id: 5,
        title: "The Empire Strikes Back".to_string(),
        opening_text: "It is a dark time...".to_string(),
        release_date: "1980-05-17".to_string(),
    };
    let (state, _effects) = update(state, Msg::FetchClicked);
    let (state, _effects) = update(
        state,
        Msg::FetchSucceeded {
            movies: vec![replacement.clone()],
        },
    );
    assert_eq!(state.movies(), &[replacement]);
}

#[test]
fn success_preserves_payload_order() {
    init_logging();
    let movies: Vec<Movie> = (1..=6)
        .map(|episode| Movie {
            id: episode,
            title: format!("Episode {episode}"),
            opening_text: String::new(),
            release_date: String::new(),
        })
        .collect();

    let (state, _effects) = init();
    let (state, _effects) = update(
        state,
        Msg::FetchSucceeded {
            movies: movies.clone(),
        },
    );

    assert_eq!(state.movies(), movies.as_slice());
}

#[test]
fn success_clears_error_and_disarms_retry() {
    init_logging();
    let (state, _effects) = init();
    let (state, _effects) = update(state, Msg::FetchFailed);
    assert!(state.retrying());

    let epoch = state.retry_epoch();
    let (state, effects) = update(state, Msg::RetryDue { epoch });
    assert_eq!(effects, vec![Effect::StartFetch]);

    let (state, effects) = update(
        state,
        Msg::FetchSucceeded {
            movies: vec![a_new_hope()],
        },
    );

    assert_eq!(state.phase(), FetchPhase::Success);
    assert_eq!(state.error_message(), None);
    assert!(!state.retrying());
    assert_eq!(effects, vec![Effect::CancelRetryTimer]);
}

#[test]
fn empty_result_renders_no_movies_indicator() {
    init_logging();
    let (state, _effects) = init();
    let (mut state, _effects) = update(state, Msg::FetchSucceeded { movies: Vec::new() });

    assert!(state.consume_dirty());
    assert_eq!(state.view().body, ListBody::Empty);
}
