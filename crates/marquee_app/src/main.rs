mod app;
mod effects;
mod logging;
mod render;

/// Public films endpoint used when no URL is given on the command line.
const DEFAULT_ENDPOINT: &str = "https://swapi.dev/api/films/";

fn main() {
    logging::initialize(logging::LogDestination::File);

    let endpoint_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    app::run(endpoint_url);
}
