pub mod middleware;

use bunner_cors_policy::{CorsHandler, CorsOptions, HeaderList, Origin, cors};

#[derive(Clone)]
pub struct AppState {
    pub cors: CorsHandler,
    pub greeting: &'static str,
}

pub fn build_state() -> AppState {
    let options = CorsOptions {
        origin: Origin::list(["http://localhost:3000", "http://app.example.com"]),
        allowed_headers: HeaderList::list(["Content-Type", "X-Requested-With", "X-Example-Trace"]),
        exposed_headers: HeaderList::list(["X-Example-Trace"]),
        credentials: true,
        max_age: Some("600".into()),
        ..CorsOptions::default()
    };

    AppState {
        cors: cors(options),
        greeting: "Welcome to the Axum CORS example!",
    }
}
