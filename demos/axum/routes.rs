use axum::{extract::State, response::IntoResponse};

use crate::cors::AppState;

pub async fn greet(State(state): State<AppState>) -> impl IntoResponse {
    ([("X-Example-Trace", "greet")], state.greeting)
}
