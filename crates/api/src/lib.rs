pub mod error;
pub mod routes;
pub mod state;

use axum::Router;

pub use state::AppState;

pub fn app() -> Router {
    app_with_state(AppState::default())
}

pub fn app_with_state(state: AppState) -> Router {
    routes::router(state)
}
