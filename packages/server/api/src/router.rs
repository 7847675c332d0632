use crate::handlers;
use crate::state::AppState;
use axum::Router;

pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(handlers::symptoms::router())
        .merge(handlers::disorders::router())
        .merge(handlers::admin::router())
}
