pub mod health;
pub mod screener;
pub mod signals;

use crate::AppState;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/api/signals", signals::router())
        .merge(screener::router())
}

/// Build the full application with state and middleware applied.
pub fn app(state: AppState) -> Router {
    let mut app = router().layer(TraceLayer::new_for_http());

    if state.config.cors_allow_any {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app.with_state(state)
}
