// Router wiring
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    current_view, get_session, get_theme, health_check, login, logout, put_session, role_view,
    toggle_theme,
};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/session", get(get_session).put(put_session))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/theme", get(get_theme))
        .route("/theme/toggle", post(toggle_theme))
        .route("/view", get(current_view))
        .route("/roles/:role/view", get(role_view))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
