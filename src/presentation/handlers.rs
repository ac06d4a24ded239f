// HTTP request handlers
use crate::application::dashboard_service::{AppView, RoleView};
use crate::domain::navigation::DEFAULT_PATH;
use crate::domain::role::Role;
use crate::domain::user::User;
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use crate::presentation::json::ApiJson;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct PathQuery {
    pub path: Option<String>,
}

impl PathQuery {
    fn current_path(&self) -> &str {
        self.path.as_deref().unwrap_or(DEFAULT_PATH)
    }
}

/// Session record as sent by the client. The role stays a string until
/// `into_user` so an unknown value surfaces as `UnknownRole`.
#[derive(Deserialize)]
pub struct SessionPayload {
    pub id: String,
    pub name: String,
    pub role: String,
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl SessionPayload {
    pub fn into_user(self) -> Result<User, ApiError> {
        let role: Role = self.role.parse()?;
        Ok(User {
            avatar: self.avatar,
            ..User::new(self.id, self.name, role, self.email)
        })
    }
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeResponse {
    pub is_dark_mode: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewResponse {
    #[serde(flatten)]
    pub view: AppView,
    pub is_dark_mode: bool,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn get_session(State(state): State<Arc<AppState>>) -> Json<Option<User>> {
    Json(state.session.current().await)
}

/// Replace the session with the given record, or clear it with `null`
pub async fn put_session(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<Option<SessionPayload>>,
) -> Result<Json<Option<User>>, ApiError> {
    let user = payload.map(SessionPayload::into_user).transpose()?;
    state.session.set_session(user.clone()).await?;
    Ok(Json(user))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<User>, ApiError> {
    let user = state.session.login(&request.email, &request.password).await?;
    Ok(Json(user))
}

pub async fn logout(State(state): State<Arc<AppState>>) -> Result<StatusCode, ApiError> {
    state.session.logout().await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_theme(State(state): State<Arc<AppState>>) -> Json<ThemeResponse> {
    Json(ThemeResponse {
        is_dark_mode: state.theme.is_dark_mode().await,
    })
}

pub async fn toggle_theme(State(state): State<Arc<AppState>>) -> Result<Json<ThemeResponse>, ApiError> {
    let is_dark_mode = state.theme.toggle().await?;
    Ok(Json(ThemeResponse { is_dark_mode }))
}

/// Login screen or the dashboard for the current session's role
pub async fn current_view(
    Query(query): Query<PathQuery>,
    State(state): State<Arc<AppState>>,
) -> Json<ViewResponse> {
    let session = state.session.current().await;
    Json(ViewResponse {
        view: state.dashboards.current_view(session, query.current_path()),
        is_dark_mode: state.theme.is_dark_mode().await,
    })
}

pub async fn role_view(
    Path(role): Path<String>,
    Query(query): Query<PathQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<RoleView>, ApiError> {
    let role: Role = role.parse()?;
    Ok(Json(state.dashboards.resolve(role, query.current_path())))
}
