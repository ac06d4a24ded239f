// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::application::session_store::SessionStore;
use crate::application::theme_store::ThemeStore;

pub struct AppState {
    pub session: SessionStore,
    pub theme: ThemeStore,
    pub dashboards: DashboardService,
}
