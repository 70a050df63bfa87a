// Application state for HTTP handlers
use crate::application::overview_service::OverviewService;
use crate::application::view_service::ViewService;

#[derive(Clone)]
pub struct AppState {
    pub overview_service: OverviewService,
    pub view_service: ViewService,
}
