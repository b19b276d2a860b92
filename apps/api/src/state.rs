use chatadmin_application::{EmbedService, WidgetService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub widget_service: WidgetService,
    pub embed_service: EmbedService,
}
