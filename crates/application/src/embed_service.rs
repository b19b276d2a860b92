use std::sync::Arc;

use chatadmin_core::{AppError, AppResult, WidgetId};
use chatadmin_domain::WidgetConfig;

use crate::embed::{EmbedEnvironment, EmbedTarget, generate_embed};
use crate::widget_ports::WidgetRepository;

/// Application service generating embed snippets for stored or unsaved
/// widget configurations.
#[derive(Clone)]
pub struct EmbedService {
    repository: Arc<dyn WidgetRepository>,
}

impl EmbedService {
    /// Creates a new embed service from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn WidgetRepository>) -> Self {
        Self { repository }
    }

    /// Generates a snippet for a stored widget.
    pub async fn embed_code(
        &self,
        widget_id: WidgetId,
        target: EmbedTarget,
        environment: EmbedEnvironment,
    ) -> AppResult<String> {
        let record = self
            .repository
            .find_widget(widget_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("widget '{widget_id}' does not exist")))?;

        generate_embed(&widget_id, record.config(), target, environment)
    }

    /// Generates a snippet for an unsaved configuration, so the configurator
    /// can show live embed code while editing.
    pub fn preview_embed_code(
        &self,
        widget_id: WidgetId,
        config: &WidgetConfig,
        target: EmbedTarget,
        environment: EmbedEnvironment,
    ) -> AppResult<String> {
        generate_embed(&widget_id, config, target, environment)
    }
}
