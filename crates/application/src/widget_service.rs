use std::sync::Arc;

use chatadmin_core::{AppError, AppResult, NonEmptyString, WidgetId};
use chatadmin_domain::{AuditAction, ThemeTemplate, WidgetConfig, builtin_templates, current_theme};
use chrono::Utc;
use serde_json::Value;

use crate::widget_ports::{
    AuditEvent, AuditRepository, CreateWidgetInput, WidgetRecord, WidgetRepository,
};

/// Application service for widget configuration management.
#[derive(Clone)]
pub struct WidgetService {
    repository: Arc<dyn WidgetRepository>,
    audit_repository: Arc<dyn AuditRepository>,
}

impl WidgetService {
    /// Creates a new widget service from repository implementations.
    #[must_use]
    pub fn new(
        repository: Arc<dyn WidgetRepository>,
        audit_repository: Arc<dyn AuditRepository>,
    ) -> Self {
        Self {
            repository,
            audit_repository,
        }
    }

    /// Creates a widget with the provided or default configuration.
    pub async fn create_widget(&self, input: CreateWidgetInput) -> AppResult<WidgetRecord> {
        let name = NonEmptyString::new(input.name)?;
        let config = input.config.unwrap_or_default().normalized();

        let record = WidgetRecord::new(WidgetId::new(), name, config, Utc::now());
        self.repository.save_widget(record.clone()).await?;

        self.append_audit(
            AuditAction::WidgetCreated,
            record.widget_id(),
            Some(format!("created widget '{}'", record.name().as_str())),
        )
        .await?;

        Ok(record)
    }

    /// Returns every stored widget.
    pub async fn list_widgets(&self) -> AppResult<Vec<WidgetRecord>> {
        self.repository.list_widgets().await
    }

    /// Looks up a single widget by identifier.
    pub async fn find_widget(&self, widget_id: WidgetId) -> AppResult<Option<WidgetRecord>> {
        self.repository.find_widget(widget_id).await
    }

    /// Replaces a widget configuration wholesale.
    pub async fn replace_config(
        &self,
        widget_id: WidgetId,
        config: WidgetConfig,
    ) -> AppResult<WidgetRecord> {
        let record = self.require_widget(widget_id).await?;
        let updated = record.with_config(config.normalized(), Utc::now());
        self.repository.replace_widget(updated.clone()).await?;

        self.append_audit(
            AuditAction::WidgetConfigReplaced,
            widget_id,
            Some(format!(
                "replaced configuration of widget '{}'",
                updated.name().as_str()
            )),
        )
        .await?;

        Ok(updated)
    }

    /// Applies a single editor-surface field update.
    ///
    /// The update is immutable: exactly one section field is replaced and
    /// the stored record is swapped for the new configuration snapshot.
    pub async fn update_config_field(
        &self,
        widget_id: WidgetId,
        key: &str,
        value: Value,
    ) -> AppResult<WidgetRecord> {
        let record = self.require_widget(widget_id).await?;
        let config = record.config().apply_update(key, value)?;
        let updated = record.with_config(config, Utc::now());
        self.repository.replace_widget(updated.clone()).await?;

        self.append_audit(
            AuditAction::WidgetFieldUpdated,
            widget_id,
            Some(format!("updated configuration key '{key}'")),
        )
        .await?;

        Ok(updated)
    }

    /// Applies a catalog theme template, overwriting the appearance section
    /// wholesale.
    pub async fn apply_theme(
        &self,
        widget_id: WidgetId,
        theme_id: &str,
    ) -> AppResult<WidgetRecord> {
        let templates = builtin_templates();
        let template = templates
            .iter()
            .find(|template| template.id() == theme_id)
            .ok_or_else(|| {
                AppError::NotFound(format!("theme template '{theme_id}' does not exist"))
            })?;

        let record = self.require_widget(widget_id).await?;
        let updated = record.with_config(template.apply_to(record.config()), Utc::now());
        self.repository.replace_widget(updated.clone()).await?;

        self.append_audit(
            AuditAction::WidgetThemeApplied,
            widget_id,
            Some(format!("applied theme template '{theme_id}'")),
        )
        .await?;

        Ok(updated)
    }

    /// Returns the catalog template a widget currently corresponds to.
    ///
    /// Heuristic display aid only: exact match on primary color, secondary
    /// color, and font family.
    pub async fn current_theme(&self, widget_id: WidgetId) -> AppResult<Option<ThemeTemplate>> {
        let record = self.require_widget(widget_id).await?;
        Ok(current_theme(record.config(), &builtin_templates()).cloned())
    }

    /// Deletes a widget by identifier.
    pub async fn delete_widget(&self, widget_id: WidgetId) -> AppResult<()> {
        self.repository.delete_widget(widget_id).await?;

        self.append_audit(AuditAction::WidgetDeleted, widget_id, None)
            .await
    }

    async fn require_widget(&self, widget_id: WidgetId) -> AppResult<WidgetRecord> {
        self.repository
            .find_widget(widget_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("widget '{widget_id}' does not exist")))
    }

    async fn append_audit(
        &self,
        action: AuditAction,
        widget_id: WidgetId,
        detail: Option<String>,
    ) -> AppResult<()> {
        self.audit_repository
            .append_event(AuditEvent {
                action,
                resource_id: widget_id.to_string(),
                detail,
                recorded_at: Utc::now(),
            })
            .await
    }
}
