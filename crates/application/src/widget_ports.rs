use async_trait::async_trait;
use chatadmin_core::{AppResult, NonEmptyString, WidgetId};
use chatadmin_domain::{AuditAction, WidgetConfig};
use chrono::{DateTime, Utc};

/// A stored widget and its configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetRecord {
    widget_id: WidgetId,
    name: NonEmptyString,
    config: WidgetConfig,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl WidgetRecord {
    /// Creates a widget record.
    #[must_use]
    pub fn new(
        widget_id: WidgetId,
        name: NonEmptyString,
        config: WidgetConfig,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            widget_id,
            name,
            config,
            created_at,
            updated_at: created_at,
        }
    }

    /// Returns the widget identifier.
    #[must_use]
    pub fn widget_id(&self) -> WidgetId {
        self.widget_id
    }

    /// Returns the widget display name.
    #[must_use]
    pub fn name(&self) -> &NonEmptyString {
        &self.name
    }

    /// Returns the widget configuration.
    #[must_use]
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-update timestamp.
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns a copy carrying a replacement configuration.
    #[must_use]
    pub fn with_config(&self, config: WidgetConfig, updated_at: DateTime<Utc>) -> Self {
        Self {
            widget_id: self.widget_id,
            name: self.name.clone(),
            config,
            created_at: self.created_at,
            updated_at,
        }
    }
}

/// Input payload for widget creation.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateWidgetInput {
    /// Widget display name.
    pub name: String,
    /// Initial configuration; defaults apply when omitted.
    pub config: Option<WidgetConfig>,
}

/// Repository port for widget persistence.
#[async_trait]
pub trait WidgetRepository: Send + Sync {
    /// Saves a new widget record.
    async fn save_widget(&self, record: WidgetRecord) -> AppResult<()>;

    /// Lists all widget records.
    async fn list_widgets(&self) -> AppResult<Vec<WidgetRecord>>;

    /// Looks up a single widget record by identifier.
    async fn find_widget(&self, widget_id: WidgetId) -> AppResult<Option<WidgetRecord>>;

    /// Replaces an existing widget record.
    async fn replace_widget(&self, record: WidgetRecord) -> AppResult<()>;

    /// Deletes a widget record by identifier.
    async fn delete_widget(&self, widget_id: WidgetId) -> AppResult<()>;
}

/// Canonical audit event payload emitted by application use-cases.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEvent {
    /// Stable action identifier.
    pub action: AuditAction,
    /// Stable resource identifier.
    pub resource_id: String,
    /// Optional human-readable detail payload.
    pub detail: Option<String>,
    /// Moment the event was recorded.
    pub recorded_at: DateTime<Utc>,
}

/// Repository port for append-only audit events.
#[async_trait]
pub trait AuditRepository: Send + Sync {
    /// Appends a single audit event.
    async fn append_event(&self, event: AuditEvent) -> AppResult<()>;
}
