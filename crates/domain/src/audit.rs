use serde::{Deserialize, Serialize};

/// Stable identifiers for audited widget operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// A widget was created.
    WidgetCreated,
    /// A widget configuration was replaced wholesale.
    WidgetConfigReplaced,
    /// A single configuration field was updated.
    WidgetFieldUpdated,
    /// A theme template was applied to a widget.
    WidgetThemeApplied,
    /// A widget was deleted.
    WidgetDeleted,
}

impl AuditAction {
    /// Returns the stable storage value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WidgetCreated => "widget_created",
            Self::WidgetConfigReplaced => "widget_config_replaced",
            Self::WidgetFieldUpdated => "widget_field_updated",
            Self::WidgetThemeApplied => "widget_theme_applied",
            Self::WidgetDeleted => "widget_deleted",
        }
    }
}
