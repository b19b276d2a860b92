use chatadmin_application::WidgetRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

/// Incoming payload for widget creation.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/create-widget-request.ts"
)]
pub struct CreateWidgetRequest {
    pub name: String,
    /// Initial configuration; partial shapes fail open into defaults.
    #[ts(type = "unknown | null")]
    pub config: Option<Value>,
}

/// Incoming payload for a wholesale configuration replacement.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/replace-config-request.ts"
)]
pub struct ReplaceConfigRequest {
    #[ts(type = "unknown")]
    pub config: Value,
}

/// Incoming payload for a single editor-surface field update.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/update-config-field-request.ts"
)]
pub struct UpdateConfigFieldRequest {
    /// camelCase key of the section field to replace.
    pub key: String,
    #[ts(type = "unknown")]
    pub value: Value,
}

/// API representation of a stored widget.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/widget-response.ts"
)]
pub struct WidgetResponse {
    pub widget_id: String,
    pub name: String,
    #[ts(type = "unknown")]
    pub config: Value,
    pub created_at: String,
    pub updated_at: String,
}

impl From<WidgetRecord> for WidgetResponse {
    fn from(record: WidgetRecord) -> Self {
        Self {
            widget_id: record.widget_id().to_string(),
            name: record.name().as_str().to_owned(),
            config: serde_json::to_value(record.config()).unwrap_or(Value::Null),
            created_at: record.created_at().to_rfc3339(),
            updated_at: record.updated_at().to_rfc3339(),
        }
    }
}
