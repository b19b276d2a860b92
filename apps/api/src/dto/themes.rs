use chatadmin_domain::ThemeTemplate;
use serde::Serialize;
use serde_json::Value;
use ts_rs::TS;

/// API representation of a catalog theme template.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/theme-template-response.ts"
)]
pub struct ThemeTemplateResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    #[ts(type = "unknown")]
    pub appearance: Value,
    pub tags: Vec<String>,
}

impl From<ThemeTemplate> for ThemeTemplateResponse {
    fn from(template: ThemeTemplate) -> Self {
        let category = serde_json::to_value(template.category())
            .ok()
            .and_then(|value| value.as_str().map(ToOwned::to_owned))
            .unwrap_or_default();

        Self {
            id: template.id().to_owned(),
            name: template.name().to_owned(),
            description: template.description().to_owned(),
            category,
            appearance: serde_json::to_value(template.appearance()).unwrap_or(Value::Null),
            tags: template.tags().to_vec(),
        }
    }
}

/// API response for the current-theme heuristic match.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/current-theme-response.ts"
)]
pub struct CurrentThemeResponse {
    pub theme: Option<ThemeTemplateResponse>,
}
