use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use chatadmin_core::WidgetId;
use chatadmin_domain::builtin_templates;

use crate::dto::{CurrentThemeResponse, ThemeTemplateResponse, WidgetResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_themes_handler() -> Json<Vec<ThemeTemplateResponse>> {
    let templates = builtin_templates()
        .into_iter()
        .map(ThemeTemplateResponse::from)
        .collect();

    Json(templates)
}

pub async fn current_theme_handler(
    State(state): State<AppState>,
    Path(widget_id): Path<String>,
) -> ApiResult<Json<CurrentThemeResponse>> {
    let widget_id = WidgetId::from_str(widget_id.as_str())?;
    let theme = state
        .widget_service
        .current_theme(widget_id)
        .await?
        .map(ThemeTemplateResponse::from);

    Ok(Json(CurrentThemeResponse { theme }))
}

pub async fn apply_theme_handler(
    State(state): State<AppState>,
    Path((widget_id, theme_id)): Path<(String, String)>,
) -> ApiResult<Json<WidgetResponse>> {
    let widget_id = WidgetId::from_str(widget_id.as_str())?;
    let record = state
        .widget_service
        .apply_theme(widget_id, theme_id.as_str())
        .await?;

    Ok(Json(WidgetResponse::from(record)))
}
