use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chatadmin_application::CreateWidgetInput;
use chatadmin_core::{AppError, WidgetId};
use chatadmin_domain::WidgetConfig;
use serde_json::Value;

use crate::dto::{
    CreateWidgetRequest, ReplaceConfigRequest, UpdateConfigFieldRequest, WidgetResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_widgets_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<WidgetResponse>>> {
    let widgets = state
        .widget_service
        .list_widgets()
        .await?
        .into_iter()
        .map(WidgetResponse::from)
        .collect();

    Ok(Json(widgets))
}

pub async fn create_widget_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateWidgetRequest>,
) -> ApiResult<(StatusCode, Json<WidgetResponse>)> {
    let config = payload.config.map(parse_config).transpose()?;
    let record = state
        .widget_service
        .create_widget(CreateWidgetInput {
            name: payload.name,
            config,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(WidgetResponse::from(record))))
}

pub async fn get_widget_handler(
    State(state): State<AppState>,
    Path(widget_id): Path<String>,
) -> ApiResult<Json<WidgetResponse>> {
    let widget_id = WidgetId::from_str(widget_id.as_str())?;
    let record = state
        .widget_service
        .find_widget(widget_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("widget '{widget_id}' does not exist")))?;

    Ok(Json(WidgetResponse::from(record)))
}

pub async fn replace_config_handler(
    State(state): State<AppState>,
    Path(widget_id): Path<String>,
    Json(payload): Json<ReplaceConfigRequest>,
) -> ApiResult<Json<WidgetResponse>> {
    let widget_id = WidgetId::from_str(widget_id.as_str())?;
    let config = parse_config(payload.config)?;
    let record = state
        .widget_service
        .replace_config(widget_id, config)
        .await?;

    Ok(Json(WidgetResponse::from(record)))
}

pub async fn update_config_field_handler(
    State(state): State<AppState>,
    Path(widget_id): Path<String>,
    Json(payload): Json<UpdateConfigFieldRequest>,
) -> ApiResult<Json<WidgetResponse>> {
    let widget_id = WidgetId::from_str(widget_id.as_str())?;
    let record = state
        .widget_service
        .update_config_field(widget_id, payload.key.as_str(), payload.value)
        .await?;

    Ok(Json(WidgetResponse::from(record)))
}

pub async fn delete_widget_handler(
    State(state): State<AppState>,
    Path(widget_id): Path<String>,
) -> ApiResult<StatusCode> {
    let widget_id = WidgetId::from_str(widget_id.as_str())?;
    state.widget_service.delete_widget(widget_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

fn parse_config(value: Value) -> Result<WidgetConfig, AppError> {
    serde_json::from_value(value)
        .map_err(|error| AppError::Validation(format!("invalid configuration payload: {error}")))
}
