use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, Query, State};
use chatadmin_application::{EmbedEnvironment, EmbedTarget};
use chatadmin_core::{AppError, WidgetId};
use chatadmin_domain::{WidgetConfig, validate_widget_config};

use crate::dto::{
    EmbedCodeQuery, EmbedCodeResponse, PreviewEmbedRequest, ValidateConfigRequest,
    ValidationReportResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn embed_code_handler(
    State(state): State<AppState>,
    Path(widget_id): Path<String>,
    Query(query): Query<EmbedCodeQuery>,
) -> ApiResult<Json<EmbedCodeResponse>> {
    let widget_id = WidgetId::from_str(widget_id.as_str())?;
    let target = parse_target(query.format.as_deref())?;
    let environment = EmbedEnvironment::from_label(query.environment.as_deref().unwrap_or(""));

    let code = state
        .embed_service
        .embed_code(widget_id, target, environment)
        .await?;

    Ok(Json(EmbedCodeResponse {
        format: target.as_str().to_owned(),
        environment: environment.as_str().to_owned(),
        code,
    }))
}

pub async fn preview_embed_handler(
    State(state): State<AppState>,
    Path(widget_id): Path<String>,
    Json(payload): Json<PreviewEmbedRequest>,
) -> ApiResult<Json<EmbedCodeResponse>> {
    let widget_id = WidgetId::from_str(widget_id.as_str())?;
    let target = parse_target(payload.format.as_deref())?;
    let environment = EmbedEnvironment::from_label(payload.environment.as_deref().unwrap_or(""));
    let config: WidgetConfig = serde_json::from_value(payload.config)
        .map_err(|error| AppError::Validation(format!("invalid configuration payload: {error}")))?;

    let code = state
        .embed_service
        .preview_embed_code(widget_id, &config, target, environment)?;

    Ok(Json(EmbedCodeResponse {
        format: target.as_str().to_owned(),
        environment: environment.as_str().to_owned(),
        code,
    }))
}

pub async fn validate_config_handler(
    Json(payload): Json<ValidateConfigRequest>,
) -> Json<ValidationReportResponse> {
    let report = validate_widget_config(&payload.config);

    Json(ValidationReportResponse::from(report))
}

fn parse_target(format: Option<&str>) -> Result<EmbedTarget, AppError> {
    EmbedTarget::from_str(format.unwrap_or("script"))
}
