mod common;
mod embed;
mod themes;
mod widgets;

pub use common::HealthResponse;
pub use embed::{
    EmbedCodeQuery, EmbedCodeResponse, PreviewEmbedRequest, ValidateConfigRequest,
    ValidationReportResponse,
};
pub use themes::{CurrentThemeResponse, ThemeTemplateResponse};
pub use widgets::{
    CreateWidgetRequest, ReplaceConfigRequest, UpdateConfigFieldRequest, WidgetResponse,
};
