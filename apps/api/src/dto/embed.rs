use chatadmin_domain::ValidationReport;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

/// Query parameters selecting an embed format and environment.
#[derive(Debug, Deserialize)]
pub struct EmbedCodeQuery {
    /// Target format; defaults to `script`.
    pub format: Option<String>,
    /// Environment label; unrecognized labels fail open to development.
    pub environment: Option<String>,
}

/// Incoming payload for embed generation from an unsaved configuration.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/preview-embed-request.ts"
)]
pub struct PreviewEmbedRequest {
    #[ts(type = "unknown")]
    pub config: Value,
    pub format: Option<String>,
    pub environment: Option<String>,
}

/// API response carrying one generated snippet.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/embed-code-response.ts"
)]
pub struct EmbedCodeResponse {
    pub format: String,
    pub environment: String,
    pub code: String,
}

/// Incoming payload for the advisory configuration check.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/validate-config-request.ts"
)]
pub struct ValidateConfigRequest {
    #[ts(type = "unknown")]
    pub config: Value,
}

/// API representation of the advisory validation outcome.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/validation-report-response.ts"
)]
pub struct ValidationReportResponse {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl From<ValidationReport> for ValidationReportResponse {
    fn from(report: ValidationReport) -> Self {
        Self {
            is_valid: report.is_valid,
            errors: report.errors,
        }
    }
}
