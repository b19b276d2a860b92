//! ChatAdmin API composition root.

#![forbid(unsafe_code)]

mod dev_seed;
mod dto;
mod error;
mod handlers;
mod state;

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

use axum::Router;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, patch, post};
use chatadmin_application::{EmbedService, WidgetService};
use chatadmin_core::AppError;
use chatadmin_infrastructure::{InMemoryAuditLogRepository, InMemoryWidgetRepository};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let frontend_url =
        env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned());
    let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
    let api_port = env::var("API_PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(3001);
    let seed_demo = env::var("CHATADMIN_SEED_DEMO")
        .unwrap_or_else(|_| "false".to_owned())
        .eq_ignore_ascii_case("true");

    let widget_repository = Arc::new(InMemoryWidgetRepository::new());
    let audit_repository = Arc::new(InMemoryAuditLogRepository::new());

    let widget_service = WidgetService::new(widget_repository.clone(), audit_repository);
    let embed_service = EmbedService::new(widget_repository);

    if seed_demo {
        dev_seed::seed_demo_widget(&widget_service).await?;
    }

    let app_state = AppState {
        widget_service,
        embed_service,
    };

    let cors_layer = CorsLayer::new()
        .allow_origin(
            HeaderValue::from_str(&frontend_url)
                .map_err(|error| AppError::Internal(format!("invalid FRONTEND_URL: {error}")))?,
        )
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE]);

    let app = Router::new()
        .route("/health", get(handlers::health::health_handler))
        .route(
            "/api/widgets",
            get(handlers::widgets::list_widgets_handler)
                .post(handlers::widgets::create_widget_handler),
        )
        .route(
            "/api/widgets/config/validate",
            post(handlers::embed::validate_config_handler),
        )
        .route(
            "/api/widgets/{widget_id}",
            get(handlers::widgets::get_widget_handler)
                .put(handlers::widgets::replace_config_handler)
                .delete(handlers::widgets::delete_widget_handler),
        )
        .route(
            "/api/widgets/{widget_id}/config",
            patch(handlers::widgets::update_config_field_handler),
        )
        .route(
            "/api/widgets/{widget_id}/embed",
            get(handlers::embed::embed_code_handler),
        )
        .route(
            "/api/widgets/{widget_id}/embed/preview",
            post(handlers::embed::preview_embed_handler),
        )
        .route(
            "/api/widgets/{widget_id}/theme",
            get(handlers::themes::current_theme_handler),
        )
        .route(
            "/api/widgets/{widget_id}/theme/{theme_id}",
            post(handlers::themes::apply_theme_handler),
        )
        .route("/api/themes", get(handlers::themes::list_themes_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(app_state);

    let host = IpAddr::from_str(&api_host)
        .map_err(|error| AppError::Internal(format!("invalid API_HOST '{api_host}': {error}")))?;
    let address = SocketAddr::from((host, api_port));

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "chatadmin-api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}
