//! Application services and ports.

#![forbid(unsafe_code)]

mod embed;
mod embed_service;
mod widget_ports;
mod widget_service;

pub use embed::{
    EmbedEnvironment, EmbedTarget, generate_embed, generate_iframe_embed, generate_npm_snippet,
    generate_one_line_embed, generate_script_embed, generate_web_component_embed,
    generate_widget_config,
};
pub use embed_service::EmbedService;
pub use widget_ports::{
    AuditEvent, AuditRepository, CreateWidgetInput, WidgetRecord, WidgetRepository,
};
pub use widget_service::WidgetService;
