//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod audit;
mod config;
mod form;
mod preview;
mod theme;

pub use audit::AuditAction;
pub use config::{
    AnimationStyle, AppearanceConfig, AutoOpenTrigger, BehaviorConfig, ButtonStyle, ContentConfig,
    EmbeddingConfig, FeedbackPosition, HeaderStyle, MobileBehavior, ThemeMode, ValidationReport,
    WidgetConfig, WidgetPosition, WindowAnimation, validate_widget_config,
};
pub use form::{
    ConditionalRule, FeedbackKind, FeedbackQuestion, FieldIdAllocator, FormField, FormFieldType,
    sort_fields,
};
pub use preview::{
    ASSISTANT_REPLY_DELAY, ChatMessage, MessageAuthor, PreviewSession, PreviewView,
    THANK_YOU_DISPLAY,
};
pub use theme::{ThemeCategory, ThemeTemplate, builtin_templates, current_theme};
