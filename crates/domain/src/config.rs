use std::str::FromStr;

use chatadmin_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::form::{FeedbackQuestion, FormField};

/// Header rendering style of the widget chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderStyle {
    /// Flat fill with the primary color.
    Solid,
    /// Primary-to-accent gradient fill.
    Gradient,
    /// Translucent blurred backdrop.
    Glass,
    /// Borderless flat header.
    Flat,
}

/// Launcher button shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonStyle {
    /// Rounded corners.
    Rounded,
    /// Fully rounded pill.
    Pill,
    /// Square corners.
    Square,
    /// Icon-only minimal button.
    Minimal,
}

/// Widget entrance/attention animation family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationStyle {
    /// Eased transitions.
    Smooth,
    /// Spring-like bounce.
    Bounce,
    /// Opacity-only fade.
    Fade,
    /// Animations disabled.
    None,
}

/// Light/dark color scheme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    /// Light scheme.
    Light,
    /// Dark scheme.
    Dark,
    /// Follow the visitor's OS preference.
    Auto,
}

impl ThemeMode {
    /// Returns the stable wire value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }
}

/// Trigger policy for opening the widget without a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AutoOpenTrigger {
    /// Open immediately on page load.
    Yes,
    /// Never auto-open.
    No,
    /// Open after `openDelay` seconds.
    Delay,
    /// Open once the visitor scrolls.
    Scroll,
    /// Open on exit intent.
    Exit,
}

/// Screen corner the widget is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetPosition {
    /// Bottom-right corner.
    BottomRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Top-right corner.
    TopRight,
    /// Top-left corner.
    TopLeft,
}

impl WidgetPosition {
    /// Returns the stable wire value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BottomRight => "bottom-right",
            Self::BottomLeft => "bottom-left",
            Self::TopRight => "top-right",
            Self::TopLeft => "top-left",
        }
    }
}

impl FromStr for WidgetPosition {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "bottom-right" => Ok(Self::BottomRight),
            "bottom-left" => Ok(Self::BottomLeft),
            "top-right" => Ok(Self::TopRight),
            "top-left" => Ok(Self::TopLeft),
            _ => Err(AppError::Validation(format!(
                "unknown widget position '{value}'"
            ))),
        }
    }
}

/// Window open/close transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowAnimation {
    /// Slide up from the anchor corner.
    SlideUp,
    /// Opacity fade.
    Fade,
    /// Scale from the launcher.
    Scale,
    /// No transition.
    None,
}

/// Behavior of the widget on small viewports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MobileBehavior {
    /// Adapt to the viewport.
    Responsive,
    /// Take over the whole screen when open.
    Fullscreen,
    /// Collapse to the launcher only.
    Minimized,
    /// Do not render on mobile.
    Hidden,
}

/// Placement of the feedback prompt relative to the chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedbackPosition {
    /// Shown once the chat ends.
    AfterChat,
    /// Shown inline inside the transcript.
    Inline,
}

/// Visual theme section of a widget configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppearanceConfig {
    /// Primary brand color (hex).
    pub primary_color: String,
    /// Secondary surface color (hex).
    pub secondary_color: String,
    /// Accent color for highlights (hex).
    pub accent_color: String,
    /// Chat window background color (hex).
    pub background_color: String,
    /// Body text color (hex).
    pub text_color: String,
    /// Header text color (hex).
    pub header_text_color: String,
    /// Corner radius of the chat window in pixels.
    pub border_radius: u16,
    /// Launcher icon size in pixels.
    pub chat_icon_size: u16,
    /// CSS font family stack.
    pub font_family: String,
    /// Base font size in pixels.
    pub font_size: u16,
    /// Base font weight.
    pub font_weight: u16,
    /// Whether the header uses a gradient fill.
    pub gradient_enabled: bool,
    /// Drop-shadow strength, 0 to 5.
    pub shadow_intensity: u8,
    /// Background opacity percentage, 70 to 100.
    pub background_opacity: u8,
    /// Header rendering style.
    pub header_style: HeaderStyle,
    /// Launcher button shape.
    pub button_style: ButtonStyle,
    /// Animation family.
    pub animation_style: AnimationStyle,
    /// Color scheme selection.
    pub theme: ThemeMode,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            primary_color: "#6366f1".to_owned(),
            secondary_color: "#ffffff".to_owned(),
            accent_color: "#8b5cf6".to_owned(),
            background_color: "#ffffff".to_owned(),
            text_color: "#1f2937".to_owned(),
            header_text_color: "#ffffff".to_owned(),
            border_radius: 12,
            chat_icon_size: 48,
            font_family: "Inter, system-ui, sans-serif".to_owned(),
            font_size: 14,
            font_weight: 400,
            gradient_enabled: false,
            shadow_intensity: 2,
            background_opacity: 100,
            header_style: HeaderStyle::Solid,
            button_style: ButtonStyle::Rounded,
            animation_style: AnimationStyle::Smooth,
            theme: ThemeMode::Light,
        }
    }
}

/// Runtime interaction policy section of a widget configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BehaviorConfig {
    /// Auto-open trigger policy.
    pub auto_open: AutoOpenTrigger,
    /// Auto-open delay in seconds, 1 to 30.
    pub open_delay: u16,
    /// Screen corner the widget is anchored to.
    pub position: WidgetPosition,
    /// Transition used when the window opens.
    pub open_animation: WindowAnimation,
    /// Transition used when the window closes.
    pub close_animation: WindowAnimation,
    /// Behavior on small viewports.
    pub mobile_behavior: MobileBehavior,
    /// Page views required before the widget auto-shows.
    pub page_view_threshold: u32,
    /// Whether a sound plays on incoming messages.
    pub notification_sound: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            auto_open: AutoOpenTrigger::No,
            open_delay: 5,
            position: WidgetPosition::BottomRight,
            open_animation: WindowAnimation::SlideUp,
            close_animation: WindowAnimation::Fade,
            mobile_behavior: MobileBehavior::Responsive,
            page_view_threshold: 1,
            notification_sound: true,
        }
    }
}

/// Textual and structural content section of a widget configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentConfig {
    /// Greeting shown when the chat opens.
    pub welcome_message: String,
    /// Display name of the assistant.
    pub bot_name: String,
    /// Placeholder text of the message input.
    pub input_placeholder: String,
    /// Label of the launcher button.
    pub button_text: String,
    /// Title shown in the widget header.
    pub header_title: String,
    /// Whether the pre-chat form is shown before the chat.
    pub enable_pre_chat_form: bool,
    /// Pre-chat form title.
    pub pre_chat_form_title: String,
    /// Pre-chat form subtitle.
    pub pre_chat_form_subtitle: String,
    /// Ordered pre-chat form fields.
    pub pre_chat_form_fields: Vec<FormField>,
    /// Whether the post-chat form is shown after the chat ends.
    pub enable_post_chat_form: bool,
    /// Post-chat form title.
    pub post_chat_form_title: String,
    /// Post-chat form subtitle.
    pub post_chat_form_subtitle: String,
    /// Ordered post-chat form fields.
    pub post_chat_form_fields: Vec<FormField>,
    /// Whether the feedback prompt is enabled.
    pub enable_feedback: bool,
    /// Placement of the feedback prompt.
    pub feedback_position: FeedbackPosition,
    /// Ordered feedback questions.
    pub feedback_questions: Vec<FeedbackQuestion>,
    /// Whether the assistant typing indicator is shown.
    pub show_typing_indicator: bool,
    /// Whether the assistant avatar is shown.
    pub show_avatar: bool,
    /// Whether message timestamps are shown.
    pub show_timestamps: bool,
    /// Whether visitors may attach files.
    pub allow_attachments: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            welcome_message: "Hi there! How can we help you today?".to_owned(),
            bot_name: "Assistant".to_owned(),
            input_placeholder: "Type your message...".to_owned(),
            button_text: "Chat with us".to_owned(),
            header_title: "Support".to_owned(),
            enable_pre_chat_form: false,
            pre_chat_form_title: "Before we start".to_owned(),
            pre_chat_form_subtitle: "Tell us a bit about yourself".to_owned(),
            pre_chat_form_fields: Vec::new(),
            enable_post_chat_form: false,
            post_chat_form_title: "Before you go".to_owned(),
            post_chat_form_subtitle: "Help us improve this conversation".to_owned(),
            post_chat_form_fields: Vec::new(),
            enable_feedback: false,
            feedback_position: FeedbackPosition::AfterChat,
            feedback_questions: Vec::new(),
            show_typing_indicator: true,
            show_avatar: true,
            show_timestamps: false,
            allow_attachments: false,
        }
    }
}

/// Deployment metadata section of a widget configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmbeddingConfig {
    /// Domains allowed to load the widget, `*` for any.
    pub allowed_domains: String,
    /// Whether usage analytics collection is enabled.
    pub enable_analytics: bool,
    /// Whether GDPR-compliant data handling is enforced.
    pub gdpr_compliant: bool,
    /// Widget identifier, injected by the embed generator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widget_id: Option<String>,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            allowed_domains: "*".to_owned(),
            enable_analytics: true,
            gdpr_compliant: true,
            widget_id: None,
        }
    }
}

/// Complete four-section widget configuration.
///
/// Every section is always present: partial JSON fails open into the
/// canonical defaults at deserialization, and [`WidgetConfig::normalized`]
/// clamps ranges at the preview and generator boundaries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Visual theme section.
    pub appearance: AppearanceConfig,
    /// Runtime interaction policy section.
    pub behavior: BehaviorConfig,
    /// Textual and structural content section.
    pub content: ContentConfig,
    /// Deployment metadata section.
    pub embedding: EmbeddingConfig,
}

const SECTION_KEYS: [&str; 4] = ["appearance", "behavior", "content", "embedding"];

const POSITION_VALUES: [&str; 4] = ["bottom-right", "bottom-left", "top-right", "top-left"];

impl WidgetConfig {
    /// Returns a copy with numeric fields clamped to their documented ranges
    /// and blank required strings replaced by defaults.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let defaults = Self::default();
        let mut config = self.clone();

        config.appearance.border_radius = config.appearance.border_radius.clamp(0, 32);
        config.appearance.chat_icon_size = config.appearance.chat_icon_size.clamp(32, 72);
        config.appearance.font_size = config.appearance.font_size.clamp(10, 24);
        config.appearance.shadow_intensity = config.appearance.shadow_intensity.min(5);
        config.appearance.background_opacity = config.appearance.background_opacity.clamp(70, 100);
        config.behavior.open_delay = config.behavior.open_delay.clamp(1, 30);
        config.behavior.page_view_threshold = config.behavior.page_view_threshold.max(1);

        fallback_if_blank(
            &mut config.appearance.primary_color,
            &defaults.appearance.primary_color,
        );
        fallback_if_blank(
            &mut config.appearance.secondary_color,
            &defaults.appearance.secondary_color,
        );
        fallback_if_blank(
            &mut config.appearance.font_family,
            &defaults.appearance.font_family,
        );
        fallback_if_blank(&mut config.content.bot_name, &defaults.content.bot_name);
        fallback_if_blank(
            &mut config.content.header_title,
            &defaults.content.header_title,
        );
        fallback_if_blank(
            &mut config.content.button_text,
            &defaults.content.button_text,
        );
        fallback_if_blank(
            &mut config.embedding.allowed_domains,
            &defaults.embedding.allowed_domains,
        );

        config
    }

    /// Applies a single editor-surface update, replacing exactly one section
    /// field addressed by its camelCase key.
    ///
    /// Array fields are replaced wholesale. The returned value is a new
    /// configuration; `self` is never mutated. Unknown keys and values that
    /// do not type-check against the field are validation errors.
    pub fn apply_update(&self, key: &str, value: Value) -> AppResult<Self> {
        let mut root = serde_json::to_value(self).map_err(|error| {
            AppError::Internal(format!("failed to serialize configuration: {error}"))
        })?;

        let section = SECTION_KEYS.into_iter().find(|section| {
            root.get(section)
                .and_then(Value::as_object)
                .is_some_and(|fields| fields.contains_key(key))
        });

        let Some(section) = section else {
            return Err(AppError::Validation(format!(
                "unknown configuration key '{key}'"
            )));
        };

        if let Some(fields) = root.get_mut(section).and_then(Value::as_object_mut) {
            fields.insert(key.to_owned(), value);
        }

        serde_json::from_value(root).map_err(|error| {
            AppError::Validation(format!(
                "invalid value for configuration key '{key}': {error}"
            ))
        })
    }
}

fn fallback_if_blank(value: &mut String, fallback: &str) {
    if value.trim().is_empty() {
        *value = fallback.to_owned();
    }
}

/// Advisory validation outcome for a raw configuration payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Whether no structural problems were found.
    pub is_valid: bool,
    /// Human-readable problem descriptions.
    pub errors: Vec<String>,
}

/// Performs a non-throwing structural check on a raw configuration payload.
///
/// Flags an invalid `behavior.position` enum value and a negative or
/// non-numeric `behavior.openDelay`. Advisory only: no generator or save
/// path enforces the outcome.
#[must_use]
pub fn validate_widget_config(config: &Value) -> ValidationReport {
    let mut errors = Vec::new();

    if let Some(position) = config.pointer("/behavior/position") {
        let known = position
            .as_str()
            .is_some_and(|value| POSITION_VALUES.contains(&value));
        if !known {
            errors.push(format!(
                "behavior.position must be one of {}",
                POSITION_VALUES.join(", ")
            ));
        }
    }

    if let Some(open_delay) = config.pointer("/behavior/openDelay") {
        match open_delay.as_f64() {
            Some(seconds) if seconds < 0.0 => {
                errors.push("behavior.openDelay must not be negative".to_owned());
            }
            Some(_) => {}
            None => errors.push("behavior.openDelay must be a number".to_owned()),
        }
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::{WidgetConfig, WidgetPosition, validate_widget_config};
    use crate::form::{FieldIdAllocator, FormField, FormFieldType};

    #[test]
    fn partial_json_fails_open_into_defaults() {
        let parsed: Result<WidgetConfig, _> =
            serde_json::from_value(json!({"appearance": {"primaryColor": "#123456"}}));
        assert!(parsed.is_ok());

        let config = parsed.unwrap_or_default();
        assert_eq!(config.appearance.primary_color, "#123456");
        assert_eq!(config.appearance.secondary_color, "#ffffff");
        assert_eq!(config.behavior.position, WidgetPosition::BottomRight);
        assert_eq!(config.embedding.allowed_domains, "*");
    }

    #[test]
    fn empty_object_deserializes_to_canonical_defaults() {
        let parsed: Result<WidgetConfig, _> = serde_json::from_value(json!({}));
        assert!(parsed.is_ok());
        assert_eq!(parsed.unwrap_or_default(), WidgetConfig::default());
    }

    #[test]
    fn apply_update_replaces_exactly_one_field() {
        let config = WidgetConfig::default();
        let updated = config.apply_update("primaryColor", json!("#000000"));
        assert!(updated.is_ok());

        let updated = updated.unwrap_or_default();
        assert_eq!(updated.appearance.primary_color, "#000000");
        assert_eq!(config.appearance.primary_color, "#6366f1");

        let mut expected = config.clone();
        expected.appearance.primary_color = "#000000".to_owned();
        assert_eq!(updated, expected);
    }

    #[test]
    fn apply_update_replaces_array_fields_wholesale() {
        let mut allocator = FieldIdAllocator::new();
        let field = FormField::new(
            allocator.next_field_id(),
            "Email",
            FormFieldType::Email,
            "you@example.com",
            true,
            Vec::new(),
            0,
            None,
            None,
        );
        assert!(field.is_ok());

        let fields: Vec<Value> = vec![
            serde_json::to_value(field.unwrap_or_else(|_| unreachable!())).unwrap_or(Value::Null),
        ];

        let config = WidgetConfig::default();
        let updated = config.apply_update("preChatFormFields", Value::Array(fields));
        assert!(updated.is_ok());
        assert_eq!(
            updated.unwrap_or_default().content.pre_chat_form_fields.len(),
            1
        );
    }

    #[test]
    fn apply_update_rejects_unknown_keys() {
        let config = WidgetConfig::default();
        assert!(config.apply_update("sparkleLevel", json!(11)).is_err());
    }

    #[test]
    fn apply_update_rejects_type_mismatches() {
        let config = WidgetConfig::default();
        assert!(config.apply_update("borderRadius", json!("round")).is_err());
    }

    #[test]
    fn normalized_clamps_documented_ranges() {
        let mut config = WidgetConfig::default();
        config.appearance.shadow_intensity = 9;
        config.appearance.background_opacity = 10;
        config.behavior.open_delay = 600;
        config.appearance.primary_color = "   ".to_owned();

        let normalized = config.normalized();
        assert_eq!(normalized.appearance.shadow_intensity, 5);
        assert_eq!(normalized.appearance.background_opacity, 70);
        assert_eq!(normalized.behavior.open_delay, 30);
        assert_eq!(normalized.appearance.primary_color, "#6366f1");
    }

    #[test]
    fn validator_flags_unknown_position() {
        let report = validate_widget_config(&json!({"behavior": {"position": "center"}}));
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn validator_flags_negative_and_non_numeric_delay() {
        let negative = validate_widget_config(&json!({"behavior": {"openDelay": -3}}));
        assert!(!negative.is_valid);

        let non_numeric = validate_widget_config(&json!({"behavior": {"openDelay": "soon"}}));
        assert!(!non_numeric.is_valid);
    }

    #[test]
    fn validator_accepts_default_shape() {
        let config = serde_json::to_value(WidgetConfig::default()).unwrap_or(Value::Null);
        let report = validate_widget_config(&config);
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
    }
}

#[cfg(test)]
mod properties {
    use proptest::prelude::*;
    use serde_json::json;

    use super::WidgetConfig;

    proptest! {
        #[test]
        fn config_json_round_trips(radius in 0u16..=64, color in "#[0-9a-f]{6}") {
            let mut config = WidgetConfig::default();
            config.appearance.border_radius = radius;
            config.appearance.primary_color = color;

            let value = serde_json::to_value(&config).unwrap_or(serde_json::Value::Null);
            let parsed: WidgetConfig = serde_json::from_value(value).unwrap_or_default();
            prop_assert_eq!(parsed, config);
        }

        #[test]
        fn apply_update_touches_only_the_addressed_field(color in "#[0-9a-f]{6}") {
            let config = WidgetConfig::default();
            let updated = config.apply_update("accentColor", json!(color.clone()));
            prop_assert!(updated.is_ok());

            let updated = updated.unwrap_or_default();
            prop_assert_eq!(updated.appearance.accent_color, color);
            prop_assert_eq!(updated.behavior, config.behavior.clone());
            prop_assert_eq!(updated.content, config.content.clone());
        }
    }
}
