use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chatadmin_core::{AppError, AppResult, WidgetId};
use chatadmin_domain::{MobileBehavior, WidgetConfig};

/// Deployment environment selecting a base URL for generated code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmbedEnvironment {
    /// Local and preview deployments.
    #[default]
    Development,
    /// Pre-production staging.
    Staging,
    /// Production.
    Production,
}

impl EmbedEnvironment {
    /// Resolves an environment label.
    ///
    /// Total and fail-open: unrecognized labels resolve to development so a
    /// typo never produces production-pointing code.
    #[must_use]
    pub fn from_label(value: &str) -> Self {
        match value {
            "production" => Self::Production,
            "staging" => Self::Staging,
            _ => Self::Development,
        }
    }

    /// Returns the stable wire value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }

    /// Returns the canonical API base URL for this environment.
    #[must_use]
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Development => "https://dev-api.chatadmin.com",
            Self::Staging => "https://staging-api.chatadmin.com",
            Self::Production => "https://api.chatadmin.com",
        }
    }
}

impl Display for EmbedEnvironment {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Deployment target format of a generated snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedTarget {
    /// Self-injecting `<script>` block.
    Script,
    /// Sandboxed `<iframe>`.
    Iframe,
    /// Custom element plus components bundle.
    WebComponent,
    /// Minimal single script tag.
    OneLine,
    /// npm install and usage instructions.
    Npm,
    /// Configuration JSON dump.
    Config,
}

impl EmbedTarget {
    /// Returns the stable wire value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Script => "script",
            Self::Iframe => "iframe",
            Self::WebComponent => "web-component",
            Self::OneLine => "one-line",
            Self::Npm => "npm",
            Self::Config => "config",
        }
    }
}

impl FromStr for EmbedTarget {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "script" => Ok(Self::Script),
            "iframe" => Ok(Self::Iframe),
            "web-component" => Ok(Self::WebComponent),
            "one-line" => Ok(Self::OneLine),
            "npm" => Ok(Self::Npm),
            "config" => Ok(Self::Config),
            _ => Err(AppError::Validation(format!(
                "unknown embed format '{value}', expected one of script, iframe, web-component, one-line, npm, config"
            ))),
        }
    }
}

/// Generates the snippet for a target format.
///
/// Every generator is deterministic: structurally equal inputs produce
/// byte-identical output. None of them consults the advisory validator.
pub fn generate_embed(
    widget_id: &WidgetId,
    config: &WidgetConfig,
    target: EmbedTarget,
    environment: EmbedEnvironment,
) -> AppResult<String> {
    match target {
        EmbedTarget::Script => generate_script_embed(widget_id, config, environment),
        EmbedTarget::Iframe => generate_iframe_embed(widget_id, config, environment),
        EmbedTarget::WebComponent => generate_web_component_embed(widget_id, config, environment),
        EmbedTarget::OneLine => Ok(generate_one_line_embed(widget_id, environment, Some(config))),
        EmbedTarget::Npm => generate_npm_snippet(widget_id, config),
        EmbedTarget::Config => generate_widget_config(config),
    }
}

/// Generates the self-injecting `<script>` embed.
///
/// The loaded widget runtime is expected to register the `ChatAdmin`
/// global; the `onload` handler hands it the full compact configuration
/// with the widget identifier injected, and the `onerror` handler logs a
/// warning instead of throwing.
pub fn generate_script_embed(
    widget_id: &WidgetId,
    config: &WidgetConfig,
    environment: EmbedEnvironment,
) -> AppResult<String> {
    let base_url = environment.base_url();
    let payload = compact_payload(widget_id, config)?;

    let lines = [
        "<!-- ChatAdmin widget -->".to_owned(),
        "<script>".to_owned(),
        "  (function (w, d) {".to_owned(),
        "    var s = d.createElement('script');".to_owned(),
        format!("    s.src = '{base_url}/widget/{widget_id}.js';"),
        "    s.async = true;".to_owned(),
        "    s.onload = function () {".to_owned(),
        format!("      w.ChatAdmin.init({payload});"),
        "    };".to_owned(),
        "    s.onerror = function () {".to_owned(),
        "      console.warn('ChatAdmin widget failed to load');".to_owned(),
        "    };".to_owned(),
        "    d.head.appendChild(s);".to_owned(),
        "  })(window, document);".to_owned(),
        "</script>".to_owned(),
    ];

    Ok(lines.join("\n"))
}

/// Generates the `<iframe>` embed.
///
/// The compact configuration travels URL-encoded in the `config` query
/// parameter. Fullscreen and responsive mobile behaviors get a flexible
/// max-height; every other behavior gets a fixed box.
pub fn generate_iframe_embed(
    widget_id: &WidgetId,
    config: &WidgetConfig,
    environment: EmbedEnvironment,
) -> AppResult<String> {
    let base_url = environment.base_url();
    let normalized = config.normalized();
    let payload = compact_payload(widget_id, config)?;
    let encoded: String = url::form_urlencoded::byte_serialize(payload.as_bytes()).collect();

    let style = match normalized.behavior.mobile_behavior {
        MobileBehavior::Fullscreen | MobileBehavior::Responsive => {
            "width:100%;height:600px;max-height:80vh;border:none;"
        }
        MobileBehavior::Minimized | MobileBehavior::Hidden => {
            "width:400px;height:600px;border:none;"
        }
    };
    let title = escape_attribute(&normalized.content.header_title);

    let lines = [
        "<iframe".to_owned(),
        format!("  src=\"{base_url}/embed/{widget_id}?config={encoded}\""),
        format!("  style=\"{style}\""),
        "  loading=\"lazy\"".to_owned(),
        "  referrerpolicy=\"strict-origin-when-cross-origin\"".to_owned(),
        "  allow=\"microphone; camera\"".to_owned(),
        format!("  title=\"{title}\"></iframe>"),
    ];

    Ok(lines.join("\n"))
}

/// Generates the custom-element embed.
pub fn generate_web_component_embed(
    widget_id: &WidgetId,
    config: &WidgetConfig,
    environment: EmbedEnvironment,
) -> AppResult<String> {
    let base_url = environment.base_url();
    let normalized = config.normalized();
    let payload = escape_attribute(&compact_payload(widget_id, config)?);
    let theme = normalized.appearance.theme.as_str();
    let primary_color = &normalized.appearance.primary_color;

    let lines = [
        format!("<script src=\"{base_url}/widget/components.js\" async></script>"),
        "<chat-widget".to_owned(),
        format!("  widget-id=\"{widget_id}\""),
        format!("  config=\"{payload}\""),
        format!("  theme=\"{theme}\""),
        format!("  primary-color=\"{primary_color}\"></chat-widget>"),
    ];

    Ok(lines.join("\n"))
}

/// Generates the minimal one-line embed.
///
/// Only position and theme travel as pre-load query parameters, and only
/// when a configuration is supplied; the script fetches everything else at
/// runtime.
#[must_use]
pub fn generate_one_line_embed(
    widget_id: &WidgetId,
    environment: EmbedEnvironment,
    config: Option<&WidgetConfig>,
) -> String {
    let base_url = environment.base_url();
    let mut src = format!("{base_url}/widget/embed.js?id={widget_id}");

    if let Some(config) = config {
        let normalized = config.normalized();
        src.push_str("&position=");
        src.push_str(normalized.behavior.position.as_str());
        src.push_str("&theme=");
        src.push_str(normalized.appearance.theme.as_str());
    }

    format!("<script src=\"{src}\" async></script>")
}

/// Generates npm install instructions with imperative and React usage
/// examples around the pretty-printed configuration.
pub fn generate_npm_snippet(widget_id: &WidgetId, config: &WidgetConfig) -> AppResult<String> {
    let payload = pretty_payload(widget_id, config)?;
    let call_argument = reindent(&payload, "  ");

    let lines = [
        "npm install @chatadmin/widget".to_owned(),
        String::new(),
        "// Imperative usage".to_owned(),
        "import { initWidget } from '@chatadmin/widget';".to_owned(),
        String::new(),
        format!("initWidget({call_argument});"),
        String::new(),
        "// React usage".to_owned(),
        "import { ChatWidget } from '@chatadmin/widget/react';".to_owned(),
        String::new(),
        format!("const config = {payload};"),
        String::new(),
        "export function SupportWidget() {".to_owned(),
        "  return <ChatWidget config={config} />;".to_owned(),
        "}".to_owned(),
    ];

    Ok(lines.join("\n"))
}

/// Dumps the configuration as pretty-printed JSON.
///
/// The dump carries the configuration exactly as provided (no identifier
/// injection, no normalization) so that parsing it back yields an equal
/// configuration.
pub fn generate_widget_config(config: &WidgetConfig) -> AppResult<String> {
    serde_json::to_string_pretty(config)
        .map_err(|error| AppError::Internal(format!("failed to serialize configuration: {error}")))
}

fn compact_payload(widget_id: &WidgetId, config: &WidgetConfig) -> AppResult<String> {
    let payload = injected(widget_id, config);
    serde_json::to_string(&payload)
        .map_err(|error| AppError::Internal(format!("failed to serialize configuration: {error}")))
}

fn pretty_payload(widget_id: &WidgetId, config: &WidgetConfig) -> AppResult<String> {
    let payload = injected(widget_id, config);
    serde_json::to_string_pretty(&payload)
        .map_err(|error| AppError::Internal(format!("failed to serialize configuration: {error}")))
}

fn injected(widget_id: &WidgetId, config: &WidgetConfig) -> WidgetConfig {
    let mut payload = config.normalized();
    payload.embedding.widget_id = Some(widget_id.to_string());
    payload
}

fn escape_attribute(value: &str) -> String {
    value.replace('"', "&quot;")
}

fn reindent(block: &str, indent: &str) -> String {
    let mut lines = block.lines();
    let Some(first) = lines.next() else {
        return String::new();
    };

    let mut reindented = first.to_owned();
    for line in lines {
        reindented.push('\n');
        reindented.push_str(indent);
        reindented.push_str(line);
    }

    reindented
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chatadmin_core::WidgetId;
    use chatadmin_domain::{MobileBehavior, WidgetConfig};

    use super::{
        EmbedEnvironment, EmbedTarget, generate_embed, generate_iframe_embed,
        generate_npm_snippet, generate_one_line_embed, generate_script_embed,
        generate_web_component_embed, generate_widget_config,
    };

    fn fixed_widget_id(value: &str) -> WidgetId {
        WidgetId::from_str(value).unwrap_or_else(|_| unreachable!())
    }

    fn sample_id() -> WidgetId {
        fixed_widget_id("3f2c52a8-9b1d-4f7e-8a06-5d8f0b1c2d3e")
    }

    #[test]
    fn every_generator_is_deterministic() {
        let widget_id = sample_id();
        let config = WidgetConfig::default();

        for target in [
            EmbedTarget::Script,
            EmbedTarget::Iframe,
            EmbedTarget::WebComponent,
            EmbedTarget::OneLine,
            EmbedTarget::Npm,
            EmbedTarget::Config,
        ] {
            let first = generate_embed(&widget_id, &config, target, EmbedEnvironment::Staging);
            let second = generate_embed(&widget_id, &config, target, EmbedEnvironment::Staging);
            assert!(first.is_ok());
            assert_eq!(first.unwrap_or_default(), second.unwrap_or_default());
        }
    }

    #[test]
    fn environment_resolution_is_total_and_fails_open() {
        assert_eq!(
            EmbedEnvironment::from_label("production").base_url(),
            "https://api.chatadmin.com"
        );
        assert_eq!(
            EmbedEnvironment::from_label("staging").base_url(),
            "https://staging-api.chatadmin.com"
        );
        assert_eq!(
            EmbedEnvironment::from_label("development").base_url(),
            "https://dev-api.chatadmin.com"
        );
        assert_eq!(
            EmbedEnvironment::from_label("garbage").base_url(),
            "https://dev-api.chatadmin.com"
        );
    }

    #[test]
    fn script_embed_wires_the_runtime_global_and_injects_the_id() {
        let widget_id = sample_id();
        let code = generate_script_embed(
            &widget_id,
            &WidgetConfig::default(),
            EmbedEnvironment::Production,
        );
        assert!(code.is_ok());

        let code = code.unwrap_or_default();
        assert!(code.contains(&format!(
            "https://api.chatadmin.com/widget/{widget_id}.js"
        )));
        assert!(code.contains("w.ChatAdmin.init("));
        assert!(code.contains("console.warn"));

        let start = code
            .find("ChatAdmin.init(")
            .map(|index| index + "ChatAdmin.init(".len())
            .unwrap_or_else(|| unreachable!());
        let length = code[start..]
            .find(");")
            .unwrap_or_else(|| unreachable!());
        let embedded: Result<WidgetConfig, _> = serde_json::from_str(&code[start..start + length]);
        assert!(embedded.is_ok());
        assert_eq!(
            embedded.unwrap_or_default().embedding.widget_id,
            Some(widget_id.to_string())
        );
    }

    #[test]
    fn script_embed_payload_is_compact() {
        let code = generate_script_embed(
            &sample_id(),
            &WidgetConfig::default(),
            EmbedEnvironment::Development,
        )
        .unwrap_or_default();

        let init_line = code
            .lines()
            .find(|line| line.contains("ChatAdmin.init("))
            .unwrap_or_default();
        assert!(init_line.contains("\"appearance\":{"));
    }

    #[test]
    fn iframe_embed_matches_the_staging_scenario() {
        let widget_id = sample_id();
        let code = generate_iframe_embed(
            &widget_id,
            &WidgetConfig::default(),
            EmbedEnvironment::Staging,
        );
        assert!(code.is_ok());

        let code = code.unwrap_or_default();
        assert!(code.contains(&format!(
            "https://staging-api.chatadmin.com/embed/{widget_id}?config="
        )));
        assert!(code.contains("height:600px"));
        assert!(code.contains("max-height:80vh"));
        assert!(code.contains("loading=\"lazy\""));
        assert!(code.contains("referrerpolicy=\"strict-origin-when-cross-origin\""));
        assert!(code.contains("allow=\"microphone; camera\""));
    }

    #[test]
    fn iframe_height_is_fixed_for_minimized_mobile_behavior() {
        let mut config = WidgetConfig::default();
        config.behavior.mobile_behavior = MobileBehavior::Minimized;

        let code = generate_iframe_embed(&sample_id(), &config, EmbedEnvironment::Staging)
            .unwrap_or_default();
        assert!(code.contains("width:400px;height:600px;border:none;"));
        assert!(!code.contains("max-height"));
    }

    #[test]
    fn web_component_embed_escapes_the_config_attribute() {
        let code = generate_web_component_embed(
            &sample_id(),
            &WidgetConfig::default(),
            EmbedEnvironment::Development,
        );
        assert!(code.is_ok());

        let code = code.unwrap_or_default();
        assert!(code.contains("https://dev-api.chatadmin.com/widget/components.js"));
        assert!(code.contains("config=\"{&quot;appearance&quot;:"));
        assert!(code.contains("theme=\"light\""));
        assert!(code.contains("primary-color=\"#6366f1\""));
    }

    #[test]
    fn one_line_embed_forwards_position_and_theme_only_with_config() {
        let widget_id = sample_id();

        let with_config = generate_one_line_embed(
            &widget_id,
            EmbedEnvironment::Production,
            Some(&WidgetConfig::default()),
        );
        assert!(with_config.contains(&format!(
            "https://api.chatadmin.com/widget/embed.js?id={widget_id}&position=bottom-right&theme=light"
        )));

        let without_config =
            generate_one_line_embed(&widget_id, EmbedEnvironment::Production, None);
        assert!(without_config.ends_with("\" async></script>"));
        assert!(!without_config.contains("&position="));
        assert!(!without_config.contains("&theme="));
    }

    #[test]
    fn npm_snippet_contains_install_and_both_usages() {
        let code = generate_npm_snippet(&sample_id(), &WidgetConfig::default());
        assert!(code.is_ok());

        let code = code.unwrap_or_default();
        assert!(code.starts_with("npm install @chatadmin/widget"));
        assert!(code.contains("initWidget({"));
        assert!(code.contains("<ChatWidget config={config} />"));
    }

    #[test]
    fn config_dump_round_trips() {
        let mut config = WidgetConfig::default();
        config.appearance.primary_color = "#123456".to_owned();
        config.content.bot_name = "Grace".to_owned();

        let dump = generate_widget_config(&config);
        assert!(dump.is_ok());

        let parsed: Result<WidgetConfig, _> = serde_json::from_str(&dump.unwrap_or_default());
        assert!(parsed.is_ok());
        assert_eq!(parsed.unwrap_or_default(), config);
    }
}

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use chatadmin_core::WidgetId;
    use chatadmin_domain::WidgetConfig;

    use super::{EmbedEnvironment, generate_script_embed};

    proptest! {
        #[test]
        fn script_embed_is_deterministic_for_any_primary_color(color in "#[0-9a-f]{6}") {
            let widget_id = WidgetId::new();
            let mut config = WidgetConfig::default();
            config.appearance.primary_color = color;

            let first = generate_script_embed(&widget_id, &config, EmbedEnvironment::Production);
            let second = generate_script_embed(&widget_id, &config, EmbedEnvironment::Production);
            prop_assert!(first.is_ok());
            prop_assert_eq!(first.unwrap_or_default(), second.unwrap_or_default());
        }
    }
}
