use serde::{Deserialize, Serialize};

use crate::config::{
    AnimationStyle, AppearanceConfig, ButtonStyle, HeaderStyle, ThemeMode, WidgetConfig,
};

/// Catalog grouping for theme templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeCategory {
    /// Corporate looks.
    Business,
    /// Expressive looks.
    Creative,
    /// Reduced looks.
    Minimal,
    /// Upmarket looks.
    Premium,
    /// Contemporary looks.
    Modern,
}

/// A named, immutable preset of appearance-section values.
///
/// Applying a template is a total overwrite of the appearance section;
/// every other section of the target configuration is untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTemplate {
    id: String,
    name: String,
    description: String,
    category: ThemeCategory,
    appearance: AppearanceConfig,
    tags: Vec<String>,
}

impl ThemeTemplate {
    /// Creates a theme template.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: ThemeCategory,
        appearance: AppearanceConfig,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            category,
            appearance,
            tags,
        }
    }

    /// Returns the template identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the template display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the template description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the catalog grouping.
    #[must_use]
    pub fn category(&self) -> ThemeCategory {
        self.category
    }

    /// Returns the preset appearance section.
    #[must_use]
    pub fn appearance(&self) -> &AppearanceConfig {
        &self.appearance
    }

    /// Returns the search tags.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Applies the template to a configuration, overwriting the appearance
    /// section wholesale and leaving every other section unchanged.
    #[must_use]
    pub fn apply_to(&self, config: &WidgetConfig) -> WidgetConfig {
        let mut applied = config.clone();
        applied.appearance = self.appearance.clone();
        applied
    }

    /// Returns whether a configuration visually corresponds to this template.
    ///
    /// Exact match on primary color, secondary color, and font family only:
    /// a display heuristic, never authoritative.
    #[must_use]
    pub fn matches(&self, config: &WidgetConfig) -> bool {
        config.appearance.primary_color == self.appearance.primary_color
            && config.appearance.secondary_color == self.appearance.secondary_color
            && config.appearance.font_family == self.appearance.font_family
    }
}

/// Returns the template a configuration currently corresponds to, if any.
#[must_use]
pub fn current_theme<'a>(
    config: &WidgetConfig,
    templates: &'a [ThemeTemplate],
) -> Option<&'a ThemeTemplate> {
    templates.iter().find(|template| template.matches(config))
}

fn tagged(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|tag| (*tag).to_owned()).collect()
}

/// Returns the built-in theme template catalog.
#[must_use]
pub fn builtin_templates() -> Vec<ThemeTemplate> {
    let base = AppearanceConfig::default();

    vec![
        ThemeTemplate::new(
            "corporate-blue",
            "Corporate Blue",
            "Trustworthy blue palette for company sites",
            ThemeCategory::Business,
            AppearanceConfig {
                primary_color: "#1d4ed8".to_owned(),
                secondary_color: "#eff6ff".to_owned(),
                accent_color: "#3b82f6".to_owned(),
                text_color: "#1e293b".to_owned(),
                border_radius: 8,
                ..base.clone()
            },
            tagged(&["blue", "corporate", "professional"]),
        ),
        ThemeTemplate::new(
            "minimal-dark",
            "Minimal Dark",
            "Low-contrast dark scheme with muted accents",
            ThemeCategory::Minimal,
            AppearanceConfig {
                primary_color: "#1f2937".to_owned(),
                secondary_color: "#111827".to_owned(),
                accent_color: "#6b7280".to_owned(),
                background_color: "#111827".to_owned(),
                text_color: "#f9fafb".to_owned(),
                header_style: HeaderStyle::Flat,
                button_style: ButtonStyle::Minimal,
                animation_style: AnimationStyle::Fade,
                theme: ThemeMode::Dark,
                shadow_intensity: 1,
                ..base.clone()
            },
            tagged(&["dark", "minimal", "muted"]),
        ),
        ThemeTemplate::new(
            "sunset-gradient",
            "Sunset Gradient",
            "Warm gradient header with playful motion",
            ThemeCategory::Creative,
            AppearanceConfig {
                primary_color: "#f97316".to_owned(),
                secondary_color: "#fff7ed".to_owned(),
                accent_color: "#ec4899".to_owned(),
                gradient_enabled: true,
                header_style: HeaderStyle::Gradient,
                button_style: ButtonStyle::Pill,
                animation_style: AnimationStyle::Bounce,
                border_radius: 20,
                ..base.clone()
            },
            tagged(&["gradient", "warm", "playful"]),
        ),
        ThemeTemplate::new(
            "onyx-premium",
            "Onyx",
            "Near-black premium look with gold accents",
            ThemeCategory::Premium,
            AppearanceConfig {
                primary_color: "#0f172a".to_owned(),
                secondary_color: "#1e293b".to_owned(),
                accent_color: "#eab308".to_owned(),
                background_color: "#0f172a".to_owned(),
                text_color: "#e2e8f0".to_owned(),
                font_family: "Georgia, 'Times New Roman', serif".to_owned(),
                header_style: HeaderStyle::Glass,
                theme: ThemeMode::Dark,
                shadow_intensity: 4,
                ..base.clone()
            },
            tagged(&["premium", "dark", "serif"]),
        ),
        ThemeTemplate::new(
            "modern-sky",
            "Modern Sky",
            "Airy glassmorphism over a sky palette",
            ThemeCategory::Modern,
            AppearanceConfig {
                primary_color: "#0ea5e9".to_owned(),
                secondary_color: "#f0f9ff".to_owned(),
                accent_color: "#38bdf8".to_owned(),
                header_style: HeaderStyle::Glass,
                background_opacity: 92,
                border_radius: 16,
                ..base.clone()
            },
            tagged(&["glass", "light", "airy"]),
        ),
        ThemeTemplate::new(
            "paper-white",
            "Paper White",
            "Quiet monochrome with square edges",
            ThemeCategory::Minimal,
            AppearanceConfig {
                primary_color: "#404040".to_owned(),
                secondary_color: "#fafafa".to_owned(),
                accent_color: "#737373".to_owned(),
                text_color: "#171717".to_owned(),
                button_style: ButtonStyle::Square,
                animation_style: AnimationStyle::None,
                border_radius: 2,
                shadow_intensity: 0,
                ..base
            },
            tagged(&["monochrome", "minimal", "flat"]),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::{builtin_templates, current_theme};
    use crate::config::WidgetConfig;

    #[test]
    fn catalog_ids_are_unique() {
        let templates = builtin_templates();
        let mut ids: Vec<&str> = templates.iter().map(|template| template.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), templates.len());
    }

    #[test]
    fn apply_is_a_total_overwrite_of_appearance() {
        let templates = builtin_templates();
        let minimal_dark = templates
            .iter()
            .find(|template| template.id() == "minimal-dark")
            .unwrap_or_else(|| unreachable!());

        let mut config = WidgetConfig::default();
        config.appearance.primary_color = "#ff0000".to_owned();
        config.content.bot_name = "Ada".to_owned();

        let applied = minimal_dark.apply_to(&config);
        assert_eq!(&applied.appearance, minimal_dark.appearance());
        assert_eq!(applied.content, config.content);
        assert_eq!(applied.behavior, config.behavior);
        assert_eq!(applied.embedding, config.embedding);
    }

    #[test]
    fn current_theme_tracks_the_last_applied_template() {
        let templates = builtin_templates();
        let corporate = templates
            .iter()
            .find(|template| template.id() == "corporate-blue")
            .unwrap_or_else(|| unreachable!());
        let minimal_dark = templates
            .iter()
            .find(|template| template.id() == "minimal-dark")
            .unwrap_or_else(|| unreachable!());

        let config = corporate.apply_to(&WidgetConfig::default());
        let reconfigured = minimal_dark.apply_to(&config);

        let matched = current_theme(&reconfigured, &templates);
        assert!(matched.is_some());
        assert_eq!(
            matched.map(super::ThemeTemplate::id),
            Some("minimal-dark")
        );
    }

    #[test]
    fn unthemed_config_matches_no_template() {
        let mut config = WidgetConfig::default();
        config.appearance.primary_color = "#bada55".to_owned();
        assert!(current_theme(&config, &builtin_templates()).is_none());
    }
}
