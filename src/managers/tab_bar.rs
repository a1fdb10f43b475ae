// Tab Bar Manager
// YAML configuration structures and conversion into a ready tab bar

use std::rc::Rc;

use ratatui::style::Modifier;
use serde::Deserialize;

use crate::config::ConfigError;
use crate::core::{TabBarAppearance, TabFont, DEFAULT_TINT_COLOR};
use crate::elements::{LabelView, MiniTabBar, TabItem, TabOffset};
use crate::utilities::parse_color;

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    YAML Configuration Structures                               │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Title font configuration from YAML
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FontConfigYaml {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub underlined: bool,
}

/// Tab configuration from YAML
///
/// Either `title` and `icon` together, or `custom` alone.
#[derive(Debug, Clone, Deserialize)]
pub struct TabConfigYaml {
    /// Title shown below the icon
    pub title: Option<String>,
    /// Icon glyph(s)
    pub icon: Option<String>,
    /// Text rendered as a custom view
    pub custom: Option<String>,
    /// Horizontal nudge for the custom view (optional)
    pub offset_x: Option<i16>,
    /// Vertical nudge for the custom view (optional)
    pub offset_y: Option<i16>,
    /// Whether the tab can become the selection (defaults to true)
    #[serde(default = "default_selectable")]
    pub selectable: bool,
}

fn default_selectable() -> bool {
    true
}

/// Tab bar configuration from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct TabBarConfigYaml {
    /// Color of the selected tab (defaults to "cyan")
    #[serde(default = "default_active_color")]
    pub active_color: String,
    /// Color of the other tabs (None = built-in gray)
    pub inactive_color: Option<String>,
    /// Title font (None = plain)
    pub font: Option<FontConfigYaml>,
    /// Draw the background fill (defaults to true)
    pub background_blur: Option<bool>,
    /// List of tabs, left to right
    pub tabs: Vec<TabConfigYaml>,
}

fn default_active_color() -> String {
    "cyan".to_string()
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    Configuration Conversion Functions                          │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

impl FontConfigYaml {
    pub fn to_font(&self) -> TabFont {
        let mut modifier = Modifier::empty();
        if self.bold {
            modifier |= Modifier::BOLD;
        }
        if self.italic {
            modifier |= Modifier::ITALIC;
        }
        if self.underlined {
            modifier |= Modifier::UNDERLINED;
        }
        TabFont::new(modifier)
    }
}

/// Convert YAML colors, font and background flag into a tab bar appearance
pub fn convert_appearance(config: &TabBarConfigYaml) -> Result<TabBarAppearance, ConfigError> {
    let tint_color = parse_color(&config.active_color).ok_or_else(|| ConfigError::UnknownColor {
        field: "active_color".to_string(),
        value: config.active_color.clone(),
    })?;

    let inactive_color = match &config.inactive_color {
        Some(value) => Some(parse_color(value).ok_or_else(|| ConfigError::UnknownColor {
            field: "inactive_color".to_string(),
            value: value.clone(),
        })?),
        None => None,
    };

    if tint_color != DEFAULT_TINT_COLOR {
        log::debug!("tab bar tint overridden to {:?}", tint_color);
    }

    Ok(TabBarAppearance {
        tint_color,
        inactive_color,
        font: config.font.as_ref().map(FontConfigYaml::to_font),
        background_blur_enabled: config.background_blur.unwrap_or(true),
    })
}

/// Convert one YAML tab into a tab item
pub fn create_tab_item(index: usize, tab: &TabConfigYaml) -> Result<TabItem, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidTab {
        index,
        reason: reason.to_string(),
    };

    let item = match (&tab.title, &tab.icon, &tab.custom) {
        (Some(title), Some(icon), None) => {
            if tab.offset_x.is_some() || tab.offset_y.is_some() {
                log::warn!("tab {}: offsets only apply to custom views, ignoring them", index);
            }
            TabItem::new(title.clone(), icon.clone())
        }
        (None, None, Some(text)) => {
            if text.is_empty() {
                return Err(invalid("custom view text must not be empty"));
            }
            let offset = TabOffset::new(tab.offset_x.unwrap_or(0), tab.offset_y.unwrap_or(0));
            TabItem::custom(Rc::new(LabelView::new(text.clone())), offset)
        }
        (_, _, Some(_)) => return Err(invalid("don't set title / icon when using a custom view")),
        _ => return Err(invalid("title and icon must both be set")),
    };

    Ok(item.with_selectable(tab.selectable))
}

/// Convert all YAML tabs, in order
pub fn create_tab_items(config: &TabBarConfigYaml) -> Result<Vec<TabItem>, ConfigError> {
    config
        .tabs
        .iter()
        .enumerate()
        .map(|(index, tab)| create_tab_item(index, tab))
        .collect()
}

/// Create a tab bar from YAML configuration
/// This is a convenience function that combines appearance and item conversion
pub fn create_tab_bar_from_config(config: &TabBarConfigYaml) -> Result<MiniTabBar, ConfigError> {
    let appearance = convert_appearance(config)?;
    let items = create_tab_items(config)?;
    Ok(MiniTabBar::with_appearance(items, appearance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DEFAULT_INACTIVE_COLOR;
    use ratatui::style::Color;

    const SAMPLE: &str = r##"
active_color: green
inactive_color: "#444444"
font:
  bold: true
background_blur: false
tabs:
  - title: Home
    icon: "⌂"
  - title: Settings
    icon: "⚙"
    selectable: false
  - custom: "[+]"
    offset_x: 1
    offset_y: -1
"##;

    fn parse(yaml: &str) -> TabBarConfigYaml {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_sample_config_builds_bar() {
        let config = parse(SAMPLE);
        let bar = create_tab_bar_from_config(&config).unwrap();

        assert_eq!(bar.item_count(), 3);
        assert_eq!(bar.selected_index(), None);
        assert_eq!(bar.appearance().tint_color, Color::Green);
        assert_eq!(bar.appearance().inactive_color(), Color::Rgb(0x44, 0x44, 0x44));
        assert_eq!(bar.appearance().font(), TabFont::bold());
        assert!(!bar.background_visible());

        let views = bar.item_views();
        assert_eq!(views[0].item().title(), Some("Home"));
        assert!(views[0].item().selectable);
        assert!(!views[1].item().selectable);
        assert_eq!(views[2].item().offset(), TabOffset::new(1, -1));
        assert_eq!(views[2].item().custom_view().map(|v| v.size()), Some((3, 1)));
        assert_eq!(views[0].font(), TabFont::bold());
        assert_eq!(views[0].tint(), Color::Rgb(0x44, 0x44, 0x44));
    }

    #[test]
    fn test_defaults_when_optional_fields_missing() {
        let config = parse("tabs:\n  - { title: A, icon: a }\n");
        let appearance = convert_appearance(&config).unwrap();
        assert_eq!(appearance.tint_color, DEFAULT_TINT_COLOR);
        assert_eq!(appearance.inactive_color(), DEFAULT_INACTIVE_COLOR);
        assert_eq!(appearance.font, None);
        assert!(appearance.background_blur_enabled);
    }

    #[test]
    fn test_unknown_color_is_rejected() {
        let config = parse("active_color: chartreuse\ntabs: []\n");
        match convert_appearance(&config) {
            Err(ConfigError::UnknownColor { field, value }) => {
                assert_eq!(field, "active_color");
                assert_eq!(value, "chartreuse");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_custom_with_title_is_rejected() {
        let config = parse("tabs:\n  - { title: A, icon: a }\n  - { title: B, custom: x }\n");
        match create_tab_items(&config) {
            Err(ConfigError::InvalidTab { index, reason }) => {
                assert_eq!(index, 1);
                assert!(reason.contains("custom view"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_title_without_icon_is_rejected() {
        let config = parse("tabs:\n  - { title: A }\n");
        assert!(matches!(
            create_tab_items(&config),
            Err(ConfigError::InvalidTab { index: 0, .. })
        ));

        let empty = parse("tabs:\n  - { selectable: false }\n");
        assert!(create_tab_items(&empty).is_err());
    }

    #[test]
    fn test_empty_custom_text_is_rejected() {
        let config = parse("tabs:\n  - { custom: \"\" }\n");
        assert!(matches!(
            create_tab_items(&config),
            Err(ConfigError::InvalidTab { index: 0, .. })
        ));
    }

    #[test]
    fn test_font_flags() {
        let font = FontConfigYaml {
            bold: true,
            italic: true,
            underlined: false,
        }
        .to_font();
        assert!(font.modifier.contains(Modifier::BOLD | Modifier::ITALIC));
        assert!(!font.modifier.contains(Modifier::UNDERLINED));
    }
}
