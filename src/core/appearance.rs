// Tab Bar Appearance
// Shared style state read by every item view of a tab bar

use ratatui::style::{Color, Modifier, Style};

/// Tint of the selected item when none is configured
pub const DEFAULT_TINT_COLOR: Color = Color::Cyan;
/// Tint of unselected items when no inactive color is configured
pub const DEFAULT_INACTIVE_COLOR: Color = Color::Rgb(0x77, 0x77, 0x77);
/// Divider line along the top edge
pub const KEYLINE_COLOR: Color = Color::Rgb(0x33, 0x33, 0x33);
/// Background fill shown while the background is enabled
pub const BACKGROUND_COLOR: Color = Color::Rgb(0x15, 0x15, 0x15);

/// Text attributes for item titles (the terminal equivalent of a font)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabFont {
    pub modifier: Modifier,
}

impl TabFont {
    pub fn new(modifier: Modifier) -> Self {
        Self { modifier }
    }

    pub fn bold() -> Self {
        Self::new(Modifier::BOLD)
    }

    /// Apply this font on top of an existing style
    pub fn apply(&self, style: Style) -> Style {
        style.add_modifier(self.modifier)
    }
}

/// Style state owned by the tab bar and lent to its item views
#[derive(Debug, Clone, PartialEq)]
pub struct TabBarAppearance {
    /// Color of the selected item
    pub tint_color: Color,
    /// Color of unselected items (None = DEFAULT_INACTIVE_COLOR)
    pub inactive_color: Option<Color>,
    /// Title font (None = TabFont::default())
    pub font: Option<TabFont>,
    /// Whether the background fill is drawn
    pub background_blur_enabled: bool,
}

impl TabBarAppearance {
    /// Configured inactive color, falling back to the default gray
    pub fn inactive_color(&self) -> Color {
        self.inactive_color.unwrap_or(DEFAULT_INACTIVE_COLOR)
    }

    /// Configured font, falling back to plain text
    pub fn font(&self) -> TabFont {
        self.font.unwrap_or_default()
    }

    /// Tint for an item in the given selection state
    pub fn tint_for(&self, selected: bool) -> Color {
        if selected {
            self.tint_color
        } else {
            self.inactive_color()
        }
    }
}

impl Default for TabBarAppearance {
    fn default() -> Self {
        Self {
            tint_color: DEFAULT_TINT_COLOR,
            inactive_color: None,
            font: None,
            background_blur_enabled: true,
        }
    }
}
