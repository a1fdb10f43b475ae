// Tab Item
// Caller-supplied description of one slot in the tab bar

use std::fmt;
use std::rc::Rc;

use ratatui::{buffer::Buffer, layout::Rect, style::Style, text::Line};

/// A view supplied by the caller in place of the icon + title pair
pub trait TabCustomView {
    /// Size in cells as (width, height); both must be non-zero
    fn size(&self) -> (u16, u16);

    /// Draw into `area`, already clipped to the owning item
    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// Single-line styled text usable as a custom view
#[derive(Debug, Clone)]
pub struct LabelView {
    pub text: String,
    pub style: Style,
}

impl LabelView {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl TabCustomView for LabelView {
    /// Display width in cells, so wide graphemes count twice
    fn size(&self) -> (u16, u16) {
        let width = Line::from(self.text.as_str()).width();
        (u16::try_from(width).unwrap_or(u16::MAX), 1)
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        buf.set_stringn(area.x, area.y, &self.text, area.width as usize, self.style);
    }
}

/// Cell offset applied to a centered custom view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabOffset {
    pub horizontal: i16,
    pub vertical: i16,
}

impl TabOffset {
    pub fn new(horizontal: i16, vertical: i16) -> Self {
        Self { horizontal, vertical }
    }
}

/// What an item displays: either an icon with a title, or a custom view
#[derive(Clone)]
pub enum TabItemContent {
    Labeled { title: String, icon: String },
    Custom { view: Rc<dyn TabCustomView>, offset: TabOffset },
}

impl fmt::Debug for TabItemContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabItemContent::Labeled { title, icon } => f
                .debug_struct("Labeled")
                .field("title", title)
                .field("icon", icon)
                .finish(),
            TabItemContent::Custom { view, offset } => f
                .debug_struct("Custom")
                .field("size", &view.size())
                .field("offset", offset)
                .finish(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TabItem {
    content: TabItemContent,
    /// Non-selectable items still report taps but never become selected
    pub selectable: bool,
}

impl TabItem {
    /// Item showing `icon` above `title`
    pub fn new(title: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            content: TabItemContent::Labeled {
                title: title.into(),
                icon: icon.into(),
            },
            selectable: true,
        }
    }

    /// Item showing a caller-supplied view, centered and then nudged by `offset`
    pub fn custom(view: Rc<dyn TabCustomView>, offset: TabOffset) -> Self {
        Self {
            content: TabItemContent::Custom { view, offset },
            selectable: true,
        }
    }

    pub fn with_selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    pub fn content(&self) -> &TabItemContent {
        &self.content
    }

    pub fn title(&self) -> Option<&str> {
        match &self.content {
            TabItemContent::Labeled { title, .. } => Some(title),
            TabItemContent::Custom { .. } => None,
        }
    }

    pub fn icon(&self) -> Option<&str> {
        match &self.content {
            TabItemContent::Labeled { icon, .. } => Some(icon),
            TabItemContent::Custom { .. } => None,
        }
    }

    pub fn custom_view(&self) -> Option<&Rc<dyn TabCustomView>> {
        match &self.content {
            TabItemContent::Custom { view, .. } => Some(view),
            TabItemContent::Labeled { .. } => None,
        }
    }

    /// Offset of the custom view (zero for labeled items)
    pub fn offset(&self) -> TabOffset {
        match &self.content {
            TabItemContent::Custom { offset, .. } => *offset,
            TabItemContent::Labeled { .. } => TabOffset::default(),
        }
    }
}
