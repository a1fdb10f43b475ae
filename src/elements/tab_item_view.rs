// Tab Item View
// Renders one tab item inside the bar and tracks its selected state

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::core::{ItemHandle, TabBarAppearance, TabFont};
use crate::elements::tab_item::{TabItem, TabItemContent};

/// Row of the icon, counted from the top of the item (row 0 is the keyline)
pub const ICON_TOP_OFFSET: u16 = 1;
pub const ICON_HEIGHT: u16 = 1;
pub const TITLE_HEIGHT: u16 = 1;

/// Interactive representation of one `TabItem`
///
/// Labeled items are laid out icon above title. The view never points back
/// at its bar: the bar lends its `TabBarAppearance` whenever shared style is
/// needed.
#[derive(Debug, Clone)]
pub struct TabItemView {
    item: TabItem,
    handle: ItemHandle,
    frame: Rect,
    icon_frame: Rect,
    title_frame: Rect,
    custom_frame: Rect,
    selected: bool,
    tint: Color,
    font: TabFont,
}

impl TabItemView {
    /// Create an unselected view for `item`
    ///
    /// # Panics
    /// If the item carries a custom view with a zero width or height.
    pub fn new(item: TabItem, handle: ItemHandle, appearance: &TabBarAppearance) -> Self {
        if let Some(view) = item.custom_view() {
            let (width, height) = view.size();
            assert!(
                width > 0 && height > 0,
                "custom view must have a width & height > 0 (got {}x{})",
                width,
                height
            );
        }

        Self {
            item,
            handle,
            frame: Rect::default(),
            icon_frame: Rect::default(),
            title_frame: Rect::default(),
            custom_frame: Rect::default(),
            selected: false,
            tint: appearance.tint_for(false),
            font: appearance.font(),
        }
    }

    pub fn item(&self) -> &TabItem {
        &self.item
    }

    pub fn handle(&self) -> ItemHandle {
        self.handle
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Icon area (labeled items only)
    pub fn icon_frame(&self) -> Option<Rect> {
        self.item.icon().map(|_| self.icon_frame)
    }

    /// Title area (labeled items only)
    pub fn title_frame(&self) -> Option<Rect> {
        self.item.title().map(|_| self.title_frame)
    }

    /// Custom view area, clipped to the item (custom items only)
    pub fn custom_frame(&self) -> Option<Rect> {
        self.item.custom_view().map(|_| self.custom_frame)
    }

    /// Color currently used for icon and title
    pub fn tint(&self) -> Color {
        self.tint
    }

    pub fn font(&self) -> TabFont {
        self.font
    }

    /// Check if a terminal cell lies inside this item
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.frame.x
            && column < self.frame.x.saturating_add(self.frame.width)
            && row >= self.frame.y
            && row < self.frame.y.saturating_add(self.frame.height)
    }

    /// Position sub-elements within `bounds`
    pub fn layout(&mut self, bounds: Rect) {
        self.frame = bounds;

        match self.item.content() {
            TabItemContent::Custom { view, offset } => {
                let (width, height) = view.size();
                let center_x = bounds.x as i32 + bounds.width as i32 / 2 + offset.horizontal as i32;
                let center_y = bounds.y as i32 + bounds.height as i32 / 2 + offset.vertical as i32;
                self.custom_frame = clip_to(
                    center_x - width as i32 / 2,
                    center_y - height as i32 / 2,
                    width,
                    height,
                    bounds,
                );
            }
            TabItemContent::Labeled { icon, .. } => {
                let icon_width = u16::try_from(Line::from(icon.as_str()).width())
                    .unwrap_or(u16::MAX)
                    .min(bounds.width);
                let icon_x = bounds.x + (bounds.width - icon_width) / 2;
                let icon_y = bounds.y.saturating_add(ICON_TOP_OFFSET);
                self.icon_frame = Rect::new(icon_x, icon_y, icon_width, ICON_HEIGHT).intersection(bounds);

                let title_y = icon_y.saturating_add(ICON_HEIGHT);
                self.title_frame = Rect::new(bounds.x, title_y, bounds.width, TITLE_HEIGHT).intersection(bounds);
            }
        }
    }

    /// Mirror the bar's selection and recolor from the shared appearance
    ///
    /// `animated` is a hint only; a terminal redraws whole frames.
    pub fn set_selected(&mut self, selected: bool, animated: bool, appearance: &TabBarAppearance) {
        self.selected = selected;
        self.tint = appearance.tint_for(selected);
        log::trace!(
            "item {} selected={} animated={} tint={:?}",
            self.handle.id(),
            selected,
            animated,
            self.tint
        );
    }

    /// Title font; None falls back to plain text
    pub fn set_font(&mut self, font: Option<TabFont>) {
        self.font = font.unwrap_or_default();
    }

    /// Draw the item into `buf` using the last layout
    pub fn render(&self, buf: &mut Buffer) {
        if self.frame.width == 0 || self.frame.height == 0 {
            return;
        }

        match self.item.content() {
            TabItemContent::Custom { view, .. } => {
                if self.custom_frame.width > 0 && self.custom_frame.height > 0 {
                    view.render(self.custom_frame, buf);
                }
            }
            TabItemContent::Labeled { title, icon } => {
                if self.icon_frame.width > 0 && self.icon_frame.height > 0 {
                    buf.set_stringn(
                        self.icon_frame.x,
                        self.icon_frame.y,
                        icon,
                        self.icon_frame.width as usize,
                        Style::default().fg(self.tint),
                    );
                }
                if self.title_frame.width > 0 && self.title_frame.height > 0 {
                    Paragraph::new(title.as_str())
                        .alignment(Alignment::Center)
                        .style(self.font.apply(Style::default().fg(self.tint)))
                        .render(self.title_frame, buf);
                }
            }
        }
    }
}

/// Build a rect from signed coordinates and clip it to `bounds`
fn clip_to(x: i32, y: i32, width: u16, height: u16, bounds: Rect) -> Rect {
    let left = x.max(bounds.x as i32).min(bounds.right() as i32);
    let top = y.max(bounds.y as i32).min(bounds.bottom() as i32);
    let right = (x + width as i32).min(bounds.right() as i32);
    let bottom = (y + height as i32).min(bounds.bottom() as i32);

    Rect {
        x: left as u16,
        y: top as u16,
        width: (right - left).max(0) as u16,
        height: (bottom - top).max(0) as u16,
    }
}
