// Mini Tab Bar Component
// A row of evenly sized items with a single highlighted selection

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
    Frame,
};

use crate::core::appearance::{BACKGROUND_COLOR, KEYLINE_COLOR};
use crate::core::{HandleAllocator, ItemHandle, MiniTabBarDelegate, TabBarAppearance, TabFont};
use crate::elements::tab_item::TabItem;
use crate::elements::tab_item_view::TabItemView;

/// Height of the divider drawn along the top edge
pub const KEYLINE_HEIGHT: u16 = 1;

/// Tab bar container
///
/// Owns one `TabItemView` per item, in display order, and runs the
/// selection state machine:
///
/// 1. selecting the current index again does nothing;
/// 2. otherwise the delegate is told about the index first;
/// 3. a non-selectable item stops there, leaving the selection alone;
/// 4. a selectable item becomes the selection and every child is recolored.
pub struct MiniTabBar {
    item_views: Vec<TabItemView>,
    selected_index: Option<usize>,
    appearance: TabBarAppearance,
    delegate: Option<Weak<RefCell<dyn MiniTabBarDelegate>>>,
    handles: HandleAllocator,
    bounds: Rect,
}

impl MiniTabBar {
    pub fn new(items: Vec<TabItem>) -> Self {
        Self::with_appearance(items, TabBarAppearance::default())
    }

    pub fn with_appearance(items: Vec<TabItem>, appearance: TabBarAppearance) -> Self {
        let mut bar = Self {
            item_views: Vec::new(),
            selected_index: None,
            appearance,
            delegate: None,
            handles: HandleAllocator::new(),
            bounds: Rect::default(),
        };
        bar.init_tabs(items);
        bar
    }

    /// Replace every item view; the previous selection is discarded
    pub fn set_tabs(&mut self, items: Vec<TabItem>) {
        self.item_views.clear();
        self.selected_index = None;
        self.init_tabs(items);
        self.layout(self.bounds);
    }

    fn init_tabs(&mut self, items: Vec<TabItem>) {
        for item in items {
            let handle = self.handles.allocate();
            self.item_views.push(TabItemView::new(item, handle, &self.appearance));
        }
        log::debug!("tab bar rebuilt with {} items", self.item_views.len());
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                        Delegate                                            │
    // └────────────────────────────────────────────────────────────────────────────────────────────┘

    /// Register the selection listener; the bar keeps only a weak reference
    pub fn set_delegate<D: MiniTabBarDelegate + 'static>(&mut self, delegate: &Rc<RefCell<D>>) {
        let delegate: Rc<RefCell<dyn MiniTabBarDelegate>> = delegate.clone();
        self.delegate = Some(Rc::downgrade(&delegate));
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    fn notify_delegate(&self, index: usize) {
        match self.delegate.as_ref().and_then(Weak::upgrade) {
            Some(delegate) => delegate.borrow_mut().on_tab_selected(index),
            None => log::trace!("no live delegate for tab {}", index),
        }
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                        Selection                                           │
    // └────────────────────────────────────────────────────────────────────────────────────────────┘

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// Drive the selection state machine
    ///
    /// # Panics
    /// If `index` is not a valid item index.
    pub fn select_item(&mut self, index: usize, animated: bool) {
        assert!(
            index < self.item_views.len(),
            "tab index {} out of range for {} items",
            index,
            self.item_views.len()
        );

        if self.selected_index == Some(index) {
            return;
        }

        self.notify_delegate(index);

        if !self.item_views[index].item().selectable {
            log::debug!("tab {} is not selectable, selection stays {:?}", index, self.selected_index);
            return;
        }

        for (i, view) in self.item_views.iter_mut().enumerate() {
            view.set_selected(i == index, animated, &self.appearance);
        }
        self.selected_index = Some(index);
        log::debug!("selected tab {}", index);
    }

    /// Route a tap raised by one of this bar's item views
    ///
    /// # Panics
    /// If `handle` does not belong to a current item view.
    pub fn item_tapped(&mut self, handle: ItemHandle) {
        let index = match self.item_views.iter().position(|view| view.handle() == handle) {
            Some(index) => index,
            None => panic!("tapped item {:?} is not a child of this tab bar", handle),
        };
        self.select_item(index, true);
    }

    /// Hit test a cell against item frames and tap the item found
    /// Returns false if no item covers the cell
    pub fn tap_at(&mut self, column: u16, row: u16) -> bool {
        let handle = self
            .item_views
            .iter()
            .find(|view| view.contains(column, row))
            .map(TabItemView::handle);

        match handle {
            Some(handle) => {
                self.item_tapped(handle);
                true
            }
            None => false,
        }
    }

    /// Handle a crossterm mouse event; only left-button presses are taps
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.tap_at(mouse.column, mouse.row),
            _ => false,
        }
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                        Appearance                                          │
    // └────────────────────────────────────────────────────────────────────────────────────────────┘

    pub fn appearance(&self) -> &TabBarAppearance {
        &self.appearance
    }

    pub fn set_tint_color(&mut self, color: Color) {
        self.appearance.tint_color = color;
        self.apply_appearance(true);
    }

    pub fn set_inactive_color(&mut self, color: Color) {
        self.appearance.inactive_color = Some(color);
        self.apply_appearance(true);
    }

    pub fn set_font(&mut self, font: Option<TabFont>) {
        self.appearance.font = font;
        self.apply_appearance(true);
    }

    pub fn set_background_blur_enabled(&mut self, enabled: bool) {
        self.appearance.background_blur_enabled = enabled;
    }

    /// Re-apply font and selection colors to every child, keeping the selection
    fn apply_appearance(&mut self, animated: bool) {
        let selected_index = self.selected_index;
        for (i, view) in self.item_views.iter_mut().enumerate() {
            view.set_font(self.appearance.font);
            view.set_selected(Some(i) == selected_index, animated, &self.appearance);
        }
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                          Layout                                            │
    // └────────────────────────────────────────────────────────────────────────────────────────────┘

    pub fn item_count(&self) -> usize {
        self.item_views.len()
    }

    pub fn item_views(&self) -> &[TabItemView] {
        &self.item_views
    }

    pub fn item_view(&self, index: usize) -> Option<&TabItemView> {
        self.item_views.get(index)
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn background_frame(&self) -> Rect {
        self.bounds
    }

    pub fn background_visible(&self) -> bool {
        self.appearance.background_blur_enabled
    }

    pub fn keyline_frame(&self) -> Rect {
        keyline_for(self.bounds)
    }

    /// Split `bounds` into one full-height slice per item
    ///
    /// Slice `i` spans `[x + i*W/N, x + (i+1)*W/N)`, so slices never overlap
    /// and always cover the whole width.
    pub fn layout(&mut self, bounds: Rect) {
        self.bounds = bounds;
        split_width(&mut self.item_views, bounds);
    }

    /// Lay out for `area` if it changed, then draw
    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        if area != self.bounds {
            self.layout(area);
        }
        f.render_widget(&*self, area);
    }
}

/// Divider along the top edge of `bounds`
fn keyline_for(bounds: Rect) -> Rect {
    Rect {
        x: bounds.x,
        y: bounds.y,
        width: bounds.width,
        height: KEYLINE_HEIGHT.min(bounds.height),
    }
}

/// Give each view a full-height slice of `bounds`, widths differing by at most one cell
fn split_width(views: &mut [TabItemView], bounds: Rect) {
    let count = views.len() as u64;
    if count == 0 {
        return;
    }

    let width = u64::from(bounds.width);
    for (i, view) in views.iter_mut().enumerate() {
        let start = i as u64 * width / count;
        let end = (i as u64 + 1) * width / count;
        // start <= width, so both fit back into u16
        view.layout(Rect {
            x: bounds.x + start as u16,
            y: bounds.y,
            width: (end - start) as u16,
            height: bounds.height,
        });
    }
}

/// Draws into the given area; when it differs from the last layout the
/// items are drawn from a temporary layout and the bar itself is untouched.
impl Widget for &MiniTabBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let relaid;
        let views = if area == self.bounds {
            &self.item_views
        } else {
            let mut copies = self.item_views.clone();
            split_width(&mut copies, area);
            relaid = copies;
            &relaid
        };

        let visible = area.intersection(buf.area);
        if visible.width == 0 || visible.height == 0 {
            return;
        }

        if self.appearance.background_blur_enabled {
            buf.set_style(visible, Style::default().bg(BACKGROUND_COLOR));
        }

        let keyline = keyline_for(area).intersection(visible);
        for x in keyline.left()..keyline.right() {
            for y in keyline.top()..keyline.bottom() {
                buf[(x, y)].set_symbol("─").set_fg(KEYLINE_COLOR);
            }
        }

        for view in views {
            view.render(buf);
        }
    }
}
