// Event Handling
// Selection listener contract and terminal event translation

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Listener notified when a tab is chosen
///
/// The bar holds its delegate weakly and calls it before checking whether
/// the chosen item is selectable, so non-selectable items still report.
pub trait MiniTabBarDelegate {
    fn on_tab_selected(&mut self, index: usize);
}

/// Application events that can be handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// Left click / tap at a terminal cell
    Tap { column: u16, row: u16 },

    /// Select the tab at a zero-based index
    SelectIndex(usize),

    /// Move selection right
    SelectNext,

    /// Move selection left
    SelectPrevious,

    /// Switch to the next active tint color
    CycleTint,

    /// Switch to the next inactive color
    CycleInactive,

    /// Toggle bold titles
    ToggleBold,

    /// Show or hide the background fill
    ToggleBackground,

    /// Replace all tabs with the configured set
    ResetTabs,

    /// No operation
    None,
}

/// Event handler that converts terminal events to application events
pub struct EventHandler;

impl EventHandler {
    /// Convert a crossterm event to an application event
    pub fn handle(event: Event) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key),
            Event::Mouse(mouse) => Self::handle_mouse(mouse),
            _ => AppEvent::None,
        }
    }

    /// Handle keyboard events
    fn handle_key(key: KeyEvent) -> AppEvent {
        // Only handle key press events
        if key.kind != KeyEventKind::Press {
            return AppEvent::None;
        }

        match key.code {
            // Quit
            KeyCode::Char('q') | KeyCode::Esc => AppEvent::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,

            // Direct selection (1-9)
            KeyCode::Char(c @ '1'..='9') => c
                .to_digit(10)
                .map(|digit| AppEvent::SelectIndex(digit as usize - 1))
                .unwrap_or(AppEvent::None),

            // Navigation
            KeyCode::Left | KeyCode::Char('h') => AppEvent::SelectPrevious,
            KeyCode::Right | KeyCode::Char('l') => AppEvent::SelectNext,

            // Re-skinning
            KeyCode::Char('t') => AppEvent::CycleTint,
            KeyCode::Char('i') => AppEvent::CycleInactive,
            KeyCode::Char('b') => AppEvent::ToggleBold,
            KeyCode::Char('g') => AppEvent::ToggleBackground,

            // Content
            KeyCode::Char('r') => AppEvent::ResetTabs,

            _ => AppEvent::None,
        }
    }

    /// Handle mouse events
    fn handle_mouse(mouse: MouseEvent) -> AppEvent {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => AppEvent::Tap {
                column: mouse.column,
                row: mouse.row,
            },
            _ => AppEvent::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(EventHandler::handle(key(KeyCode::Char('q'))), AppEvent::Quit);
        assert_eq!(EventHandler::handle(key(KeyCode::Esc)), AppEvent::Quit);
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(EventHandler::handle(ctrl_c), AppEvent::Quit);
    }

    #[test]
    fn test_digits_select_zero_based_index() {
        assert_eq!(EventHandler::handle(key(KeyCode::Char('1'))), AppEvent::SelectIndex(0));
        assert_eq!(EventHandler::handle(key(KeyCode::Char('9'))), AppEvent::SelectIndex(8));
        assert_eq!(EventHandler::handle(key(KeyCode::Char('0'))), AppEvent::None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(EventHandler::handle(Event::Key(release)), AppEvent::None);
    }

    #[test]
    fn test_left_press_is_a_tap() {
        let event = mouse(MouseEventKind::Down(MouseButton::Left), 12, 4);
        assert_eq!(EventHandler::handle(event), AppEvent::Tap { column: 12, row: 4 });

        let right = mouse(MouseEventKind::Down(MouseButton::Right), 12, 4);
        assert_eq!(EventHandler::handle(right), AppEvent::None);

        let scroll = mouse(MouseEventKind::ScrollDown, 12, 4);
        assert_eq!(EventHandler::handle(scroll), AppEvent::None);
    }
}
