// Mini Tab Bar Demo
// Terminal application driving the tab bar with mouse and keyboard

// IMPORTS ------------------>>

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use env_logger::Env;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::cell::RefCell;
use std::fs::File;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use mini_tab_bar::{
    create_tab_bar_from_config, create_tab_items, load_config, AppEvent, DemoConfig, EventHandler,
    MiniTabBar, MiniTabBarDelegate, TabFont,
};

//--------------------------------------------------------<<

/// Rows used by the tab bar: keyline, icons, titles
const TAB_BAR_HEIGHT: u16 = 3;
/// Number of selection reports shown in the status panel
const REPORT_HISTORY: usize = 8;

/// Delegate that remembers what the bar reported
#[derive(Default)]
struct SelectionLog {
    reports: Vec<usize>,
}

impl MiniTabBarDelegate for SelectionLog {
    fn on_tab_selected(&mut self, index: usize) {
        log::info!("tab bar reported selection of tab {}", index);
        self.reports.push(index);
    }
}

/// Re-skinning state cycled by the demo keys
struct Skin {
    tint_colors: Vec<Color>,
    inactive_colors: Vec<Color>,
    tint_index: usize,
    inactive_index: usize,
    bold: bool,
}

impl Skin {
    fn next_tint(&mut self) -> Option<Color> {
        if self.tint_colors.is_empty() {
            return None;
        }
        self.tint_index = (self.tint_index + 1) % self.tint_colors.len();
        Some(self.tint_colors[self.tint_index])
    }

    fn next_inactive(&mut self) -> Option<Color> {
        if self.inactive_colors.is_empty() {
            return None;
        }
        self.inactive_index = (self.inactive_index + 1) % self.inactive_colors.len();
        Some(self.inactive_colors[self.inactive_index])
    }
}

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    init_logging()?;

    let config = load_config(None).context("loading demo configuration")?;
    let mut bar = create_tab_bar_from_config(&config.tab_bar).context("building tab bar")?;
    let mut skin = Skin {
        tint_colors: config.application.tint_colors()?,
        inactive_colors: config.application.inactive_colors()?,
        tint_index: 0,
        inactive_index: 0,
        bold: bar.appearance().font().modifier.contains(Modifier::BOLD),
    };

    let selection_log = Rc::new(RefCell::new(SelectionLog::default()));
    bar.set_delegate(&selection_log);
    if bar.item_count() > 0 {
        bar.select_item(0, false);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &config, &mut bar, &mut skin, &selection_log);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

/// Send log output to a file so it does not tear the alternate screen
fn init_logging() -> Result<()> {
    let path = std::env::temp_dir().join("mini-tab-bar.log");
    let file = File::create(&path).with_context(|| format!("creating log file {}", path.display()))?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                           MAIN LOOP                                            │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &DemoConfig,
    bar: &mut MiniTabBar,
    skin: &mut Skin,
    selection_log: &Rc<RefCell<SelectionLog>>,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            let [content_area, tab_area] =
                Layout::vertical([Constraint::Min(0), Constraint::Length(TAB_BAR_HEIGHT)]).areas(f.area());

            render_status(f, content_area, config, bar, &selection_log.borrow());
            bar.render(f, tab_area);
        })?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }

        match EventHandler::handle(event::read()?) {
            AppEvent::Quit => break,
            AppEvent::Tap { column, row } => {
                bar.tap_at(column, row);
            }
            AppEvent::SelectIndex(index) => {
                if index < bar.item_count() {
                    bar.select_item(index, true);
                }
            }
            AppEvent::SelectNext => step_selection(bar, true),
            AppEvent::SelectPrevious => step_selection(bar, false),
            AppEvent::CycleTint => {
                if let Some(color) = skin.next_tint() {
                    bar.set_tint_color(color);
                }
            }
            AppEvent::CycleInactive => {
                if let Some(color) = skin.next_inactive() {
                    bar.set_inactive_color(color);
                }
            }
            AppEvent::ToggleBold => {
                skin.bold = !skin.bold;
                bar.set_font(skin.bold.then(TabFont::bold));
            }
            AppEvent::ToggleBackground => {
                let visible = bar.background_visible();
                bar.set_background_blur_enabled(!visible);
            }
            AppEvent::ResetTabs => {
                let items = create_tab_items(&config.tab_bar)?;
                bar.set_tabs(items);
            }
            AppEvent::None => {}
        }
    }

    Ok(())
}

/// Move to the next selectable tab in the given direction, wrapping around
fn step_selection(bar: &mut MiniTabBar, forward: bool) {
    let count = bar.item_count();
    if count == 0 {
        return;
    }

    let start = bar.selected_index().unwrap_or(if forward { count - 1 } else { 0 });
    let target = (1..=count)
        .map(|step| {
            if forward {
                (start + step) % count
            } else {
                (start + count - step % count) % count
            }
        })
        .find(|&index| bar.item_view(index).map(|v| v.item().selectable).unwrap_or(false));

    if let Some(index) = target {
        bar.select_item(index, true);
    }
}

fn render_status(f: &mut Frame, area: Rect, config: &DemoConfig, bar: &MiniTabBar, selection_log: &SelectionLog) {
    let selected = match bar.selected_index() {
        Some(index) => {
            let view = bar.item_view(index);
            let label = view
                .and_then(|v| v.item().title().map(str::to_string))
                .unwrap_or_else(|| "custom view".to_string());
            format!("{} ({})", index + 1, label)
        }
        None => "none".to_string(),
    };

    let recent: Vec<String> = selection_log
        .reports
        .iter()
        .rev()
        .take(REPORT_HISTORY)
        .map(|index| (index + 1).to_string())
        .collect();

    let appearance = bar.appearance();
    let lines = vec![
        Line::from(format!("Selected tab: {}", selected)),
        Line::from(format!("Delegate reports (newest first): {}", recent.join(", "))),
        Line::from(format!(
            "Tint: {:?}   Inactive: {:?}   Bold: {}   Background: {}",
            appearance.tint_color,
            appearance.inactive_color(),
            appearance.font().modifier.contains(Modifier::BOLD),
            bar.background_visible()
        )),
        Line::from(""),
        Line::styled(config.application.status_text.clone(), Style::default().fg(Color::DarkGray)),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", config.application.title)),
    );
    f.render_widget(paragraph, area);
}
