//! # Menu Overlay Component
//!
//! Centered overlay listing the page sections. Opened with `m`, dismissed
//! with Esc, `m`, or any key it doesn't recognize (the keyboard stand-in
//! for clicking outside the menu). Picking an entry navigates and closes.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `MenuState` lives in `TuiState`
//! - `MenuOverlay` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::core::content::SectionId;
use crate::tui::event::TuiEvent;

/// Persistent state for the menu overlay.
pub struct MenuState {
    pub selected: usize,
    pub list_state: ListState,
}

impl MenuState {
    /// Open the menu with the active section pre-selected.
    pub fn new(active: SectionId) -> Self {
        let selected = active.index();
        let mut list_state = ListState::default();
        list_state.select(Some(selected));
        Self {
            selected,
            list_state,
        }
    }

    /// Handle a key event, returning a MenuEvent if the overlay should act.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<MenuEvent> {
        match event {
            TuiEvent::Escape => Some(MenuEvent::Dismiss),
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(SectionId::ALL.len() - 1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Submit => Some(MenuEvent::Navigate(SectionId::ALL[self.selected])),
            TuiEvent::InputChar(c) => {
                if let Some(section) = SectionId::from_digit(*c) {
                    Some(MenuEvent::Navigate(section))
                } else {
                    // Anything else counts as clicking outside the menu
                    Some(MenuEvent::Dismiss)
                }
            }
            _ => None,
        }
    }
}

/// Events emitted by the menu overlay.
#[derive(Debug, PartialEq, Eq)]
pub enum MenuEvent {
    Navigate(SectionId),
    Dismiss,
}

/// Transient render wrapper for the menu overlay.
pub struct MenuOverlay<'a> {
    state: &'a mut MenuState,
}

impl<'a> MenuOverlay<'a> {
    pub fn new(state: &'a mut MenuState) -> Self {
        Self { state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(40, 50, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Menu ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" ↑↓ Move  Enter Go  Esc Close ").centered())
            .padding(Padding::horizontal(1));

        let items: Vec<ListItem> = SectionId::ALL
            .iter()
            .enumerate()
            .map(|(i, section)| {
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::styled(
                    format!("{}  {}", i + 1, section.label()),
                    style,
                ))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
