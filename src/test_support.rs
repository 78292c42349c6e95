//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use tui_scrollview::{ScrollView, ScrollViewState};

use crate::core::config::{FolioConfig, ResolvedConfig, resolve};
use crate::core::state::App;

/// Resolved config with the built-in placeholder content.
pub fn test_config() -> ResolvedConfig {
    resolve(&FolioConfig::default(), None)
}

/// Creates a test App from the default placeholder content.
pub fn test_app() -> App {
    App::from_config(&test_config())
}

/// Render into a ScrollView of the given size, draw it on a test terminal,
/// and return the visible characters for assertions.
pub fn render_scrollview(
    width: u16,
    height: u16,
    draw: impl FnOnce(&mut ScrollView),
) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| {
            let mut sv = ScrollView::new(ratatui::layout::Size::new(width, height));
            draw(&mut sv);
            f.render_stateful_widget(sv, f.area(), &mut ScrollViewState::default());
        })
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}
