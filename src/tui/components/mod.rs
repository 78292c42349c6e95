//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components follow two patterns:
//!
//! ### Page Sections
//!
//! Transient structs built fresh each frame from `App` state, rendered
//! *into the page ScrollView* at content coordinates:
//! - `Hero`: name, headline, and the typewriter line
//! - `About`: markdown bio
//! - `Skills`: animated skill bars
//! - `Projects`: project cards with Demo/GitHub buttons
//! - `ContactCard`: the contact form
//!
//! Each exposes `height(width)` so the page can lay sections out and cache
//! offsets for scrolling, hit testing, and visibility tracking.
//!
//! ### Frame Overlays & Chrome
//!
//! Rendered directly to the `Frame`, on top of or around the page:
//! - `Header`: nav bar with scroll shadow / auto-hide
//! - `MenuOverlay`: the section menu (persistent state + transient wrapper)
//! - `Notice`: modal raised by project buttons
//!
//! ## Design Philosophy
//!
//! Components receive external data as "props" (struct fields), not by
//! reaching into global state. Persistent presentation state (menu
//! selection, field buffers) lives in `TuiState`; everything else is
//! rebuilt per frame. Each component file contains its state types, event
//! handling, rendering, and tests.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType};

pub mod about;
pub mod contact;
pub mod header;
pub mod hero;
pub mod menu;
pub mod notice;
pub mod projects;
pub mod skills;

pub use contact::{ContactCard, FormState};
pub use header::{Header, HeaderState};
pub use menu::{MenuEvent, MenuOverlay, MenuState};
pub use notice::Notice;

/// Bordered block shared by all page sections.
///
/// `fade` is the section's reveal progress: content starts dimmed and
/// settles to normal as the fade completes. `highlight` marks the section
/// the user is interacting with (the active nav target).
pub(crate) fn section_block(title: String, fade: f32, highlight: bool) -> Block<'static> {
    let border_style = if fade < 1.0 {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    } else if highlight {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title_style = if fade >= 1.0 {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        border_style
    };

    let mut block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(format!(" {title} "))
        .title_style(title_style);
    if fade < 0.5 {
        // Early in the reveal the whole section reads as muted
        block = block.style(Style::default().add_modifier(Modifier::DIM));
    }
    block
}
