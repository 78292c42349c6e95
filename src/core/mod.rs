//! # Core Application Logic
//!
//! This module contains Folio's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Typewriter machine   │
//!                    │  • Reveal tracking      │
//!                    │  • Field validation     │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum — everything that can happen in the app
//! - [`config`]: Settings and page content, TOML + env + CLI resolution
//! - [`content`]: Profile, skills, projects, and the section order
//! - [`typewriter`]: The hero typing-animation state machine
//! - [`reveal`]: Scroll-triggered section and skill-bar animation tracking
//! - [`validate`]: Contact form field validation

pub mod action;
pub mod config;
pub mod content;
pub mod reveal;
pub mod state;
pub mod typewriter;
pub mod validate;
