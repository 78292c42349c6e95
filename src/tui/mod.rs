//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (hero typewriter on screen, smooth scroll, reveal fades,
//!   skill bars filling, simulated sends pending): draws every ~80ms.
//! - **Idle**: sleeps up to 500ms, only redraws on events or when a
//!   background task delivers an action.
//!
//! ## Background tasks
//!
//! Three kinds of work run off the UI loop, all as tokio tasks that send
//! `Action`s back over an mpsc channel:
//!
//! - the typewriter (runs for the whole session, stopped through its
//!   handle on quit),
//! - the simulated form delivery (one-shot, 2s),
//! - the simulated project-link open (one-shot, 1s).
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor
//! because ratatui's `set_cursor_position` resets the terminal's blink
//! timer on every `draw()` call, making blinking cursors appear erratic
//! during continuous redraws.

mod component;
mod components;
pub mod event;
pub mod markdown;
mod scroll;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::layout::Position;
use tui_scrollview::ScrollViewState;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::content::{ProjectLink, SectionId};
use crate::core::reveal::RevealTracker;
use crate::core::state::{App, PROJECT_OPEN_DELAY, SUBMISSION_DELAY, Submission};
use crate::core::typewriter::Typewriter;
use crate::core::validate::FormField;
use crate::tui::components::{FormState, HeaderState, MenuEvent, MenuState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::scroll::SmoothScroll;
use crate::tui::ui::PageLayout;

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Navigate the page. Enter on the contact section switches to Form.
    Browse,
    /// Text editing in the contact form. Esc switches back to Browse.
    Form,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub scroll_state: ScrollViewState,
    pub smooth: SmoothScroll,
    pub header: HeaderState,
    /// Menu overlay state (None = hidden); mirrors `App::menu_open`.
    pub menu: Option<MenuState>,
    pub form: FormState,
    pub input_mode: InputMode,
    pub reveal: RevealTracker,
    /// Section geometry from the last render.
    pub layout: PageLayout,
    pub selected_project: usize,
    pub viewport_height: u16,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            smooth: SmoothScroll::new(),
            header: HeaderState::new(),
            menu: None,
            form: FormState::new(),
            input_mode: InputMode::Browse,
            reveal: RevealTracker::new(config.skills.len()),
            layout: PageLayout::default(),
            selected_project: 0,
            viewport_height: 0,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Enable Kitty keyboard protocol unconditionally. Detection via
        // supports_keyboard_enhancement() fails in WSL, but the protocol
        // is harmlessly ignored by terminals that don't support it
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
        );
    }
}

pub fn run(config: ResolvedConfig, animator: Typewriter) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(&config);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => guard,
        Err(e) => {
            ratatui::restore();
            return Err(e);
        }
    };

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let typewriter = spawn_typewriter(animator, tx.clone());
    let mut task_handles: Vec<tokio::task::AbortHandle> = Vec::new();

    let mut needs_redraw = true; // Force first frame
    // --section targets can only be resolved once the page is measured
    let mut initial_jump = Some(config.start_section);

    loop {
        let now = Instant::now();

        // Reconcile the menu overlay with core state
        if app.menu_open && tui.menu.is_none() {
            tui.menu = Some(MenuState::new(app.active_section));
        } else if !app.menu_open && tui.menu.is_some() {
            tui.menu = None;
        }

        // Smooth scroll easing
        if let Some(offset) = tui.smooth.tick(now) {
            tui.scroll_state.set_offset(Position { x: 0, y: offset });
            needs_redraw = true;
        }

        // The success banner removes itself after its deadline
        if app.form.success.as_ref().is_some_and(|s| s.expired(now)) {
            app.form.success = None;
            needs_redraw = true;
        }

        // Typewriter frames only matter while the hero is on screen
        let hero_on_screen =
            tui.scroll_state.offset().y < tui.layout.heights[SectionId::Home.index()];
        let animating = hero_on_screen
            || tui.smooth.is_animating()
            || tui.reveal.animating(now)
            || app.form.is_sending
            || app.pending_project.is_some();

        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, now))?;
            needs_redraw = false;

            if let Some(section) = initial_jump.take() {
                if section != SectionId::Home {
                    tui.scroll_state.set_offset(Position {
                        x: 0,
                        y: scroll_target(&tui, section),
                    });
                    needs_redraw = true;
                }
            }
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits regardless of mode
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // An open notice modal swallows keys until dismissed
            if app.notice.is_some() {
                if matches!(
                    event,
                    TuiEvent::InputChar(_) | TuiEvent::Escape | TuiEvent::Submit
                ) {
                    update(&mut app, Action::DismissNotice);
                }
                continue;
            }

            // When the menu is open, route all events to it
            if app.menu_open {
                let menu_event = tui.menu.as_mut().and_then(|menu| menu.handle_event(&event));
                match menu_event {
                    Some(MenuEvent::Navigate(section)) => {
                        let effect = update(&mut app, Action::NavigateTo(section));
                        apply_effect(
                            effect,
                            &mut tui,
                            &tx,
                            &mut task_handles,
                            &mut should_quit,
                            now,
                        );
                        tui.menu = None;
                    }
                    Some(MenuEvent::Dismiss) => {
                        update(&mut app, Action::CloseMenu);
                        tui.menu = None;
                    }
                    None => {}
                }
                continue;
            }

            // Mouse wheel and page keys scroll in any mode
            match event {
                TuiEvent::ScrollUp => {
                    tui.smooth.interrupt();
                    tui.scroll_state.scroll_up();
                    continue;
                }
                TuiEvent::ScrollDown => {
                    tui.smooth.interrupt();
                    tui.scroll_state.scroll_down();
                    continue;
                }
                TuiEvent::ScrollPageUp => {
                    tui.smooth.interrupt();
                    tui.scroll_state.scroll_page_up();
                    continue;
                }
                TuiEvent::ScrollPageDown => {
                    tui.smooth.interrupt();
                    tui.scroll_state.scroll_page_down();
                    continue;
                }
                _ => {}
            }

            // Modal event dispatch
            match tui.input_mode {
                InputMode::Browse => {
                    let action = browse_action(&event, &app, &mut tui);
                    if let Some(action) = action {
                        let effect = update(&mut app, action);
                        apply_effect(
                            effect,
                            &mut tui,
                            &tx,
                            &mut task_handles,
                            &mut should_quit,
                            now,
                        );
                    }
                }
                InputMode::Form => {
                    if let Some(action) = form_action(&event, &mut app, &mut tui) {
                        let effect = update(&mut app, action);
                        apply_effect(
                            effect,
                            &mut tui,
                            &tx,
                            &mut task_handles,
                            &mut should_quit,
                            now,
                        );
                    }
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (typewriter frames, simulated
        // delivery and project opens)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let completed_send = matches!(action, Action::SubmissionComplete(_));
            let effect = update(&mut app, action);
            apply_effect(
                effect,
                &mut tui,
                &tx,
                &mut task_handles,
                &mut should_quit,
                now,
            );
            if completed_send {
                // Mirror the page: a successful send resets the form fields
                tui.form.clear();
            }
        }
    }

    // Release the pending timers before restoring the terminal
    typewriter.stop();
    for handle in task_handles.drain(..) {
        handle.abort();
    }

    ratatui::restore();
    Ok(())
}

/// Translate a Browse-mode event into an Action, updating TUI-local
/// state (project selection, form focus entry) along the way.
fn browse_action(event: &TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    match event {
        TuiEvent::InputChar('q') => Some(Action::Quit),
        TuiEvent::InputChar('m') => Some(Action::ToggleMenu),
        TuiEvent::InputChar(c) => {
            if let Some(section) = SectionId::from_digit(*c) {
                return Some(Action::NavigateTo(section));
            }
            match (*c, app.active_section) {
                // Project shortcuts only apply while browsing that section
                ('g', SectionId::Projects) => Some(Action::OpenProject {
                    index: tui.selected_project,
                    link: ProjectLink::Repo,
                }),
                _ => None,
            }
        }
        TuiEvent::NextSection => Some(Action::NavigateTo(app.active_section.next())),
        TuiEvent::PrevSection => Some(Action::NavigateTo(app.active_section.prev())),
        TuiEvent::CursorUp => {
            tui.smooth.interrupt();
            tui.scroll_state.scroll_up();
            None
        }
        TuiEvent::CursorDown => {
            tui.smooth.interrupt();
            tui.scroll_state.scroll_down();
            None
        }
        TuiEvent::CursorHome => {
            tui.smooth.interrupt();
            tui.scroll_state.scroll_to_top();
            None
        }
        TuiEvent::CursorEnd => {
            tui.smooth.interrupt();
            tui.scroll_state.scroll_to_bottom();
            None
        }
        TuiEvent::CursorLeft if app.active_section == SectionId::Projects => {
            tui.selected_project = tui.selected_project.saturating_sub(1);
            None
        }
        TuiEvent::CursorRight if app.active_section == SectionId::Projects => {
            let last = app.projects.len().saturating_sub(1);
            tui.selected_project = (tui.selected_project + 1).min(last);
            None
        }
        TuiEvent::Submit => match app.active_section {
            SectionId::Contact => {
                tui.input_mode = InputMode::Form;
                None
            }
            SectionId::Projects => Some(Action::OpenProject {
                index: tui.selected_project,
                link: ProjectLink::Demo,
            }),
            _ => None,
        },
        _ => None,
    }
}

/// Form-mode event handling: routes editing events to the focused field,
/// validates fields as focus leaves them, and turns Ctrl+S into the
/// submit action.
fn form_action(event: &TuiEvent, app: &mut App, tui: &mut TuiState) -> Option<Action> {
    match event {
        TuiEvent::Escape => {
            blur_focused(app, tui);
            tui.input_mode = InputMode::Browse;
            None
        }
        TuiEvent::SubmitForm => {
            blur_focused(app, tui);
            let (name, email, message) = tui.form.snapshot();
            Some(Action::SubmitForm {
                name,
                email,
                message,
            })
        }
        TuiEvent::NextSection | TuiEvent::CursorDown => {
            blur_focused(app, tui);
            tui.form.focus_next();
            None
        }
        TuiEvent::PrevSection | TuiEvent::CursorUp => {
            blur_focused(app, tui);
            tui.form.focus_prev();
            None
        }
        TuiEvent::Submit => {
            if tui.form.focus == FormField::Message {
                tui.form
                    .focused_mut()
                    .handle_event(&TuiEvent::InputChar('\n'));
            } else {
                blur_focused(app, tui);
                tui.form.focus_next();
            }
            None
        }
        other => {
            tui.form.focused_mut().handle_event(other);
            None
        }
    }
}

/// Validate the field that is about to lose focus.
fn blur_focused(app: &mut App, tui: &mut TuiState) {
    let field = tui.form.focus;
    let value = tui.form.value(field).to_string();
    update(app, Action::FieldBlurred { field, value });
}

/// Perform the side effects `update()` asked for.
fn apply_effect(
    effect: Effect,
    tui: &mut TuiState,
    tx: &mpsc::Sender<Action>,
    task_handles: &mut Vec<tokio::task::AbortHandle>,
    should_quit: &mut bool,
    now: Instant,
) {
    match effect {
        Effect::None => {}
        Effect::Quit => *should_quit = true,
        Effect::ScrollTo(section) => {
            let current = tui.scroll_state.offset().y;
            tui.smooth.start(current, scroll_target(tui, section), now);
        }
        Effect::SpawnSubmission(submission) => {
            task_handles.push(spawn_submission(submission, tx.clone()));
        }
        Effect::SpawnProjectOpen { index, link } => {
            task_handles.push(spawn_project_open(index, link, tx.clone()));
        }
    }
}

/// Scroll offset that puts a section's top at the top of the viewport,
/// clamped so the page end never scrolls past the bottom.
fn scroll_target(tui: &TuiState, section: SectionId) -> u16 {
    tui.layout
        .top_of(section)
        .min(tui.layout.total.saturating_sub(tui.viewport_height))
}

/// Handle to the typewriter task. `stop()` cancels the pending timer so
/// the animator can be torn down cleanly on shutdown.
pub struct TypewriterHandle {
    abort: tokio::task::AbortHandle,
}

impl TypewriterHandle {
    pub fn stop(&self) {
        self.abort.abort();
    }
}

/// Run the typewriter state machine on its own task: tick, publish the
/// frame, sleep the frame's delay, repeat. Exactly one timer is pending at
/// any moment; aborting the task releases it.
pub fn spawn_typewriter(mut animator: Typewriter, tx: mpsc::Sender<Action>) -> TypewriterHandle {
    info!(
        "Starting typewriter over {} phrases",
        animator.phrase_count()
    );
    let handle = tokio::spawn(async move {
        tokio::time::sleep(animator.timing().start_delay).await;
        loop {
            let frame = animator.tick();
            let delay = frame.delay;
            if tx.send(Action::TypewriterFrame(frame.text)).is_err() {
                debug!("Typewriter receiver dropped, stopping");
                return;
            }
            tokio::time::sleep(delay).await;
        }
    });
    TypewriterHandle {
        abort: handle.abort_handle(),
    }
}

/// Simulated delivery: hold the submission for a moment, then report it
/// back as completed. The payload is logged in place of a real backend.
fn spawn_submission(submission: Submission, tx: mpsc::Sender<Action>) -> tokio::task::AbortHandle {
    info!("Spawning simulated delivery (id={})", submission.id);
    match serde_json::to_string(&submission) {
        Ok(payload) => debug!("Submission payload: {payload}"),
        Err(e) => warn!("Failed to serialize submission: {e}"),
    }
    let handle = tokio::spawn(async move {
        tokio::time::sleep(SUBMISSION_DELAY).await;
        if tx.send(Action::SubmissionComplete(submission)).is_err() {
            warn!("Failed to send submission completion: receiver dropped");
        }
    });
    handle.abort_handle()
}

/// Simulated project-link open: a short loading pause, then the notice.
fn spawn_project_open(
    index: usize,
    link: ProjectLink,
    tx: mpsc::Sender<Action>,
) -> tokio::task::AbortHandle {
    info!("Spawning simulated open: project {index} ({link:?})");
    let handle = tokio::spawn(async move {
        tokio::time::sleep(PROJECT_OPEN_DELAY).await;
        if tx.send(Action::ProjectOpened { index, link }).is_err() {
            warn!("Failed to send project open: receiver dropped");
        }
    });
    handle.abort_handle()
}
