use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Each page behavior (header, menu overlay, contact form, notice modal)
/// is its own component with an explicit contract:
/// - Data comes in via props (struct fields).
/// - Internal presentation state stays internal.
/// - Rendering targets a `Frame` within a given `Rect`.
///
/// # Mutability
///
/// `render` takes `&mut self` so components can update caches and
/// presentation state (scroll offsets, cursor placement) during the render
/// pass. This aligns with Ratatui's `StatefulWidget` pattern.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
