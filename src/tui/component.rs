use ratatui::Frame;
use ratatui::layout::Rect;

/// A piece of the shortener screen.
///
/// Components get their data as props (struct fields), may keep
/// presentation state of their own, and draw into the `Rect` they are given.
/// `render` takes `&mut self` so a component can cache layout from the
/// last frame (the input box remembers its width for cursor movement).
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that turns raw terminal events into its own higher-level events.
pub trait EventHandler {
    type Event;

    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
