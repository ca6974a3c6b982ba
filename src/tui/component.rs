use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// Something drawn into one region of the reader screen.
///
/// Components are built fresh every frame from the core state they show
/// (section, cursor position, progress). Anything that must survive between
/// frames, such as the content scroll offset or the TOC list offset, lives
/// in a separate state struct in `TuiState` that the component borrows.
///
/// `render` takes `&mut self` because drawing may update that borrowed
/// state: the content panel caches wrapped lines and clamps its scroll, the
/// TOC records which entry ended up at the top of the list.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Persistent component state that reacts to input directly, without a
/// round trip through `core::update`.
pub trait EventHandler {
    /// What the handler reports back to the event loop, if anything.
    type Event;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
