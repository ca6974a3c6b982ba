use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    Next,
    Previous,
    First,
    Last,
    Jump(usize), // 0-based section index from a digit key
    ToggleSidebar,

    // TUI-local events (handled directly in TUI)
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    Click(u16, u16), // column, row
    Resize,
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> std::io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(match event::read()? {
        Event::Key(key_event) => map_key(key_event),
        Event::Mouse(mouse_event) => map_mouse(mouse_event),
        Event::Resize(..) => Some(TuiEvent::Resize),
        _ => None,
    })
}

pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Some terminals report releases too; act on press/repeat only
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),

        (_, KeyCode::Right)
        | (_, KeyCode::Char('l'))
        | (_, KeyCode::Char('n'))
        | (_, KeyCode::Char(' ')) => Some(TuiEvent::Next),
        (_, KeyCode::Left)
        | (_, KeyCode::Char('h'))
        | (_, KeyCode::Char('p'))
        | (_, KeyCode::Backspace) => Some(TuiEvent::Previous),
        (_, KeyCode::Home) | (_, KeyCode::Char('g')) => Some(TuiEvent::First),
        (_, KeyCode::End) | (_, KeyCode::Char('G')) => Some(TuiEvent::Last),
        (_, KeyCode::Char(c @ '1'..='9')) => {
            c.to_digit(10).map(|d| TuiEvent::Jump(d as usize - 1))
        }

        (_, KeyCode::Tab) | (_, KeyCode::Char('s')) => Some(TuiEvent::ToggleSidebar),

        (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(TuiEvent::ScrollUp),
        (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Some(TuiEvent::ScrollDown),
        (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
        (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
        _ => None,
    }
}

pub fn map_mouse(mouse_event: MouseEvent) -> Option<TuiEvent> {
    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            Some(TuiEvent::Click(mouse_event.column, mouse_event.row))
        }
        MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
        MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
        _ => None,
    }
}
