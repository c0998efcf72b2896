/// Keyboard input for the frame loop
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::trace;
use std::time::Duration;
use wire3d_core::{InputEvent, InputSource};

/// Translate a key press into a frame loop event.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(InputEvent::Quit),
        KeyCode::Esc | KeyCode::Char('q') => Some(InputEvent::Quit),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(InputEvent::ZoomIn),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(InputEvent::ZoomOut),
        _ => None,
    }
}

/// Non-blocking crossterm keyboard reader.
#[derive(Debug, Default)]
pub struct KeyboardInput;

impl InputSource for KeyboardInput {
    fn poll(&mut self) -> anyhow::Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(mapped) = map_key(key) {
                        events.push(mapped);
                    }
                }
                other => trace!("ignored terminal event {other:?}"),
            }
        }
        Ok(events)
    }
}
