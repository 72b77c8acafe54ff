//! Keyboard input handling

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game_core::{InputEvent, Key};

use crate::error::ClientError;

/// Map a terminal key code to a game key
pub fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Enter => Key::Confirm,
        KeyCode::Esc => Key::Escape,
        _ => Key::Other,
    }
}

/// Translate a terminal key event. Ctrl-C stands in for closing the window.
pub fn translate_key(key: &KeyEvent) -> InputEvent {
    let pressed = key.kind != KeyEventKind::Release;
    if pressed && key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return InputEvent::Quit;
    }

    let mapped = map_key(key.code);
    if pressed {
        InputEvent::KeyDown(mapped)
    } else {
        InputEvent::KeyUp(mapped)
    }
}

/// Synthesizes key releases for terminals that only report presses.
///
/// Held keys arrive as auto-repeated presses; a key counts as released once
/// no press for it has been seen within `timeout`.
#[derive(Debug, Clone)]
pub struct KeyHoldTracker {
    timeout: Duration,
    held: Vec<(Key, Instant)>,
}

impl KeyHoldTracker {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            held: Vec::new(),
        }
    }

    pub fn pressed(&mut self, key: Key, now: Instant) {
        if key == Key::Other {
            return;
        }
        match self.held.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = now,
            None => self.held.push((key, now)),
        }
    }

    pub fn released(&mut self, key: Key) {
        self.held.retain(|(k, _)| *k != key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.iter().any(|(k, _)| *k == key)
    }

    /// Release every key whose last press is older than the timeout
    pub fn expire(&mut self, now: Instant) -> Vec<InputEvent> {
        let timeout = self.timeout;
        let mut released = Vec::new();
        self.held.retain(|&(key, seen)| {
            let stale = now.saturating_duration_since(seen) >= timeout;
            if stale {
                released.push(InputEvent::KeyUp(key));
            }
            !stale
        });
        released
    }
}

/// Drains crossterm events into game input once per frame
pub struct TerminalInput {
    tracker: Option<KeyHoldTracker>,
}

impl TerminalInput {
    /// `reports_releases` is whether the terminal accepted the keyboard
    /// enhancement flags. Without them releases are synthesized.
    pub fn new(reports_releases: bool, release_timeout: Duration) -> Self {
        let tracker = if reports_releases {
            None
        } else {
            Some(KeyHoldTracker::new(release_timeout))
        };
        Self { tracker }
    }

    /// Collect every pending event without blocking
    pub fn poll(&mut self) -> Result<Vec<InputEvent>, ClientError> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            let raw = event::read()?;
            if let Some(input) = self.translate(raw, Instant::now()) {
                events.push(input);
            }
        }
        if let Some(tracker) = &mut self.tracker {
            events.extend(tracker.expire(Instant::now()));
        }
        Ok(events)
    }

    /// Translate one terminal event; anything but a key is dropped
    pub fn translate(&mut self, raw: Event, now: Instant) -> Option<InputEvent> {
        let input = match raw {
            Event::Key(key) => translate_key(&key),
            _ => return None,
        };

        if let Some(tracker) = &mut self.tracker {
            match input {
                InputEvent::KeyDown(key) => tracker.pressed(key, now),
                InputEvent::KeyUp(key) => tracker.released(key),
                InputEvent::Quit => {}
            }
        }
        Some(input)
    }
}
