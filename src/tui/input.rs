// Key repeat and debounce for panel navigation
//
// Terminals with keyboard enhancement report press, repeat and release
// separately; others only ever send presses. InputHandler turns either
// stream into "fire now or not":
// - Once keys (Enter, Space, Tab, q, ?, 1-9) fire once per press. Without
//   release events, a re-press is accepted after a short debounce.
// - Repeat keys (arrows, hjkl, Home/End) fire on press, then keep firing
//   at an interval once the hold delay has passed.
//
// Text typed into an inline edit or the prompt editor never reaches this
// handler, so held characters are not swallowed.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Re-press window for Once keys on terminals that never report release
const ONCE_DEBOUNCE: Duration = Duration::from_millis(150);

/// How a held key turns into actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBehavior {
    /// Fire once per press
    Once,
    /// Fire on press, then every `interval` after `delay`
    Repeat { delay: Duration, interval: Duration },
}

impl KeyBehavior {
    /// Field and section movement
    pub fn navigation() -> Self {
        Self::Repeat {
            delay: Duration::from_millis(500),
            interval: Duration::from_millis(50),
        }
    }

    /// Home/End
    pub fn fast_navigation() -> Self {
        Self::Repeat {
            delay: Duration::from_millis(300),
            interval: Duration::from_millis(30),
        }
    }

    /// Behavior for a key
    fn for_key(key: KeyCode) -> Self {
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Self::navigation(),
            KeyCode::Char('h' | 'j' | 'k' | 'l') => Self::navigation(),
            KeyCode::Home | KeyCode::End => Self::fast_navigation(),
            _ => Self::Once,
        }
    }
}

/// A key that is currently held down
#[derive(Debug, Clone, Copy)]
struct Held {
    since: Instant,
    last_fired: Instant,
}

/// Tracks held keys and decides when they fire
#[derive(Debug, Default)]
pub struct InputHandler {
    held: HashMap<KeyCode, Held>,
}

impl InputHandler {
    /// Record a press; returns true if the key's action should run
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        let now = Instant::now();
        let behavior = KeyBehavior::for_key(key);

        let Some(held) = self.held.get_mut(&key) else {
            self.held.insert(
                key,
                Held {
                    since: now,
                    last_fired: now,
                },
            );
            return true;
        };

        let fire = match behavior {
            KeyBehavior::Once => now.duration_since(held.last_fired) >= ONCE_DEBOUNCE,
            KeyBehavior::Repeat { delay, interval } => {
                now.duration_since(held.since) >= delay
                    && now.duration_since(held.last_fired) >= interval
            }
        };
        if fire {
            held.last_fired = now;
        }
        fire
    }

    /// Record a release
    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }
}
