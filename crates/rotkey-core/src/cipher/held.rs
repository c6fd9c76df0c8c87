//! The rest-condition observer.
//!
//! Tracks which keys are currently held down so the engine can tell whether
//! the board is "at rest". Reseeding is only allowed at rest: if no key is
//! held, no keystroke can be mid-flight, so a new rotation can never split
//! a press from its matching release.

use crate::event::{KeyAction, KeyEvent};
use crate::keymap::KeyCode;

/// Set of keys currently held down, fed by every event the engine sees.
///
/// Backed by a small `Vec`: the population is bounded by the board's
/// rollover (a handful of keys), so a linear scan is cheaper than hashing.
#[derive(Debug, Default)]
pub struct HeldKeys {
    down: Vec<KeyCode>,
}

impl HeldKeys {
    /// Creates an empty observer (nothing held).
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a press or release.
    ///
    /// A repeated press of an already-held key and a release of a key that
    /// was never seen going down are both no-ops; scanners emit those
    /// around firmware resets.
    pub fn observe(&mut self, event: KeyEvent) {
        match event.action {
            KeyAction::Press => {
                if !self.down.contains(&event.code) {
                    self.down.push(event.code);
                }
            }
            KeyAction::Release => {
                self.down.retain(|&code| code != event.code);
            }
        }
    }

    /// Returns `true` while at least one key is held down.
    pub fn any_held(&self) -> bool {
        !self.down.is_empty()
    }

    /// Number of keys currently held.
    pub fn held_count(&self) -> usize {
        self.down.len()
    }
}
