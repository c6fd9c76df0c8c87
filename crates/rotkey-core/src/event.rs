//! Key events as delivered by the matrix scanner.
//!
//! One `KeyEvent` per scan-tick edge: a key went down or a key came up.
//! Events are immutable once produced; the cipher engine consumes them one
//! at a time and never reorders or buffers.

use serde::{Deserialize, Serialize};

use crate::keymap::KeyCode;

/// Whether a key went down or came up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyAction {
    Press,
    Release,
}

/// A single key press or release reported by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyEvent {
    /// The key that changed state.
    pub code: KeyCode,
    /// Press or release.
    pub action: KeyAction,
}

impl KeyEvent {
    /// Creates a press event for `code`.
    pub fn press(code: KeyCode) -> Self {
        Self {
            code,
            action: KeyAction::Press,
        }
    }

    /// Creates a release event for `code`.
    pub fn release(code: KeyCode) -> Self {
        Self {
            code,
            action: KeyAction::Release,
        }
    }

    /// Returns `true` for the press edge.
    pub fn is_press(&self) -> bool {
        self.action == KeyAction::Press
    }
}
