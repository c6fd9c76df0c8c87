//! USB HID usage IDs (page 0x07, Keyboard/Keypad page).
//!
//! This is the keycode representation used throughout the controller: the
//! matrix scanner reports HID usage IDs and the host reporter consumes them.
//! HID codes identify **physical key positions**, not characters (letters
//! start at 0x04 (`KeyA`), not at ASCII `'A'`), which is exactly what the
//! cipher wants, since it substitutes one key position for another.
//!
//! Reference: USB HID Usage Tables 1.3, Section 10 (Keyboard/Keypad page).
//!
//! # The `Unknown` sentinel
//!
//! Not every position on a programmable board has a standard HID assignment
//! (vendor macro keys, rotary encoders). [`KeyCode::Unknown`] (0x0000)
//! stands in for any such key. The cipher treats it like every other
//! non-letter: pass through untouched.

use serde::{Deserialize, Serialize};

/// USB HID usage ID for keyboard keys (page 0x07).
///
/// The numeric value of each variant is its HID usage ID on the
/// keyboard/keypad page. [`KeyCode::Unknown`] represents any key with no
/// standard mapping.
///
/// Serde derives use the variant name, so configuration files can name keys
/// directly (`toggle_key = "F24"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum KeyCode {
    // Letters (HID 0x04–0x1D)
    KeyA = 0x04,
    KeyB = 0x05,
    KeyC = 0x06,
    KeyD = 0x07,
    KeyE = 0x08,
    KeyF = 0x09,
    KeyG = 0x0A,
    KeyH = 0x0B,
    KeyI = 0x0C,
    KeyJ = 0x0D,
    KeyK = 0x0E,
    KeyL = 0x0F,
    KeyM = 0x10,
    KeyN = 0x11,
    KeyO = 0x12,
    KeyP = 0x13,
    KeyQ = 0x14,
    KeyR = 0x15,
    KeyS = 0x16,
    KeyT = 0x17,
    KeyU = 0x18,
    KeyV = 0x19,
    KeyW = 0x1A,
    KeyX = 0x1B,
    KeyY = 0x1C,
    KeyZ = 0x1D,

    // Digits (HID 0x1E–0x27)
    Digit1 = 0x1E,
    Digit2 = 0x1F,
    Digit3 = 0x20,
    Digit4 = 0x21,
    Digit5 = 0x22,
    Digit6 = 0x23,
    Digit7 = 0x24,
    Digit8 = 0x25,
    Digit9 = 0x26,
    Digit0 = 0x27,

    // Control keys (HID 0x28–0x38)
    Enter = 0x28,
    Escape = 0x29,
    Backspace = 0x2A,
    Tab = 0x2B,
    Space = 0x2C,
    Minus = 0x2D,
    Equal = 0x2E,
    BracketLeft = 0x2F,
    BracketRight = 0x30,
    Backslash = 0x31,
    Semicolon = 0x33,
    Quote = 0x34,
    Backquote = 0x35,
    Comma = 0x36,
    Period = 0x37,
    Slash = 0x38,

    // Lock keys
    CapsLock = 0x39,

    // Function keys (HID 0x3A–0x45)
    F1 = 0x3A,
    F2 = 0x3B,
    F3 = 0x3C,
    F4 = 0x3D,
    F5 = 0x3E,
    F6 = 0x3F,
    F7 = 0x40,
    F8 = 0x41,
    F9 = 0x42,
    F10 = 0x43,
    F11 = 0x44,
    F12 = 0x45,

    // Navigation cluster (HID 0x46–0x52)
    PrintScreen = 0x46,
    ScrollLock = 0x47,
    Pause = 0x48,
    Insert = 0x49,
    Home = 0x4A,
    PageUp = 0x4B,
    Delete = 0x4C,
    End = 0x4D,
    PageDown = 0x4E,
    ArrowRight = 0x4F,
    ArrowLeft = 0x50,
    ArrowDown = 0x51,
    ArrowUp = 0x52,

    // Extended function keys (HID 0x68–0x73).  Programmable boards commonly
    // assign these to macro/layer positions with no legend on the cap, which
    // makes them the natural home for the encrypt-mode toggle.
    F13 = 0x68,
    F14 = 0x69,
    F15 = 0x6A,
    F16 = 0x6B,
    F17 = 0x6C,
    F18 = 0x6D,
    F19 = 0x6E,
    F20 = 0x6F,
    F21 = 0x70,
    F22 = 0x71,
    F23 = 0x72,
    F24 = 0x73,

    // Modifier keys (HID 0xE0–0xE7)
    ControlLeft = 0xE0,
    ShiftLeft = 0xE1,
    AltLeft = 0xE2,
    MetaLeft = 0xE3,
    ControlRight = 0xE4,
    ShiftRight = 0xE5,
    AltRight = 0xE6,
    MetaRight = 0xE7,

    /// Sentinel for keys with no HID mapping.
    Unknown = 0x0000,
}

/// The 26 letter keys in alphabetical order.
///
/// This table is the single source of truth for the cipher's alphabet:
/// `LETTERS[i]` is the key for the letter with alphabet index `i`.
const LETTERS: [KeyCode; 26] = [
    KeyCode::KeyA,
    KeyCode::KeyB,
    KeyCode::KeyC,
    KeyCode::KeyD,
    KeyCode::KeyE,
    KeyCode::KeyF,
    KeyCode::KeyG,
    KeyCode::KeyH,
    KeyCode::KeyI,
    KeyCode::KeyJ,
    KeyCode::KeyK,
    KeyCode::KeyL,
    KeyCode::KeyM,
    KeyCode::KeyN,
    KeyCode::KeyO,
    KeyCode::KeyP,
    KeyCode::KeyQ,
    KeyCode::KeyR,
    KeyCode::KeyS,
    KeyCode::KeyT,
    KeyCode::KeyU,
    KeyCode::KeyV,
    KeyCode::KeyW,
    KeyCode::KeyX,
    KeyCode::KeyY,
    KeyCode::KeyZ,
];

impl KeyCode {
    /// Converts a raw u16 HID usage ID to a [`KeyCode`].
    ///
    /// Returns [`KeyCode::Unknown`] if the value does not correspond to a
    /// known variant.
    pub fn from_u16(value: u16) -> Self {
        match value {
            0x04 => KeyCode::KeyA,
            0x05 => KeyCode::KeyB,
            0x06 => KeyCode::KeyC,
            0x07 => KeyCode::KeyD,
            0x08 => KeyCode::KeyE,
            0x09 => KeyCode::KeyF,
            0x0A => KeyCode::KeyG,
            0x0B => KeyCode::KeyH,
            0x0C => KeyCode::KeyI,
            0x0D => KeyCode::KeyJ,
            0x0E => KeyCode::KeyK,
            0x0F => KeyCode::KeyL,
            0x10 => KeyCode::KeyM,
            0x11 => KeyCode::KeyN,
            0x12 => KeyCode::KeyO,
            0x13 => KeyCode::KeyP,
            0x14 => KeyCode::KeyQ,
            0x15 => KeyCode::KeyR,
            0x16 => KeyCode::KeyS,
            0x17 => KeyCode::KeyT,
            0x18 => KeyCode::KeyU,
            0x19 => KeyCode::KeyV,
            0x1A => KeyCode::KeyW,
            0x1B => KeyCode::KeyX,
            0x1C => KeyCode::KeyY,
            0x1D => KeyCode::KeyZ,
            0x1E => KeyCode::Digit1,
            0x1F => KeyCode::Digit2,
            0x20 => KeyCode::Digit3,
            0x21 => KeyCode::Digit4,
            0x22 => KeyCode::Digit5,
            0x23 => KeyCode::Digit6,
            0x24 => KeyCode::Digit7,
            0x25 => KeyCode::Digit8,
            0x26 => KeyCode::Digit9,
            0x27 => KeyCode::Digit0,
            0x28 => KeyCode::Enter,
            0x29 => KeyCode::Escape,
            0x2A => KeyCode::Backspace,
            0x2B => KeyCode::Tab,
            0x2C => KeyCode::Space,
            0x2D => KeyCode::Minus,
            0x2E => KeyCode::Equal,
            0x2F => KeyCode::BracketLeft,
            0x30 => KeyCode::BracketRight,
            0x31 => KeyCode::Backslash,
            0x33 => KeyCode::Semicolon,
            0x34 => KeyCode::Quote,
            0x35 => KeyCode::Backquote,
            0x36 => KeyCode::Comma,
            0x37 => KeyCode::Period,
            0x38 => KeyCode::Slash,
            0x39 => KeyCode::CapsLock,
            0x3A => KeyCode::F1,
            0x3B => KeyCode::F2,
            0x3C => KeyCode::F3,
            0x3D => KeyCode::F4,
            0x3E => KeyCode::F5,
            0x3F => KeyCode::F6,
            0x40 => KeyCode::F7,
            0x41 => KeyCode::F8,
            0x42 => KeyCode::F9,
            0x43 => KeyCode::F10,
            0x44 => KeyCode::F11,
            0x45 => KeyCode::F12,
            0x46 => KeyCode::PrintScreen,
            0x47 => KeyCode::ScrollLock,
            0x48 => KeyCode::Pause,
            0x49 => KeyCode::Insert,
            0x4A => KeyCode::Home,
            0x4B => KeyCode::PageUp,
            0x4C => KeyCode::Delete,
            0x4D => KeyCode::End,
            0x4E => KeyCode::PageDown,
            0x4F => KeyCode::ArrowRight,
            0x50 => KeyCode::ArrowLeft,
            0x51 => KeyCode::ArrowDown,
            0x52 => KeyCode::ArrowUp,
            0x68 => KeyCode::F13,
            0x69 => KeyCode::F14,
            0x6A => KeyCode::F15,
            0x6B => KeyCode::F16,
            0x6C => KeyCode::F17,
            0x6D => KeyCode::F18,
            0x6E => KeyCode::F19,
            0x6F => KeyCode::F20,
            0x70 => KeyCode::F21,
            0x71 => KeyCode::F22,
            0x72 => KeyCode::F23,
            0x73 => KeyCode::F24,
            0xE0 => KeyCode::ControlLeft,
            0xE1 => KeyCode::ShiftLeft,
            0xE2 => KeyCode::AltLeft,
            0xE3 => KeyCode::MetaLeft,
            0xE4 => KeyCode::ControlRight,
            0xE5 => KeyCode::ShiftRight,
            0xE6 => KeyCode::AltRight,
            0xE7 => KeyCode::MetaRight,
            _ => KeyCode::Unknown,
        }
    }

    /// Returns the raw USB HID usage ID value for this key code.
    pub fn as_u16(self) -> u16 {
        self as u16
    }

    /// Returns the alphabet index (`KeyA` = 0 … `KeyZ` = 25) if this key is
    /// a letter, `None` otherwise.
    ///
    /// This is an explicit enumerated classification, not arithmetic on the
    /// usage-ID values; the cipher must not depend on the numbering of the
    /// keycode table.
    pub fn letter_index(self) -> Option<u8> {
        LETTERS
            .iter()
            .position(|&letter| letter == self)
            .map(|i| i as u8)
    }

    /// Returns `true` if this key is one of the 26 letter keys.
    pub fn is_letter(self) -> bool {
        self.letter_index().is_some()
    }

    /// Returns the letter key for an alphabet index.
    ///
    /// `index` must be in `0..26`; the cipher guarantees this by reducing
    /// every shift modulo 26 before calling.
    pub fn from_letter_index(index: u8) -> Self {
        LETTERS[usize::from(index)]
    }

    /// Returns the letter key for an ASCII letter, ignoring case.
    ///
    /// Returns `None` for non-letter characters.
    pub fn from_ascii_letter(ch: char) -> Option<Self> {
        if ch.is_ascii_alphabetic() {
            let index = ch.to_ascii_uppercase() as u8 - b'A';
            Some(Self::from_letter_index(index))
        } else {
            None
        }
    }
}
