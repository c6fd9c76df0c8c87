//! The keycode space consumed by the cipher engine.
//!
//! Keycodes are USB HID usage IDs (page 0x07, Keyboard/Keypad), the same
//! numbering the controller's scanner firmware reports. The cipher never
//! does arithmetic on the raw usage IDs: alphabetic classification goes
//! through [`KeyCode::letter_index`] / [`KeyCode::from_letter_index`], so
//! the transform stays correct even if the underlying numbering changes.

pub mod hid;

pub use hid::KeyCode;
