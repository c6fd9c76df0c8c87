//! # rotkey-core
//!
//! Domain logic for the Rotkey programmable keyboard controller: the
//! "encrypt" mode that remaps alphabetic keystrokes through a rotating
//! substitution cipher before they reach the host.
//!
//! This crate has zero dependencies on OS APIs, hardware drivers, or I/O.
//! The matrix scanner that produces key events and the host reporter that
//! consumes them live behind traits in the daemon crate; everything here is
//! synchronous, total, and unit-testable in isolation.
//!
//! The crate defines:
//!
//! - **`keymap`** – the fixed keycode space (USB HID usage IDs, keyboard
//!   page 0x07) and the explicit letter classification the cipher relies on.
//!
//! - **`event`** – the `KeyEvent` record delivered by the scanner: a keycode
//!   plus a press/release action.
//!
//! - **`cipher`** – the `CipherEngine` state machine (enable toggle, letter
//!   transform, reseed gating), the `RotationRng` linear-congruential
//!   generator behind the rotation offset, and the `HeldKeys` observer that
//!   implements the rest condition.

pub mod cipher;
pub mod event;
pub mod keymap;

// Re-export the most-used types at the crate root so callers can write
// `rotkey_core::CipherEngine` instead of `rotkey_core::cipher::CipherEngine`.
pub use cipher::{CipherEngine, CipherSettings, HeldKeys, KeyDisposition, RotationRng};
pub use event::{KeyAction, KeyEvent};
pub use keymap::KeyCode;
