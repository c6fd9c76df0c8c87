//! The encrypt-mode state machine.
//!
//! [`CipherEngine`] consumes one [`KeyEvent`] at a time and decides, for
//! each, whether the host sees the original event, a transformed one, or
//! nothing at all. While the mode is enabled, letter keys are substituted
//! through ROT13 plus a pseudo-random rotation offset; everything else
//! passes through unchanged.
//!
//! The engine is an explicit value owned by its caller, not process-global
//! state: construct one per controller, feed it the event stream, and its
//! lifetime is the process lifetime. Nothing in here blocks, allocates on
//! the hot path, or can fail.
//!
//! # Rotation stability
//!
//! A transformed press and its matching release must report the same
//! substituted key, otherwise the host is left with a stuck key. The engine
//! guarantees this structurally rather than by remembering per-key state:
//! a new rotation may only be drawn while no key is held (the rest
//! condition, tracked by [`HeldKeys`]), so no keystroke can ever straddle a
//! reseed.

pub mod held;
pub mod rng;

pub use held::HeldKeys;
pub use rng::RotationRng;

use tracing::{debug, trace};

use crate::event::KeyEvent;
use crate::keymap::KeyCode;

/// Size of the cipher alphabet.
const ALPHABET_LEN: u8 = 26;

/// Base shift applied before the rotation offset.
const BASE_SHIFT: u8 = 13;

/// Rotation in effect before the first reseed.
const DEFAULT_ROTATION: u8 = 1;

/// Compile-time/configured identity of the engine's special keys and the
/// initial PRNG seed.
#[derive(Debug, Clone)]
pub struct CipherSettings {
    /// Key that toggles encrypt mode. Consumed by the engine, never
    /// forwarded.
    pub toggle_key: KeyCode,
    /// Key whose press redraws the rotation when the board is at rest.
    /// Forwarded to the host as an ordinary keystroke.
    pub reseed_key: KeyCode,
    /// Initial seed for the rotation generator.
    pub seed: u32,
}

impl Default for CipherSettings {
    fn default() -> Self {
        Self {
            toggle_key: KeyCode::F24,
            reseed_key: KeyCode::Backspace,
            seed: rng::DEFAULT_SEED,
        }
    }
}

/// What the caller should do with an event after the engine has seen it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Report this event to the host. Either the original event untouched
    /// or a synthetic substitute for it.
    Forward(KeyEvent),
    /// The engine swallowed the event; the host sees nothing.
    Consumed,
}

/// The encrypt-mode engine: toggle state, current rotation, and the
/// rest-condition observer.
///
/// State is mutated only through [`process`](Self::process), one event at a
/// time, from a single thread. On construction (and therefore on every
/// process restart) the mode is off, the rotation is the default, and the
/// seed comes from [`CipherSettings`]; nothing persists.
pub struct CipherEngine {
    enabled: bool,
    rotation: u8,
    toggle_key: KeyCode,
    reseed_key: KeyCode,
    rng: RotationRng,
    held: HeldKeys,
}

impl CipherEngine {
    /// Creates a disabled engine with the default rotation.
    pub fn new(settings: CipherSettings) -> Self {
        Self {
            enabled: false,
            rotation: DEFAULT_ROTATION,
            toggle_key: settings.toggle_key,
            reseed_key: settings.reseed_key,
            rng: RotationRng::from_seed(settings.seed),
            held: HeldKeys::new(),
        }
    }

    /// Processes one scanner event and returns its disposition.
    ///
    /// Dispatch happens against the held-key state *before* this event, so
    /// a reseed press only counts as "at rest" when no other key is down.
    pub fn process(&mut self, event: KeyEvent) -> KeyDisposition {
        let disposition = self.dispatch(event);
        self.held.observe(event);
        disposition
    }

    /// Returns `true` while encrypt mode is on.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The rotation offset currently applied to letters, in `[1, 25]`.
    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    fn dispatch(&mut self, event: KeyEvent) -> KeyDisposition {
        // The toggle hotkey never reaches the host. Flipping on the press
        // edge only keeps a held toggle from strobing the mode.
        if event.code == self.toggle_key {
            if event.is_press() {
                self.enabled = !self.enabled;
                debug!(enabled = self.enabled, "encrypt mode toggled");
            }
            return KeyDisposition::Consumed;
        }

        // Reseed on the press edge, gated on the rest condition. The key
        // itself continues below and is forwarded like any other.
        if event.code == self.reseed_key && event.is_press() {
            if self.held.any_held() {
                trace!(
                    held = self.held.held_count(),
                    "reseed skipped, keys held"
                );
            } else {
                self.rotation = self.rng.next_rotation();
                debug!(rotation = self.rotation, "rotation redrawn");
            }
        }

        if self.enabled {
            if let Some(index) = event.code.letter_index() {
                let shifted = (index + BASE_SHIFT + self.rotation) % ALPHABET_LEN;
                let substitute = KeyCode::from_letter_index(shifted);
                trace!(from = ?event.code, to = ?substitute, "letter substituted");
                return KeyDisposition::Forward(KeyEvent {
                    code: substitute,
                    action: event.action,
                });
            }
        }

        KeyDisposition::Forward(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyAction;

    fn engine() -> CipherEngine {
        CipherEngine::new(CipherSettings::default())
    }

    /// Taps the toggle key (press + release).
    fn toggle(engine: &mut CipherEngine) {
        engine.process(KeyEvent::press(KeyCode::F24));
        engine.process(KeyEvent::release(KeyCode::F24));
    }

    fn forwarded_code(disposition: KeyDisposition) -> KeyCode {
        match disposition {
            KeyDisposition::Forward(event) => event.code,
            KeyDisposition::Consumed => panic!("expected a forwarded event"),
        }
    }

    // ── Toggle state machine ──────────────────────────────────────────────

    #[test]
    fn test_engine_starts_disabled_with_default_rotation() {
        let engine = engine();
        assert!(!engine.is_enabled());
        assert_eq!(engine.rotation(), DEFAULT_ROTATION);
    }

    #[test]
    fn test_toggle_press_flips_enabled_and_is_consumed() {
        // Arrange
        let mut engine = engine();

        // Act
        let disposition = engine.process(KeyEvent::press(KeyCode::F24));

        // Assert
        assert_eq!(disposition, KeyDisposition::Consumed);
        assert!(engine.is_enabled());
    }

    #[test]
    fn test_toggle_release_is_consumed_but_does_not_flip() {
        // Arrange
        let mut engine = engine();
        engine.process(KeyEvent::press(KeyCode::F24));

        // Act
        let disposition = engine.process(KeyEvent::release(KeyCode::F24));

        // Assert – still enabled after the release edge
        assert_eq!(disposition, KeyDisposition::Consumed);
        assert!(engine.is_enabled());
    }

    #[test]
    fn test_two_toggle_presses_restore_original_state() {
        let mut engine = engine();

        toggle(&mut engine);
        toggle(&mut engine);

        assert!(!engine.is_enabled());
    }

    // ── Pass-through ──────────────────────────────────────────────────────

    #[test]
    fn test_letters_pass_through_unchanged_while_disabled() {
        let mut engine = engine();

        for code in [KeyCode::KeyA, KeyCode::KeyM, KeyCode::KeyZ] {
            let down = engine.process(KeyEvent::press(code));
            let up = engine.process(KeyEvent::release(code));
            assert_eq!(down, KeyDisposition::Forward(KeyEvent::press(code)));
            assert_eq!(up, KeyDisposition::Forward(KeyEvent::release(code)));
        }
    }

    #[test]
    fn test_non_letters_pass_through_regardless_of_mode() {
        let mut engine = engine();
        let non_letters = [
            KeyCode::Digit5,
            KeyCode::Space,
            KeyCode::Enter,
            KeyCode::ShiftLeft,
            KeyCode::Unknown,
        ];

        for code in non_letters {
            let event = KeyEvent::press(code);
            assert_eq!(engine.process(event), KeyDisposition::Forward(event));
            engine.process(KeyEvent::release(code));
        }

        toggle(&mut engine);

        for code in non_letters {
            let event = KeyEvent::press(code);
            assert_eq!(engine.process(event), KeyDisposition::Forward(event));
            engine.process(KeyEvent::release(code));
        }
    }

    // ── Letter transform ──────────────────────────────────────────────────

    #[test]
    fn test_enabled_press_of_a_shifts_by_base_plus_default_rotation() {
        // Arrange
        let mut engine = engine();
        toggle(&mut engine);

        // Act – no reseed has happened, so rotation is the default 1 and
        // 'A' shifts by (13 + 1) % 26 = 14 positions to 'O'.
        let code = forwarded_code(engine.process(KeyEvent::press(KeyCode::KeyA)));

        // Assert
        assert_eq!(code, KeyCode::KeyO);
    }

    #[test]
    fn test_press_and_matching_release_report_the_same_substitute() {
        let mut engine = engine();
        toggle(&mut engine);

        for letter in 0..26u8 {
            let code = KeyCode::from_letter_index(letter);
            let down = engine.process(KeyEvent::press(code));
            let up = engine.process(KeyEvent::release(code));

            let down_code = forwarded_code(down);
            let up_code = forwarded_code(up);
            assert_eq!(
                down_code, up_code,
                "{code:?}: press reported {down_code:?} but release {up_code:?}"
            );
            assert!(down_code.is_letter());
        }
    }

    #[test]
    fn test_release_action_is_preserved_on_substituted_events() {
        let mut engine = engine();
        toggle(&mut engine);

        let disposition = engine.process(KeyEvent::release(KeyCode::KeyB));

        match disposition {
            KeyDisposition::Forward(event) => assert_eq!(event.action, KeyAction::Release),
            KeyDisposition::Consumed => panic!("release must be forwarded"),
        }
    }

    #[test]
    fn test_disable_restores_identity_forwarding() {
        // Arrange – enable, transform something, disable again
        let mut engine = engine();
        toggle(&mut engine);
        engine.process(KeyEvent::press(KeyCode::KeyA));
        engine.process(KeyEvent::release(KeyCode::KeyA));
        toggle(&mut engine);

        // Act
        let code = forwarded_code(engine.process(KeyEvent::press(KeyCode::KeyA)));

        // Assert
        assert_eq!(code, KeyCode::KeyA);
    }

    // ── Reseed gating ─────────────────────────────────────────────────────

    #[test]
    fn test_reseed_at_rest_redraws_rotation() {
        // Arrange
        let mut engine = engine();
        assert_eq!(engine.rotation(), 1);

        // Act – Backspace tap with nothing held
        engine.process(KeyEvent::press(KeyCode::Backspace));
        engine.process(KeyEvent::release(KeyCode::Backspace));

        // Assert – first draw from the default seed is pinned at 9
        assert_eq!(engine.rotation(), 9);
    }

    #[test]
    fn test_reseed_key_is_forwarded_unchanged() {
        let mut engine = engine();

        let event = KeyEvent::press(KeyCode::Backspace);
        assert_eq!(engine.process(event), KeyDisposition::Forward(event));

        // Still forwarded while encrypt mode is on (Backspace is no letter).
        engine.process(KeyEvent::release(KeyCode::Backspace));
        toggle(&mut engine);
        let event = KeyEvent::press(KeyCode::Backspace);
        assert_eq!(engine.process(event), KeyDisposition::Forward(event));
    }

    #[test]
    fn test_reseed_while_keys_held_leaves_rotation_unchanged() {
        // Arrange – hold a letter down
        let mut engine = engine();
        engine.process(KeyEvent::press(KeyCode::KeyJ));

        // Act – Backspace press while J is held
        engine.process(KeyEvent::press(KeyCode::Backspace));

        // Assert
        assert_eq!(engine.rotation(), DEFAULT_ROTATION);

        // Release everything; a reseed at rest now goes through.
        engine.process(KeyEvent::release(KeyCode::Backspace));
        engine.process(KeyEvent::release(KeyCode::KeyJ));
        engine.process(KeyEvent::press(KeyCode::Backspace));
        assert_eq!(engine.rotation(), 9);
    }

    #[test]
    fn test_reseed_release_edge_does_not_redraw() {
        // Arrange
        let mut engine = engine();
        engine.process(KeyEvent::press(KeyCode::Backspace));
        let after_press = engine.rotation();

        // Act
        engine.process(KeyEvent::release(KeyCode::Backspace));

        // Assert – exactly one draw per keystroke
        assert_eq!(engine.rotation(), after_press);
    }

    #[test]
    fn test_transform_after_reseed_uses_new_rotation() {
        // Arrange – rotation 9 after one reseed from the default seed
        let mut engine = engine();
        engine.process(KeyEvent::press(KeyCode::Backspace));
        engine.process(KeyEvent::release(KeyCode::Backspace));
        toggle(&mut engine);

        // Act – 'A' shifts by (13 + 9) % 26 = 22 positions to 'W'
        let code = forwarded_code(engine.process(KeyEvent::press(KeyCode::KeyA)));

        // Assert
        assert_eq!(code, KeyCode::KeyW);
    }

    #[test]
    fn test_held_letter_pins_rotation_for_its_release() {
        // Arrange – encrypt on, rotation drawn, letter held down
        let mut engine = engine();
        engine.process(KeyEvent::press(KeyCode::Backspace));
        engine.process(KeyEvent::release(KeyCode::Backspace));
        toggle(&mut engine);

        let down_code = forwarded_code(engine.process(KeyEvent::press(KeyCode::KeyQ)));

        // Act – attempt a reseed mid-keystroke; the rest gate blocks it, so
        // the release still maps to the same substitute.
        engine.process(KeyEvent::press(KeyCode::Backspace));
        engine.process(KeyEvent::release(KeyCode::Backspace));
        let up_code = forwarded_code(engine.process(KeyEvent::release(KeyCode::KeyQ)));

        // Assert
        assert_eq!(down_code, up_code);
    }

    // ── Shift arithmetic ──────────────────────────────────────────────────

    #[test]
    fn test_shifted_index_stays_in_alphabet_for_all_pairs() {
        for index in 0..ALPHABET_LEN {
            for rotation in 1..=25u8 {
                let shifted = (index + BASE_SHIFT + rotation) % ALPHABET_LEN;
                assert!(shifted < ALPHABET_LEN);
                // The substitute must always resolve to a letter key.
                assert!(KeyCode::from_letter_index(shifted).is_letter());
            }
        }
    }

    #[test]
    fn test_rotation_13_makes_the_substitution_an_involution() {
        // (13 + 13) % 26 = 0 only when rotation is 13; for every other
        // rotation applying the shift twice does not return the original.
        for index in 0..ALPHABET_LEN {
            let once = (index + BASE_SHIFT + 13) % ALPHABET_LEN;
            let twice = (once + BASE_SHIFT + 13) % ALPHABET_LEN;
            assert_eq!(twice, index);
        }
        let index = 0u8;
        let once = (index + BASE_SHIFT + 5) % ALPHABET_LEN;
        let twice = (once + BASE_SHIFT + 5) % ALPHABET_LEN;
        assert_ne!(twice, index);
    }
}
