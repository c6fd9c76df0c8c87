//! Stdin replay scan source for headless operation.
//!
//! Reads a line-oriented event script from standard input and feeds it to
//! the pump, one line per command:
//!
//! ```text
//! press a          # key down
//! release a        # key up
//! tap q            # press + release
//! type hello world # tap every letter (and space) in order
//! # comment lines and blank lines are ignored
//! ```
//!
//! Key tokens are a single letter or digit, an `fN` function key, or a
//! named key (`space`, `enter`, `backspace`, ...). Unparseable lines are
//! logged and skipped so a typo does not kill the stream.

use std::io::BufRead;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

use rotkey_core::{KeyCode, KeyEvent};
use tracing::{debug, warn};

use super::{ScanError, ScanSource};

/// Scan source backed by standard input.
pub struct StdinScanSource {
    started: AtomicBool,
    stopping: Arc<AtomicBool>,
}

impl StdinScanSource {
    pub fn new() -> Self {
        Self {
            started: AtomicBool::new(false),
            stopping: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl Default for StdinScanSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanSource for StdinScanSource {
    fn start(&self) -> Result<mpsc::Receiver<KeyEvent>, ScanError> {
        if self.started.swap(true, Ordering::SeqCst) {
            return Err(ScanError::AlreadyStarted);
        }

        let (sender, receiver) = mpsc::channel();
        let stopping = Arc::clone(&self.stopping);

        thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                if stopping.load(Ordering::Relaxed) {
                    break;
                }
                let line = match line {
                    Ok(line) => line,
                    Err(error) => {
                        warn!(%error, "stdin read failed, ending event stream");
                        break;
                    }
                };
                match parse_line(&line) {
                    Ok(events) => {
                        for event in events {
                            if sender.send(event).is_err() {
                                // Pump is gone; nothing left to feed.
                                return;
                            }
                        }
                    }
                    Err(reason) => warn!(line, reason, "ignored input line"),
                }
            }
            debug!("stdin event stream ended");
        });

        Ok(receiver)
    }

    fn stop(&self) {
        self.stopping.store(true, Ordering::Relaxed);
    }
}

/// Parses one input line into zero or more events.
fn parse_line(line: &str) -> Result<Vec<KeyEvent>, &'static str> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(Vec::new());
    }

    let (verb, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => return Err("missing argument"),
    };

    match verb.to_ascii_lowercase().as_str() {
        "press" => {
            let code = parse_key(rest).ok_or("unknown key")?;
            Ok(vec![KeyEvent::press(code)])
        }
        "release" => {
            let code = parse_key(rest).ok_or("unknown key")?;
            Ok(vec![KeyEvent::release(code)])
        }
        "tap" => {
            let code = parse_key(rest).ok_or("unknown key")?;
            Ok(vec![KeyEvent::press(code), KeyEvent::release(code)])
        }
        "type" => {
            let mut events = Vec::with_capacity(rest.len() * 2);
            for ch in rest.chars() {
                let code = if ch == ' ' {
                    KeyCode::Space
                } else {
                    KeyCode::from_ascii_letter(ch).ok_or("type accepts letters and spaces only")?
                };
                events.push(KeyEvent::press(code));
                events.push(KeyEvent::release(code));
            }
            Ok(events)
        }
        _ => Err("unknown command"),
    }
}

/// Resolves a key token: single letter/digit, `fN`, or a named key.
fn parse_key(token: &str) -> Option<KeyCode> {
    let mut chars = token.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        if let Some(code) = KeyCode::from_ascii_letter(ch) {
            return Some(code);
        }
        if let Some(code) = digit_key(ch) {
            return Some(code);
        }
    }
    named_key(&token.to_ascii_lowercase())
}

fn digit_key(ch: char) -> Option<KeyCode> {
    Some(match ch {
        '1' => KeyCode::Digit1,
        '2' => KeyCode::Digit2,
        '3' => KeyCode::Digit3,
        '4' => KeyCode::Digit4,
        '5' => KeyCode::Digit5,
        '6' => KeyCode::Digit6,
        '7' => KeyCode::Digit7,
        '8' => KeyCode::Digit8,
        '9' => KeyCode::Digit9,
        '0' => KeyCode::Digit0,
        _ => return None,
    })
}

fn named_key(name: &str) -> Option<KeyCode> {
    Some(match name {
        "space" => KeyCode::Space,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "escape" | "esc" => KeyCode::Escape,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "capslock" => KeyCode::CapsLock,
        "scrolllock" => KeyCode::ScrollLock,
        "f1" => KeyCode::F1,
        "f2" => KeyCode::F2,
        "f3" => KeyCode::F3,
        "f4" => KeyCode::F4,
        "f5" => KeyCode::F5,
        "f6" => KeyCode::F6,
        "f7" => KeyCode::F7,
        "f8" => KeyCode::F8,
        "f9" => KeyCode::F9,
        "f10" => KeyCode::F10,
        "f11" => KeyCode::F11,
        "f12" => KeyCode::F12,
        "f13" => KeyCode::F13,
        "f14" => KeyCode::F14,
        "f15" => KeyCode::F15,
        "f16" => KeyCode::F16,
        "f17" => KeyCode::F17,
        "f18" => KeyCode::F18,
        "f19" => KeyCode::F19,
        "f20" => KeyCode::F20,
        "f21" => KeyCode::F21,
        "f22" => KeyCode::F22,
        "f23" => KeyCode::F23,
        "f24" => KeyCode::F24,
        _ => return None,
    })
}
