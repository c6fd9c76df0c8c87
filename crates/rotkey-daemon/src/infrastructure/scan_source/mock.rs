//! Scripted scan source for tests.
//!
//! Holds a pre-written event script; `start()` plays the whole script into
//! the channel and hangs up, so a pump draining the receiver sees the
//! script followed by a clean disconnect.

use std::sync::mpsc;
use std::sync::Mutex;

use rotkey_core::KeyEvent;

use super::{ScanError, ScanSource};

/// A scan source that replays a fixed list of events.
pub struct MockScanSource {
    script: Mutex<Option<Vec<KeyEvent>>>,
}

impl MockScanSource {
    /// Creates a source that will play `script` once.
    pub fn with_script(script: Vec<KeyEvent>) -> Self {
        Self {
            script: Mutex::new(Some(script)),
        }
    }
}

impl ScanSource for MockScanSource {
    fn start(&self) -> Result<mpsc::Receiver<KeyEvent>, ScanError> {
        let script = self
            .script
            .lock()
            .unwrap()
            .take()
            .ok_or(ScanError::AlreadyStarted)?;

        let (sender, receiver) = mpsc::channel();
        for event in script {
            // The unbounded channel buffers the full script; the receiver
            // side drains at its own pace.
            sender.send(event).expect("receiver alive in this scope");
        }
        Ok(receiver)
    }

    fn stop(&self) {}
}
