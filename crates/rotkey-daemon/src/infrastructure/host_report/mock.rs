//! Recording host reporter for unit and integration tests.
//!
//! Each reported edge is pushed into a `Mutex<Vec<KeyEvent>>` so tests can
//! assert exactly what reached the host and in what order. Set
//! `should_fail` to exercise error-handling paths in the pump without a
//! broken transport.

use std::sync::Mutex;

use rotkey_core::{KeyCode, KeyEvent};

use super::{HostReporter, ReportError};

/// A reporter that records every call instead of talking to hardware.
#[derive(Default)]
pub struct MockHostReporter {
    /// Every reported edge, in arrival order.
    pub reports: Mutex<Vec<KeyEvent>>,
    /// When `true`, every call returns [`ReportError::Transport`].
    pub should_fail: bool,
}

impl MockHostReporter {
    /// Creates a reporter with an empty record and `should_fail = false`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything reported so far.
    pub fn reported(&self) -> Vec<KeyEvent> {
        self.reports.lock().unwrap().clone()
    }
}

impl HostReporter for MockHostReporter {
    fn report_press(&self, key: KeyCode) -> Result<(), ReportError> {
        if self.should_fail {
            return Err(ReportError::Transport("mock failure".into()));
        }
        self.reports.lock().unwrap().push(KeyEvent::press(key));
        Ok(())
    }

    fn report_release(&self, key: KeyCode) -> Result<(), ReportError> {
        if self.should_fail {
            return Err(ReportError::Transport("mock failure".into()));
        }
        self.reports.lock().unwrap().push(KeyEvent::release(key));
        Ok(())
    }
}
