//! Tracing-backed host reporter for headless operation.
//!
//! Stands in where a real USB HID report writer would sit: every forwarded
//! edge is logged instead of injected. Useful for driving the daemon from a
//! terminal and watching what the host would have received.

use rotkey_core::KeyCode;
use tracing::info;

use super::{HostReporter, ReportError};

/// Reporter that logs each forwarded event at `info` level.
#[derive(Debug, Default)]
pub struct TraceReporter;

impl TraceReporter {
    pub fn new() -> Self {
        Self
    }
}

impl HostReporter for TraceReporter {
    fn report_press(&self, key: KeyCode) -> Result<(), ReportError> {
        info!(key = ?key, "host ← press");
        Ok(())
    }

    fn report_release(&self, key: KeyCode) -> Result<(), ReportError> {
        info!(key = ?key, "host ← release");
        Ok(())
    }
}
