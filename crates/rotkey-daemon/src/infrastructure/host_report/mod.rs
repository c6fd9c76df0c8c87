//! Host key reporting infrastructure.
//!
//! The engine decides *what* the host sees; a [`HostReporter`] decides
//! *how* it gets there. On real hardware this is the USB HID report writer;
//! this repository ships a tracing-backed stand-in for headless operation
//! and a recording mock for tests.

use rotkey_core::KeyCode;
use thiserror::Error;

pub mod mock;
pub mod trace;

/// Error type for host reporting operations.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The transport to the host rejected the report.
    #[error("host transport error: {0}")]
    Transport(String),
    /// The outbound report queue is full; the event was dropped.
    #[error("host report queue full")]
    QueueFull,
}

/// Sink for key events the engine decided to forward.
///
/// One call per event edge. Implementations must not block the event pump;
/// a reporter that cannot accept an event returns an error and the pump
/// logs and moves on.
pub trait HostReporter: Send + Sync {
    /// Reports a key press to the host.
    fn report_press(&self, key: KeyCode) -> Result<(), ReportError>;

    /// Reports a key release to the host.
    fn report_release(&self, key: KeyCode) -> Result<(), ReportError>;
}
