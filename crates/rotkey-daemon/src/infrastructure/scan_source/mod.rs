//! Key-event sources for the daemon.
//!
//! A [`ScanSource`] plays the role of the matrix scanner: it produces the
//! ordered stream of [`KeyEvent`]s the pump consumes. Events are delivered
//! through a plain `mpsc` channel in physical scan order; the pump never
//! reorders or buffers beyond the channel itself.
//!
//! Implementations here are the stdin replay source (headless operation)
//! and a scripted mock (tests). Real matrix scanning lives outside this
//! repository.

use std::sync::mpsc;

use rotkey_core::KeyEvent;
use thiserror::Error;

pub mod mock;
pub mod stdin;

/// Error type for scan source operations.
#[derive(Debug, Error)]
pub enum ScanError {
    /// `start()` was called twice on the same source.
    #[error("scan source already started")]
    AlreadyStarted,
    /// The underlying input stream could not be opened.
    #[error("failed to open input stream: {0}")]
    Open(String),
}

/// Trait abstracting key-event production.
pub trait ScanSource: Send {
    /// Starts the source and returns the receiving end of its event stream.
    ///
    /// The stream ends (the channel disconnects) when the source is
    /// exhausted or stopped.
    fn start(&self) -> Result<mpsc::Receiver<KeyEvent>, ScanError>;

    /// Stops the source and releases any resources it holds.
    fn stop(&self);
}
