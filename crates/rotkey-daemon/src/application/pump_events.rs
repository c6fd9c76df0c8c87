//! PumpEventsUseCase: drives the cipher engine over the event stream.
//!
//! The pump owns the [`CipherEngine`] and a [`HostReporter`] trait object.
//! It consumes one event at a time, in scan order, and reports whatever the
//! engine decides to forward. The engine call is synchronous and the pump
//! holds no locks, so event N is fully handled before event N+1 is read,
//! which is the cooperative model the engine's state records rely on.
//!
//! Reporter failures are logged and counted, never fatal: dropping one
//! event beats wedging the keyboard.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::time::Duration;

use rotkey_core::{CipherEngine, KeyAction, KeyDisposition, KeyEvent};
use tracing::{info, trace, warn};

use crate::infrastructure::host_report::HostReporter;

/// How often the pump wakes up to check the shutdown flag while idle.
const IDLE_POLL: Duration = Duration::from_millis(100);

/// The event-pump use case.
pub struct PumpEventsUseCase {
    engine: CipherEngine,
    reporter: Arc<dyn HostReporter>,
    forwarded: u64,
    consumed: u64,
    failed: u64,
}

impl PumpEventsUseCase {
    /// Creates a pump around an engine and a host reporter.
    pub fn new(engine: CipherEngine, reporter: Arc<dyn HostReporter>) -> Self {
        Self {
            engine,
            reporter,
            forwarded: 0,
            consumed: 0,
            failed: 0,
        }
    }

    /// Handles a single scanner event.
    pub fn handle_event(&mut self, event: KeyEvent) {
        match self.engine.process(event) {
            KeyDisposition::Forward(out) => {
                let result = match out.action {
                    KeyAction::Press => self.reporter.report_press(out.code),
                    KeyAction::Release => self.reporter.report_release(out.code),
                };
                match result {
                    Ok(()) => self.forwarded += 1,
                    Err(error) => {
                        self.failed += 1;
                        warn!(%error, event = ?out, "host report failed, event dropped");
                    }
                }
            }
            KeyDisposition::Consumed => {
                self.consumed += 1;
                trace!(event = ?event, "event consumed by cipher engine");
            }
        }
    }

    /// Drains `receiver` until the stream disconnects or `running` clears.
    ///
    /// Blocking; run it on a dedicated thread or blocking task.
    pub fn run(&mut self, receiver: mpsc::Receiver<KeyEvent>, running: Arc<AtomicBool>) {
        while running.load(Ordering::Relaxed) {
            match receiver.recv_timeout(IDLE_POLL) {
                Ok(event) => self.handle_event(event),
                Err(mpsc::RecvTimeoutError::Timeout) => continue,
                Err(mpsc::RecvTimeoutError::Disconnected) => break,
            }
        }
        info!(
            forwarded = self.forwarded,
            consumed = self.consumed,
            failed = self.failed,
            "event pump stopped"
        );
    }

    /// Read access to the engine, for status reporting and tests.
    pub fn engine(&self) -> &CipherEngine {
        &self.engine
    }

    /// Number of events whose host report failed.
    pub fn failed_reports(&self) -> u64 {
        self.failed
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
