//! # rotkey-daemon
//!
//! The controller process around [`rotkey_core`]: receives key events from a
//! scan source, runs each through the cipher engine, and reports the result
//! to the host.
//!
//! Layering follows the usual split:
//!
//! - **`application`** – the event-pump use case. Depends only on the
//!   [`HostReporter`](infrastructure::host_report::HostReporter) trait and
//!   core domain types, so it is fully unit-testable.
//! - **`infrastructure`** – the seams to the outside world: scan sources
//!   (stdin replay for headless operation, a scripted mock for tests), host
//!   reporters (tracing-backed stand-in, recording mock), and TOML
//!   configuration storage.

pub mod application;
pub mod infrastructure;
