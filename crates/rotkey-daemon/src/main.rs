//! Rotkey daemon entry point.
//!
//! Wires the infrastructure together and runs the event pump:
//!
//! ```text
//! main()
//!  └─ load_config()          -- TOML from the platform config dir
//!  └─ CipherEngine           -- toggle/reseed keys + seed from config
//!  └─ StdinScanSource        -- line-oriented event stream (reader thread)
//!  └─ PumpEventsUseCase      -- blocking task, TraceReporter as the host
//! ```
//!
//! On real hardware the stdin source and tracing reporter are replaced by
//! the matrix scanner and the USB HID report writer; nothing else changes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rotkey_core::CipherEngine;
use rotkey_daemon::application::PumpEventsUseCase;
use rotkey_daemon::infrastructure::host_report::trace::TraceReporter;
use rotkey_daemon::infrastructure::scan_source::stdin::StdinScanSource;
use rotkey_daemon::infrastructure::scan_source::ScanSource;
use rotkey_daemon::infrastructure::storage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = storage::load_config().context("loading configuration")?;

    // Initialise structured logging.  `RUST_LOG` wins over the config file.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.daemon.log_level)),
        )
        .init();

    info!("Rotkey daemon starting");

    let engine = CipherEngine::new(config.cipher.to_settings());
    let mut pump = PumpEventsUseCase::new(engine, Arc::new(TraceReporter::new()));

    let source = StdinScanSource::new();
    let receiver = source.start().context("starting scan source")?;

    // Shutdown flag shared with the pump and the signal handler.
    let running = Arc::new(AtomicBool::new(true));

    let running_clone = Arc::clone(&running);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown signal received");
            running_clone.store(false, Ordering::Relaxed);
        }
    });

    info!(
        toggle_key = ?config.cipher.toggle_key,
        reseed_key = ?config.cipher.reseed_key,
        "event pump running; feed `press`/`release`/`tap`/`type` lines on stdin"
    );

    let pump_running = Arc::clone(&running);
    tokio::task::spawn_blocking(move || pump.run(receiver, pump_running))
        .await
        .context("event pump task panicked")?;

    source.stop();
    info!("Rotkey daemon stopped");
    Ok(())
}
