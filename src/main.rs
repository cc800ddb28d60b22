//! firelog: Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                     │
//! │                                                              │
//! │  SerialLineSource   CsvRecordSink   SystemClock   Console    │
//! │  (LineSource)       (RecordSink)    (Clock)       (EventSink)│
//! │                                                              │
//! │  ──────────────── Port Trait Boundary ─────────────────      │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │        LoggerService (decode · classify · FSM)         │  │
//! │  └────────────────────────────────────────────────────────┘  │
//! │                                                              │
//! │  ShutdownToken ◀── SIGINT / SIGTERM                          │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::{Context, Result};
use log::{debug, info};

use firelog::adapters::{ConsoleEventSink, CsvRecordSink, SerialLineSource, SystemClock};
use firelog::app::service::LoggerService;
use firelog::config::LoggerConfig;
use firelog::shutdown::ShutdownToken;

fn main() -> Result<()> {
    // ── 0. Logging (RUST_LOG overrides) ──────────────────────
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("firelog v{}", env!("CARGO_PKG_VERSION"));

    // ── 1. Fixed configuration ───────────────────────────────
    let config = LoggerConfig::default();
    debug!("Config: {}", serde_json::to_string(&config)?);

    // ── 2. Interrupt → shutdown token ────────────────────────
    let shutdown = ShutdownToken::new();
    shutdown
        .install_interrupt_handler()
        .context("interrupt handling unavailable")?;

    // ── 3. Serial connection (opens, then settles) ───────────
    let mut source = SerialLineSource::open(&config).context("ESP32 not reachable")?;

    // ── 4. Output file, created fresh ────────────────────────
    let mut sink = CsvRecordSink::create(&config.output_path)?;

    // ── 5. Loop until interrupted ────────────────────────────
    let mut service = LoggerService::new();
    let summary = service.run(
        &mut source,
        &mut sink,
        &SystemClock::new(),
        &mut ConsoleEventSink::new(),
        &shutdown,
    )?;

    info!(
        "Done: {} rows written to {}, {} empty reads",
        summary.rows_written,
        config.output_path.display(),
        summary.lines_skipped
    );
    Ok(())
}
