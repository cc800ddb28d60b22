//! Integration tests for the LoggerService read-classify-write pipeline.
//!
//! All ports are mocks from [`mock_io`]; the stop path is exercised through
//! the shutdown token rather than a real signal.

use std::io;

use chrono::NaiveDateTime;
use firelog::app::events::AppEvent;
use firelog::app::service::{LoggerService, StepOutcome};
use firelog::fsm::StateId;
use firelog::reading::TIMESTAMP_FORMAT;
use firelog::shutdown::ShutdownToken;
use firelog::Error;

use super::mock_io::{
    journal, Feed, Journal, Op, RecordingEvents, RecordingSink, ScriptedSource, SteppingClock,
};

struct Rig {
    journal: Journal,
    shutdown: ShutdownToken,
    source: ScriptedSource,
    sink: RecordingSink,
    clock: SteppingClock,
    events: RecordingEvents,
}

fn rig(script: Vec<Feed>) -> Rig {
    let journal = journal();
    let shutdown = ShutdownToken::new();
    Rig {
        source: ScriptedSource::new(script, &journal, &shutdown),
        sink: RecordingSink::new(&journal),
        clock: SteppingClock::new(1500, &journal),
        events: RecordingEvents::default(),
        journal,
        shutdown,
    }
}

fn run(r: &mut Rig) -> firelog::Result<firelog::app::service::RunSummary> {
    LoggerService::new().run(
        &mut r.source,
        &mut r.sink,
        &r.clock,
        &mut r.events,
        &r.shutdown,
    )
}

// ── End-to-end scenarios ──────────────────────────────────────

#[test]
fn fire_line_logs_fire_detected() {
    let mut r = rig(vec![Feed::Line(b"Fire Detected\r\n")]);
    let summary = run(&mut r).unwrap();

    assert_eq!(summary.rows_written, 1);
    assert_eq!(r.sink.statuses(), ["Fire Detected"]);
}

#[test]
fn other_text_logs_no_fire_detected() {
    let mut r = rig(vec![Feed::Line(b"Nothing\n")]);
    run(&mut r).unwrap();
    assert_eq!(r.sink.statuses(), ["No Fire Detected"]);
}

#[test]
fn empty_line_appends_nothing() {
    let mut r = rig(vec![Feed::Line(b"\n"), Feed::Line(b"")]);
    let summary = run(&mut r).unwrap();

    assert_eq!(summary.rows_written, 0);
    assert!(r.sink.rows.is_empty());
    assert!(r.sink.header_written);
}

#[test]
fn interrupt_mid_loop_stops_cleanly() {
    let mut r = rig(vec![
        Feed::Line(b"Fire Detected\n"),
        Feed::Interrupt,
        Feed::Line(b"Fire Detected\n"),
    ]);
    let summary = run(&mut r).unwrap();

    assert_eq!(summary.final_state, StateId::Stopped);
    assert_eq!(summary.rows_written, 1);
    assert_eq!(r.source.remaining(), 1, "no read after the interrupt");
    assert_eq!(r.source.close_count, 1);
    assert_eq!(
        r.events.events.last(),
        Some(&AppEvent::Stopped { rows_written: 1 })
    );
}

// ── Ordering guarantees ───────────────────────────────────────

#[test]
fn header_precedes_everything() {
    let mut r = rig(vec![Feed::Line(b"Fire Detected\n")]);
    run(&mut r).unwrap();

    let ops = r.journal.borrow();
    assert_eq!(ops[0], Op::Header);
    assert_eq!(ops[1], Op::Flush);
    assert_eq!(r.events.events.first(), Some(&AppEvent::Listening));
}

#[test]
fn every_row_is_flushed_before_the_next_read() {
    let mut r = rig(vec![
        Feed::Line(b"Fire Detected\n"),
        Feed::Line(b"idle\n"),
        Feed::Line(b"\n"),
        Feed::Line(b"Fire Detected\n"),
    ]);
    run(&mut r).unwrap();

    let ops = r.journal.borrow();
    for (i, op) in ops.iter().enumerate() {
        if let Op::Append(_) = op {
            assert_eq!(ops.get(i + 1), Some(&Op::Flush), "append at {i} not flushed");
        }
    }
    let appends = ops.iter().filter(|op| matches!(op, Op::Append(_))).count();
    assert_eq!(appends, 3);
}

#[test]
fn serial_is_closed_last() {
    let mut r = rig(vec![Feed::Line(b"Fire Detected\n")]);
    run(&mut r).unwrap();
    assert_eq!(r.journal.borrow().last(), Some(&Op::Close));
}

// ── Timestamps ────────────────────────────────────────────────

#[test]
fn blank_reads_never_take_a_timestamp() {
    let mut r = rig(vec![
        Feed::Line(b"   \r\n"),
        Feed::Bytes(vec![0xff, 0xfe, 0x80, b'\n']),
        Feed::Line(b"\t\n"),
    ]);
    let summary = run(&mut r).unwrap();

    assert_eq!(summary.rows_written, 0);
    assert_eq!(summary.lines_skipped, 4, "three blanks plus the final interrupt read");
    assert!(!r.journal.borrow().contains(&Op::Now));
}

#[test]
fn timestamps_are_formatted_and_non_decreasing() {
    let mut r = rig(vec![
        Feed::Line(b"Fire Detected\n"),
        Feed::Line(b"x\n"),
        Feed::Line(b"Fire Detected\n"),
        Feed::Line(b"y\n"),
    ]);
    run(&mut r).unwrap();

    let stamps: Vec<String> = r.sink.rows.iter().map(|row| row.timestamp_str()).collect();
    assert_eq!(stamps.len(), 4);
    for s in &stamps {
        assert_eq!(s.len(), 19);
        assert!(NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).is_ok(), "bad stamp {s}");
    }
    assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(stamps[0], "2025-02-25 18:04:58");
}

// ── Failure paths ─────────────────────────────────────────────

#[test]
fn device_unplugged_propagates_and_releases_serial() {
    let mut r = rig(vec![
        Feed::Line(b"Fire Detected\n"),
        Feed::Fail(io::ErrorKind::BrokenPipe),
        Feed::Line(b"Fire Detected\n"),
    ]);
    let err = run(&mut r).unwrap_err();

    assert!(matches!(err, Error::SerialRead(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    assert_eq!(r.sink.rows.len(), 1);
    assert_eq!(r.source.close_count, 1);
    assert!(!r.shutdown.is_triggered());
}

#[test]
fn write_failure_propagates_and_releases_serial() {
    let mut r = rig(vec![Feed::Line(b"Fire Detected\n")]);
    r.sink.fail_appends = true;
    let err = run(&mut r).unwrap_err();

    assert!(matches!(err, Error::OutputWrite(_)));
    assert_eq!(r.source.close_count, 1);
}

#[test]
fn timeouts_keep_the_loop_running() {
    let mut r = rig(vec![
        Feed::Fail(io::ErrorKind::TimedOut),
        Feed::Fail(io::ErrorKind::Interrupted),
        Feed::Line(b"Fire Detected\n"),
    ]);
    let summary = run(&mut r).unwrap();
    assert_eq!(summary.rows_written, 1);
    assert_eq!(summary.lines_skipped, 3, "two timeouts plus the final interrupt read");
}

// ── Step-level behaviour ──────────────────────────────────────

#[test]
fn step_after_stop_is_inert() {
    let mut r = rig(vec![Feed::Line(b"Fire Detected\n")]);
    let mut svc = LoggerService::new();
    svc.start(&mut r.sink, &mut r.events).unwrap();

    r.shutdown.trigger();
    let first = svc
        .step(&mut r.source, &mut r.sink, &r.clock, &mut r.events, &r.shutdown)
        .unwrap();
    let second = svc
        .step(&mut r.source, &mut r.sink, &r.clock, &mut r.events, &r.shutdown)
        .unwrap();

    assert_eq!(first, StepOutcome::Stopped);
    assert_eq!(second, StepOutcome::Stopped);
    assert_eq!(svc.state(), StateId::Stopped);
    assert!(!r.journal.borrow().contains(&Op::Read));
    let stops = r
        .events
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::Stopped { .. }))
        .count();
    assert_eq!(stops, 1, "farewell is emitted once");
}
