//! Many producers, one sink

use crate::common::*;
use isotrace::prelude::*;
use isotrace::sink::archive_path;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

const THREADS: usize = 8;
const PER_THREAD: usize = 100;

#[test]
fn test_records_never_interleave() {
    let (_dir, sink) = rotating_sink("q2.log", 100, 4096);
    let sink = Arc::new(sink);

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let sink = Arc::clone(&sink);
            thread::spawn(move || {
                for n in 0..PER_THREAD {
                    let event = LogEvent::tagged(format!("thread-{}", t), "info");
                    event.add_message(format!("{}/{}", t, n));
                    event.add_message(PackedField::new(11, n.to_string(), 6));
                    sink.log(&event);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    sink.flush().unwrap();

    let mut records = read_records(sink.path());
    for n in 1..=100 {
        let path = archive_path(sink.path(), n);
        if path.exists() {
            records.extend(read_records(&path));
        }
    }

    assert_eq!(records.len(), THREADS * PER_THREAD);
    let ids: HashSet<String> = records
        .iter()
        .map(|r| r["info"][0].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids.len(), THREADS * PER_THREAD);
    assert_eq!(sink.stats().records, (THREADS * PER_THREAD) as u64);
    assert_eq!(sink.stats().failures, 0);
}

#[test]
fn test_rotation_races_with_logging() {
    let (_dir, sink) = rotating_sink("q2.log", 40, 10_000_000);
    let sink = Arc::new(sink);

    let producers: Vec<_> = (0..4)
        .map(|t| {
            let sink = Arc::clone(&sink);
            thread::spawn(move || {
                for n in 0..50 {
                    let event = LogEvent::tagged("race", "info");
                    event.add_message(format!("{}/{}", t, n));
                    sink.log(&event);
                }
            })
        })
        .collect();
    let rotator = {
        let sink = Arc::clone(&sink);
        thread::spawn(move || {
            for _ in 0..20 {
                sink.log_rotate().unwrap();
                thread::yield_now();
            }
        })
    };
    for p in producers {
        p.join().unwrap();
    }
    rotator.join().unwrap();
    sink.flush().unwrap();

    let mut total = read_records(sink.path()).len();
    for n in 1..=20 {
        total += read_records(&archive_path(sink.path(), n)).len();
    }
    assert_eq!(total, 200);
}

#[test]
fn test_shared_event_logged_from_many_threads() {
    let (_dir, sink) = rotating_sink("q2.log", 1, 10_000_000);
    let sink = Arc::new(sink);
    let event = Arc::new(LogEvent::tagged("switch", "trace"));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let sink = Arc::clone(&sink);
            let event = Arc::clone(&event);
            thread::spawn(move || {
                for n in 0..25 {
                    event.add_message(format!("{}:{}", t, n));
                    sink.log(&event);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    sink.flush().unwrap();

    let records = read_records(sink.path());
    assert_eq!(records.len(), 100);
    let longest = records
        .iter()
        .map(|r| r["trace"].as_array().map_or(0, Vec::len))
        .max()
        .unwrap();
    assert_eq!(longest, 100);
}
